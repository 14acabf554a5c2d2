//! Camera parameter editor resource.
//!
//! [`CameraEditor`] owns the [`CameraState`] for the camera toy, tracks which
//! [`ControlTarget`] is active, and turns numpad key presses into deltas via
//! the [`KeyBindings`] table. The host reads [`CameraEditor::state`] back each
//! frame and applies it to the rendering camera (see
//! [`crate::systems::camerasync`]).

use bevy_ecs::prelude::Resource;

use crate::resources::camerastate::{CameraState, ControlTarget};
use crate::resources::keybindings::{KeyBindings, Modifiers, NumpadKey, StepSizes};

#[derive(Resource, Debug, Clone)]
pub struct CameraEditor {
    active: ControlTarget,
    state: CameraState,
    bindings: KeyBindings,
    steps: StepSizes,
}

impl CameraEditor {
    /// Editor over `state`, starting on [`ControlTarget::Viewport`].
    pub fn new(state: CameraState, steps: StepSizes) -> Self {
        Self {
            active: ControlTarget::default(),
            state,
            bindings: KeyBindings::default(),
            steps,
        }
    }

    /// Editor over the default camera for a `width x height` screen.
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self::new(CameraState::for_screen(width, height), StepSizes::default())
    }

    pub fn active_target(&self) -> ControlTarget {
        self.active
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn select_next(&mut self) -> ControlTarget {
        self.active = self.active.next();
        self.active
    }

    pub fn select_previous(&mut self) -> ControlTarget {
        self.active = self.active.previous();
        self.active
    }

    /// Apply `key` to the active target.
    ///
    /// Returns the signed delta that was added, or `None` when the key has no
    /// binding under the active target (the state is left unchanged).
    pub fn apply_key(&mut self, key: NumpadKey, modifiers: Modifiers) -> Option<f32> {
        let delta = self.bindings.lookup(self.active, key)?;
        let amount = delta.amount(modifiers, &self.steps);
        self.state
            .adjust(self.active, delta.axis, amount)
            .then_some(amount)
    }

    /// See [`CameraState::rescale`].
    pub fn rescale(&mut self, sx: f32, sy: f32) {
        self.state.rescale(sx, sy);
    }

    /// Describe the active target's current values.
    pub fn report(&self) -> String {
        self.state.describe(self.active)
    }
}
