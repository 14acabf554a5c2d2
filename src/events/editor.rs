//! Camera editor events and observers.
//!
//! The input system triggers a [`CameraKeyEvent`] for every numpad key pressed
//! this frame and a [`CycleTargetEvent`] for comma/period. The observers here
//! forward them to the [`CameraEditor`] resource and report the result through
//! the log. Worlds without a `CameraEditor` (the split-screen demo) ignore
//! both events.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::cameraeditor::CameraEditor;
use crate::resources::keybindings::{Modifiers, NumpadKey};

/// A numpad key was pressed while `modifiers` were held.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraKeyEvent {
    pub key: NumpadKey,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Move the editor's selection one step in `direction`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CycleTargetEvent {
    pub direction: CycleDirection,
}

/// Apply a numpad key to the active target.
///
/// Unbound keys are silently ignored (logged at `debug` only).
pub fn camera_key_observer(trigger: On<CameraKeyEvent>, editor: Option<ResMut<CameraEditor>>) {
    let Some(mut editor) = editor else {
        return;
    };
    let event = trigger.event();
    match editor.apply_key(event.key, event.modifiers) {
        Some(_) => info!("{}", editor.report()),
        None => debug!(
            "{:?} has no binding under {}",
            event.key,
            editor.active_target()
        ),
    }
}

/// Cycle the editor's active target.
pub fn cycle_target_observer(trigger: On<CycleTargetEvent>, editor: Option<ResMut<CameraEditor>>) {
    let Some(mut editor) = editor else {
        return;
    };
    let target = match trigger.event().direction {
        CycleDirection::Next => editor.select_next(),
        CycleDirection::Previous => editor.select_previous(),
    };
    info!("You are now controlling: {}", target);
}
