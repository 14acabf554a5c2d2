//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the toy cares about and exposes it
//! to systems via the [`InputState`] resource. WASD drives the ship and the
//! left/right arrows spin it. Comma and period cycle the camera editor's
//! target, and the Ctrl/Alt keys feed the editor's [`Modifiers`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::keybindings::{Modifiers, NumpadKey};

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-frame keyboard state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub thrust_up: BoolState,
    pub thrust_left: BoolState,
    pub thrust_down: BoolState,
    pub thrust_right: BoolState,
    pub rotate_left: BoolState,
    pub rotate_right: BoolState,
    // Camera editor target cycling
    pub select_next: BoolState,
    pub select_previous: BoolState,
    // Modifiers
    pub ctrl_left: BoolState,
    pub ctrl_right: BoolState,
    pub alt_left: BoolState,
    pub alt_right: BoolState,
    pub mode_debug: BoolState,
    /// Numpad keys pressed this frame, in [`NumpadKey::ALL`] order.
    pub numpad_pressed: Vec<NumpadKey>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            thrust_up: BoolState::bound(KeyboardKey::KEY_W),
            thrust_left: BoolState::bound(KeyboardKey::KEY_A),
            thrust_down: BoolState::bound(KeyboardKey::KEY_S),
            thrust_right: BoolState::bound(KeyboardKey::KEY_D),
            rotate_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            rotate_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            select_next: BoolState::bound(KeyboardKey::KEY_PERIOD),
            select_previous: BoolState::bound(KeyboardKey::KEY_COMMA),
            ctrl_left: BoolState::bound(KeyboardKey::KEY_LEFT_CONTROL),
            ctrl_right: BoolState::bound(KeyboardKey::KEY_RIGHT_CONTROL),
            alt_left: BoolState::bound(KeyboardKey::KEY_LEFT_ALT),
            alt_right: BoolState::bound(KeyboardKey::KEY_RIGHT_ALT),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            numpad_pressed: Vec::new(),
        }
    }
}

impl InputState {
    /// Modifier flags held this frame.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl_left.active || self.ctrl_right.active,
            alt: self.alt_left.active || self.alt_right.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.thrust_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.thrust_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.thrust_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.thrust_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.rotate_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.rotate_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.select_next.key_binding, KeyboardKey::KEY_PERIOD);
        assert_eq!(input.select_previous.key_binding, KeyboardKey::KEY_COMMA);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_modifiers_default_none() {
        assert_eq!(InputState::default().modifiers(), Modifiers::NONE);
        assert!(InputState::default().numpad_pressed.is_empty());
    }

    #[test]
    fn test_modifiers_either_side() {
        let mut input = InputState::default();
        input.ctrl_right.active = true;
        input.alt_left.active = true;
        assert_eq!(
            input.modifiers(),
            Modifiers {
                ctrl: true,
                alt: true
            }
        );
    }
}
