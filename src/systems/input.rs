//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`emit_input_events`] turns that state into triggered events:
//!   [`CameraKeyEvent`] per numpad press, [`CycleTargetEvent`] for comma and
//!   period, and [`SwitchDebugEvent`] for F11. It does not touch raylib, so it
//!   can run in worlds without a window.
use bevy_ecs::prelude::*;

use crate::events::editor::{CameraKeyEvent, CycleDirection, CycleTargetEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};
use crate::resources::keybindings::NumpadKey;

fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
}

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let input = &mut *input;

    // WASD keys
    poll(&mut input.thrust_up, &rl);
    poll(&mut input.thrust_left, &rl);
    poll(&mut input.thrust_down, &rl);
    poll(&mut input.thrust_right, &rl);
    poll(&mut input.rotate_left, &rl);
    poll(&mut input.rotate_right, &rl);
    // Editor keys
    poll(&mut input.select_next, &rl);
    poll(&mut input.select_previous, &rl);
    poll(&mut input.ctrl_left, &rl);
    poll(&mut input.ctrl_right, &rl);
    poll(&mut input.alt_left, &rl);
    poll(&mut input.alt_right, &rl);
    poll(&mut input.mode_debug, &rl);

    input.numpad_pressed.clear();
    for key in NumpadKey::ALL {
        if rl.is_key_pressed(key.keyboard_key()) {
            input.numpad_pressed.push(key);
        }
    }
}

/// Trigger editor and debug events for keys pressed this frame.
pub fn emit_input_events(input: Res<InputState>, mut commands: Commands) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.select_next.just_pressed {
        commands.trigger(CycleTargetEvent {
            direction: CycleDirection::Next,
        });
    }
    if input.select_previous.just_pressed {
        commands.trigger(CycleTargetEvent {
            direction: CycleDirection::Previous,
        });
    }

    let modifiers = input.modifiers();
    for &key in &input.numpad_pressed {
        commands.trigger(CameraKeyEvent { key, modifiers });
    }
}
