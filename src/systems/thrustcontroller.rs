//! Keyboard thrust and spin controllers.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional velocities to entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Diagonal movement is normalized to maintain constant speed.
//! The arrow keys accumulate spin on the entity's [`Rotation`], which decays
//! on frames with no arrow held.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::{Rotation, SPIN_DAMPING};
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn thrust_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rigidbody) in query.iter_mut() {
        let mut velocity = Vector2 { x: 0.0, y: 0.0 };
        if input_state.thrust_up.active {
            velocity += controlled.up_velocity;
        }
        if input_state.thrust_down.active {
            velocity += controlled.down_velocity;
        }
        if input_state.thrust_left.active {
            velocity += controlled.left_velocity;
        }
        if input_state.thrust_right.active {
            velocity += controlled.right_velocity;
        }

        // opposing keys cancel, so only a true diagonal is scaled
        if velocity.x != 0.0 && velocity.y != 0.0 {
            velocity.x *= std::f32::consts::FRAC_1_SQRT_2;
            velocity.y *= std::f32::consts::FRAC_1_SQRT_2;
        }
        rigidbody.velocity = velocity;
    }
}

/// Add or damp spin from the arrow keys, once per frame.
///
/// Left spins counter-clockwise. With neither arrow held (or both), the spin
/// speed is divided by [`SPIN_DAMPING`].
pub fn spin_controller(
    mut query: Query<(&InputControlled, &mut Rotation)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rotation) in query.iter_mut() {
        let mut applied = 0.0;
        if input_state.rotate_left.active {
            applied += controlled.spin_force;
        }
        if input_state.rotate_right.active {
            applied -= controlled.spin_force;
        }

        if applied == 0.0 {
            rotation.angular_velocity /= SPIN_DAMPING;
        }
        rotation.angular_velocity += applied;
    }
}
