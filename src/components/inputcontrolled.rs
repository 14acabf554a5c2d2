//! Input-controlled movement components.
//!
//! - [`InputControlled`] – keyboard-driven directional thrust and spin
//! - [`Ship`] – the player ship drawn in every camera view
//!
//! [`crate::systems::thrustcontroller`] reads these components to update
//! entity velocities.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::rotation::DEFAULT_SPIN_FORCE;

/// Movement intent derived from player keyboard input.
///
/// Each field stores the velocity to apply when the corresponding thrust key
/// is held. Velocities are in the y-up world frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Velocity when thrusting up.
    pub up_velocity: Vector2,
    /// Velocity when thrusting down.
    pub down_velocity: Vector2,
    /// Velocity when thrusting left.
    pub left_velocity: Vector2,
    /// Velocity when thrusting right.
    pub right_velocity: Vector2,
    /// Spin speed added per frame while an arrow key is held.
    pub spin_force: f32,
}

impl InputControlled {
    pub fn new(up: Vector2, down: Vector2, left: Vector2, right: Vector2) -> Self {
        Self {
            up_velocity: up,
            down_velocity: down,
            left_velocity: left,
            right_velocity: right,
            spin_force: DEFAULT_SPIN_FORCE,
        }
    }

    pub fn with_spin_force(mut self, spin_force: f32) -> Self {
        self.spin_force = spin_force;
        self
    }

    /// Same `thrust` speed in all four directions.
    pub fn uniform(thrust: f32) -> Self {
        Self::new(
            Vector2 { x: 0.0, y: thrust },
            Vector2 { x: 0.0, y: -thrust },
            Vector2 { x: -thrust, y: 0.0 },
            Vector2 { x: thrust, y: 0.0 },
        )
    }
}

/// Player ship, drawn as a triangle pointing up.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ship {
    /// Triangle height in world units.
    pub size: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self { size: 40.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_directions() {
        let ic = InputControlled::uniform(200.0);
        assert_eq!(ic.up_velocity.y, 200.0);
        assert_eq!(ic.down_velocity.y, -200.0);
        assert_eq!(ic.left_velocity.x, -200.0);
        assert_eq!(ic.right_velocity.x, 200.0);
        assert_eq!(ic.up_velocity.x, 0.0);
        assert_eq!(ic.spin_force, DEFAULT_SPIN_FORCE);
        assert_eq!(ic.with_spin_force(0.2).spin_force, 0.2);
    }
}
