//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity an entity moves with. It is
//! written by the thrust controller and read by the movement system to
//! update [`MapPosition`](super::mapposition::MapPosition). There is no
//! collision or mass; movement is plain velocity integration.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        (self.velocity.x * self.velocity.x + self.velocity.y * self.velocity.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
        assert_eq!(rb.speed(), 0.0);
    }

    #[test]
    fn test_speed_is_magnitude() {
        let rb = RigidBody {
            velocity: Vector2 { x: 300.0, y: 400.0 },
        };
        assert_eq!(rb.speed(), 500.0);
    }
}
