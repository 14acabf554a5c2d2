//! Heading and spin of an entity.
//!
//! The arrow keys feed `angular_velocity` through
//! [`crate::systems::thrustcontroller::spin_controller`], and
//! [`crate::systems::movement::spin`] integrates it into `angle`.

use bevy_ecs::prelude::Component;

/// Spin speed added per frame while an arrow key is held, in radians/second.
pub const DEFAULT_SPIN_FORCE: f32 = 0.05;
/// Divisor applied to the spin speed on frames with no arrow key held.
pub const SPIN_DAMPING: f32 = 1.05;

/// Counter-clockwise heading in the y-up world, in radians.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub angle: f32,
    /// Radians per second.
    pub angular_velocity: f32,
}

impl Rotation {
    pub fn degrees(&self) -> f32 {
        self.angle.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        let rotation = Rotation {
            angle: std::f32::consts::PI,
            angular_velocity: 0.0,
        };
        assert!((rotation.degrees() - 180.0).abs() < 1e-4);
        assert_eq!(Rotation::default().degrees(), 0.0);
    }
}
