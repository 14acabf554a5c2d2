//! Velocity integration.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::resources::worldtime::WorldTime;

/// Advance every body by `velocity * delta`.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos.x += rigidbody.velocity.x * time.delta;
        position.pos.y += rigidbody.velocity.y * time.delta;
    }
}

/// Advance every heading by `angular_velocity * delta`.
pub fn spin(mut query: Query<&mut Rotation>, time: Res<WorldTime>) {
    for mut rotation in query.iter_mut() {
        rotation.angle += rotation.angular_velocity * time.delta;
    }
}
