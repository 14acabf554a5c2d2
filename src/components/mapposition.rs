//! World-space position component.
//!
//! The world is y-up: increasing `pos.y` moves an entity towards the top of
//! the screen. Render code flips the axis when handing points to raylib.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
