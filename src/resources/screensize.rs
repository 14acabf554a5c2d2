//! Screen size resource.
//!
//! Stores the current window dimensions in pixels. Camera parameters use
//! bottom-up pixel coordinates while raylib draws top-down, so conversions go
//! through [`ScreenSize::flip_y`].

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Convert a bottom-up y coordinate to raylib's top-down one (and back).
    pub fn flip_y(&self, y: f32) -> f32 {
        self.h as f32 - y
    }
}
