//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the debug overlay: viewport
//! outlines, FPS, and the parameters of every camera.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
