//! Camera view components.
//!
//! Every camera that renders is an entity with a [`ViewCamera`]. The camera
//! toy has one, marked [`EditorCamera`], whose state is copied from the
//! [`CameraEditor`](crate::resources::cameraeditor::CameraEditor) each frame.
//! The split-screen demo has two, one of which carries [`Follow`].

use bevy_ecs::prelude::{Component, Entity};

use crate::resources::camerastate::CameraState;

/// A camera rendering into its own viewport.
#[derive(Component, Clone, Copy, Debug)]
pub struct ViewCamera {
    pub state: CameraState,
    /// Draw order; lower values are drawn first.
    pub order: i32,
}

impl ViewCamera {
    pub fn new(state: CameraState, order: i32) -> Self {
        Self { state, order }
    }
}

/// Marker: this view mirrors the camera editor's state.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct EditorCamera;

/// Keeps the camera centred on `target`'s [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct Follow {
    pub target: Entity,
}
