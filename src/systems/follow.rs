//! Camera follow system.
//!
//! Centres every [`ViewCamera`] that has a [`Follow`] component on its
//! target's [`MapPosition`]. Targets that no longer exist leave the camera
//! where it is.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::viewcamera::{Follow, ViewCamera};

pub fn follow_camera_system(
    mut cameras: Query<(&mut ViewCamera, &Follow)>,
    targets: Query<&MapPosition>,
) {
    for (mut view, follow) in cameras.iter_mut() {
        if let Ok(target) = targets.get(follow.target) {
            view.state.set_position_xy(target.pos.x, target.pos.y);
        }
    }
}
