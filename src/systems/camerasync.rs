//! Camera synchronisation.
//!
//! Turns a [`CameraState`] into the pieces raylib needs to draw a view: a
//! [`Camera2D`], the scissor rectangle of the viewport, and whether the scene
//! plane lies inside the near/far range at all.
//!
//! Mapping, with the world and the viewport both in y-up coordinates:
//! - clip rectangle spans viewport `left..right` and `bottom..top`
//! - camera offset is the centre of `(left, bottom, width, height)`
//! - camera target is `position.xy` shifted by the projection centre
//! - zoom is the viewport span over the projection span (horizontal)
//! - rotation is the angle of the up vector from +y, in degrees
//! - the `z = 0` scene plane is hit at `t = -position.z / forward.z` along the
//!   normalised forward vector and is drawn only when `near <= t <= far`
//!
//! [`sync_editor_camera`] copies the editor's state onto the toy's view every
//! frame. [`fit_views_to_screen`] stretches every view when the window is
//! resized.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Camera2D, Rectangle, Vector2};

use crate::components::viewcamera::{EditorCamera, ViewCamera};
use crate::resources::cameraeditor::CameraEditor;
use crate::resources::camerastate::CameraState;
use crate::resources::screensize::ScreenSize;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Render-ready form of a [`CameraState`].
#[derive(Debug, Clone, Copy)]
pub struct SyncedCamera {
    pub camera: Camera2D,
    /// Scissor rectangle in raylib (top-down) screen pixels.
    pub clip: Rectangle,
    /// `false` when the scene plane is outside `[near, far]` or edge-on.
    pub visible: bool,
}

impl SyncedCamera {
    /// Project a y-up world point to y-up screen pixels.
    ///
    /// Uses the same transform as raylib's `GetWorldToScreen2D`: translate by
    /// `-target`, scale by `zoom`, rotate, then translate by `offset`.
    pub fn world_to_screen(&self, point: Vector2, screen: ScreenSize) -> Vector2 {
        let cam = &self.camera;
        let dx = (point.x - cam.target.x) * cam.zoom;
        let dy = (-point.y - cam.target.y) * cam.zoom;
        let (sin, cos) = cam.rotation.to_radians().sin_cos();
        let x = cos * dx - sin * dy + cam.offset.x;
        let y = sin * dx + cos * dy + cam.offset.y;
        Vector2 {
            x,
            y: screen.flip_y(y),
        }
    }
}

/// Zoom factor for the given state, `1.0` when a span is not positive.
pub fn zoom_for(state: &CameraState) -> f32 {
    let viewport = state.viewport();
    let projection = state.projection();
    let screen_span = viewport.right - viewport.left;
    let world_span = projection.right - projection.left;
    if screen_span > 0.0 && world_span > 0.0 {
        screen_span / world_span
    } else {
        1.0
    }
}

/// Camera roll in degrees derived from the up vector's xy part.
pub fn rotation_for(state: &CameraState) -> f32 {
    let up = state.up();
    if up.x == 0.0 && up.y == 0.0 {
        0.0
    } else {
        up.x.atan2(up.y).to_degrees()
    }
}

/// Whether the `z = 0` plane falls inside the projection's depth range.
pub fn scene_plane_visible(state: &CameraState) -> bool {
    let forward = state.forward();
    let length = (forward.x * forward.x + forward.y * forward.y + forward.z * forward.z).sqrt();
    if length < PARALLEL_EPSILON {
        return false;
    }
    let fz = forward.z / length;
    if fz.abs() < PARALLEL_EPSILON {
        return false;
    }
    let t = -state.position().z / fz;
    let projection = state.projection();
    projection.near <= t && t <= projection.far
}

/// Build the raylib camera and clip rectangle for `state` on `screen`.
pub fn camera_from_state(state: &CameraState, screen: ScreenSize) -> SyncedCamera {
    let viewport = state.viewport();
    let projection = state.projection();
    let position = state.position();

    let offset = Vector2 {
        x: viewport.left + viewport.width / 2.0,
        y: screen.flip_y(viewport.bottom + viewport.height / 2.0),
    };
    let center_x = position.x + (projection.left + projection.right) / 2.0;
    let center_y = position.y + (projection.bottom + projection.top) / 2.0;

    let camera = Camera2D {
        offset,
        // raylib draws y-down; the world is y-up
        target: Vector2 {
            x: center_x,
            y: -center_y,
        },
        rotation: rotation_for(state),
        zoom: zoom_for(state),
    };

    let clip = Rectangle {
        x: viewport.left,
        y: screen.flip_y(viewport.top),
        width: (viewport.right - viewport.left).max(0.0),
        height: (viewport.top - viewport.bottom).max(0.0),
    };

    SyncedCamera {
        camera,
        clip,
        visible: clip.width > 0.0 && clip.height > 0.0 && scene_plane_visible(state),
    }
}

/// Copy the editor's camera state onto every [`EditorCamera`] view.
pub fn sync_editor_camera(
    editor: Option<Res<CameraEditor>>,
    mut query: Query<&mut ViewCamera, With<EditorCamera>>,
) {
    let Some(editor) = editor else {
        return;
    };
    if !editor.is_changed() {
        return;
    }
    for mut view in query.iter_mut() {
        view.state = *editor.state();
    }
}

/// Rescale the editor and every other view when [`ScreenSize`] changes.
///
/// The first run only records the size. A zero-sized (minimised) window is
/// ignored until it is restored.
pub fn fit_views_to_screen(
    screen: Res<ScreenSize>,
    editor: Option<ResMut<CameraEditor>>,
    mut views: Query<&mut ViewCamera, Without<EditorCamera>>,
    mut last: Local<Option<ScreenSize>>,
) {
    let current = *screen;
    if current.w <= 0 || current.h <= 0 {
        return;
    }
    let Some(previous) = last.replace(current) else {
        return;
    };
    if previous == current {
        return;
    }

    let sx = current.w as f32 / previous.w as f32;
    let sy = current.h as f32 / previous.h as f32;
    if let Some(mut editor) = editor {
        editor.rescale(sx, sy);
    }
    for mut view in views.iter_mut() {
        view.state.rescale(sx, sy);
    }
    info!(
        "Screen resized from {}x{} to {}x{}",
        previous.w, previous.h, current.w, current.h
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::camerastate::{Axis, ControlTarget, Viewport};
    use raylib::prelude::Vector3;

    const SCREEN: ScreenSize = ScreenSize { w: 1000, h: 800 };

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn default_state() -> CameraState {
        CameraState::for_screen(1000.0, 800.0)
    }

    #[test]
    fn test_default_state_maps_to_identity_view() {
        let synced = camera_from_state(&default_state(), SCREEN);
        assert!(synced.visible);
        assert_eq!(synced.camera.zoom, 1.0);
        assert_eq!(synced.camera.rotation, 0.0);
        assert_eq!(synced.camera.offset.x, 500.0);
        assert_eq!(synced.camera.offset.y, 400.0);
        assert_eq!(synced.clip.x, 0.0);
        assert_eq!(synced.clip.y, 0.0);
        assert_eq!(synced.clip.width, 1000.0);
        assert_eq!(synced.clip.height, 800.0);
    }

    #[test]
    fn test_half_width_viewport_halves_zoom() {
        let state = default_state().with_viewport(Viewport::from_rect(500.0, 0.0, 500.0, 800.0));
        let synced = camera_from_state(&state, SCREEN);
        assert!(approx_eq(synced.camera.zoom, 0.5));
        assert_eq!(synced.camera.offset.x, 750.0);
        assert_eq!(synced.clip.x, 500.0);
    }

    #[test]
    fn test_viewport_clip_is_flipped_to_top_down() {
        let state = default_state().with_viewport(Viewport::from_rect(0.0, 100.0, 1000.0, 200.0));
        let synced = camera_from_state(&state, SCREEN);
        assert_eq!(synced.clip.y, 500.0);
        assert_eq!(synced.clip.height, 200.0);
    }

    #[test]
    fn test_inverted_viewport_is_hidden() {
        let mut state = default_state();
        state.adjust(ControlTarget::Viewport, Axis::Right, -2000.0);
        let synced = camera_from_state(&state, SCREEN);
        assert_eq!(synced.clip.width, 0.0);
        assert!(!synced.visible);
    }

    #[test]
    fn test_up_vector_tilt_rotates() {
        let state = default_state().with_up(Vector3::new(1.0, 1.0, 0.0));
        assert!(approx_eq(rotation_for(&state), 45.0));
        let flat = default_state().with_up(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(rotation_for(&flat), 0.0);
    }

    #[test]
    fn test_position_beyond_far_hides_scene() {
        let state = default_state().with_position(Vector3::new(0.0, 0.0, 150.0));
        assert!(!scene_plane_visible(&state));
        let near = default_state().with_position(Vector3::new(0.0, 0.0, 50.0));
        assert!(scene_plane_visible(&near));
    }

    #[test]
    fn test_edge_on_forward_hides_scene() {
        let state = default_state().with_forward(Vector3::new(1.0, 0.0, 0.0));
        assert!(!scene_plane_visible(&state));
        let zero = default_state().with_forward(Vector3::new(0.0, 0.0, 0.0));
        assert!(!scene_plane_visible(&zero));
    }

    #[test]
    fn test_target_follows_position_with_y_flip() {
        let state = default_state().with_position(Vector3::new(100.0, 50.0, 0.0));
        let synced = camera_from_state(&state, SCREEN);
        assert_eq!(synced.camera.target.x, 100.0);
        assert_eq!(synced.camera.target.y, -50.0);
    }

    #[test]
    fn test_world_to_screen_centre_and_offset() {
        let state = default_state().with_position(Vector3::new(100.0, 50.0, 0.0));
        let synced = camera_from_state(&state, SCREEN);
        let centre = synced.world_to_screen(Vector2 { x: 100.0, y: 50.0 }, SCREEN);
        assert!(approx_eq(centre.x, 500.0));
        assert!(approx_eq(centre.y, 400.0));
        let above = synced.world_to_screen(Vector2 { x: 100.0, y: 60.0 }, SCREEN);
        assert!(approx_eq(above.y, 410.0));
    }

    #[test]
    fn test_sync_copies_editor_state() {
        let mut world = World::new();
        let mut editor = CameraEditor::for_screen(1000.0, 800.0);
        editor.select_next();
        world.insert_resource(editor);
        let view = world
            .spawn((ViewCamera::new(default_state().with_position(Vector3::new(9.0, 9.0, 9.0)), 0), EditorCamera))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(sync_editor_camera);
        schedule.run(&mut world);

        let state = world.get::<ViewCamera>(view).unwrap().state;
        assert_eq!(state, default_state());
    }

    fn resize_schedule() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.add_systems(fit_views_to_screen);
        schedule.add_systems(sync_editor_camera.after(fit_views_to_screen));
        schedule
    }

    #[test]
    fn test_resize_stretches_editor_view_at_same_zoom() {
        let mut world = World::new();
        world.insert_resource(SCREEN);
        world.insert_resource(CameraEditor::for_screen(1000.0, 800.0));
        let view = world.spawn((ViewCamera::new(default_state(), 0), EditorCamera)).id();

        let mut schedule = resize_schedule();
        schedule.run(&mut world);
        assert_eq!(world.resource::<CameraEditor>().state().viewport().width, 1000.0);

        *world.resource_mut::<ScreenSize>() = ScreenSize { w: 1250, h: 800 };
        schedule.run(&mut world);

        let state = world.get::<ViewCamera>(view).unwrap().state;
        assert_eq!(state, *world.resource::<CameraEditor>().state());
        assert_eq!(state.viewport().right, 1250.0);
        assert_eq!(state.viewport().top, 800.0);
        assert_eq!(state.projection().right, 625.0);
        let synced = camera_from_state(&state, ScreenSize { w: 1250, h: 800 });
        assert_eq!(synced.camera.zoom, 1.0);
        assert_eq!(synced.clip.width, 1250.0);
    }

    #[test]
    fn test_resize_keeps_split_views_side_by_side() {
        let mut world = World::new();
        world.insert_resource(SCREEN);
        let half = CameraState::for_screen(500.0, 800.0);
        let left = world
            .spawn(ViewCamera::new(half.with_viewport(Viewport::from_rect(0.0, 0.0, 500.0, 800.0)), 0))
            .id();
        let right = world
            .spawn(ViewCamera::new(half.with_viewport(Viewport::from_rect(500.0, 0.0, 500.0, 800.0)), 1))
            .id();

        let mut schedule = resize_schedule();
        schedule.run(&mut world);
        *world.resource_mut::<ScreenSize>() = ScreenSize { w: 1600, h: 400 };
        schedule.run(&mut world);

        let left = world.get::<ViewCamera>(left).unwrap().state.viewport();
        let right = world.get::<ViewCamera>(right).unwrap().state.viewport();
        assert_eq!((left.left, left.right), (0.0, 800.0));
        assert_eq!((right.left, right.right), (800.0, 1600.0));
        assert_eq!(right.height, 400.0);
    }

    #[test]
    fn test_minimised_window_is_ignored() {
        let mut world = World::new();
        world.insert_resource(SCREEN);
        let view = world.spawn(ViewCamera::new(default_state(), 0)).id();

        let mut schedule = resize_schedule();
        schedule.run(&mut world);
        *world.resource_mut::<ScreenSize>() = ScreenSize { w: 0, h: 0 };
        schedule.run(&mut world);
        assert_eq!(world.get::<ViewCamera>(view).unwrap().state, default_state());

        *world.resource_mut::<ScreenSize>() = ScreenSize { w: 2000, h: 800 };
        schedule.run(&mut world);
        assert_eq!(world.get::<ViewCamera>(view).unwrap().state.viewport().width, 2000.0);
    }
}
