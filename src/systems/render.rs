//! Rendering.
//!
//! Drawing happens in two steps. [`snapshot_frame`] reads everything a frame
//! needs out of the ECS world (camera views, ships, stars, HUD lines) into a
//! [`FrameSnapshot`]. [`render_system`] then takes the raylib handle out of
//! the world, draws the snapshot, and puts the handle back. Each view is
//! drawn inside a scissor rectangle matching its viewport.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::inputcontrolled::Ship;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::viewcamera::ViewCamera;
use crate::resources::cameraeditor::CameraEditor;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::starfield::{Star, Starfield};
use crate::systems::camerasync::{SyncedCamera, camera_from_state};

const BACKGROUND: Color = Color {
    r: 29,
    g: 41,
    b: 81,
    a: 255,
};
const HUD_FONT_SIZE: i32 = 20;
const HUD_LINE_HEIGHT: i32 = 24;

/// Everything drawn in one frame.
pub struct FrameSnapshot {
    pub screen: ScreenSize,
    pub views: Vec<SyncedCamera>,
    /// Position, size and heading in radians.
    pub ships: Vec<(Vector2, f32, f32)>,
    pub stars: Vec<Star>,
    pub hud: Vec<String>,
    pub debug: bool,
}

/// Collect the views (sorted by draw order), ships, stars and HUD text.
pub fn snapshot_frame(world: &mut World) -> FrameSnapshot {
    let screen = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize { w: 0, h: 0 });

    let mut ordered: Vec<ViewCamera> = {
        let mut q = world.query::<&ViewCamera>();
        q.iter(world).copied().collect()
    };
    ordered.sort_by_key(|view| view.order);
    let views: Vec<SyncedCamera> = ordered
        .iter()
        .map(|view| camera_from_state(&view.state, screen))
        .collect();

    let ships = {
        let mut q = world.query::<(&MapPosition, &Ship, Option<&Rotation>)>();
        q.iter(world)
            .map(|(p, s, r)| (p.pos, s.size, r.map_or(0.0, |r| r.angle)))
            .collect()
    };
    let ship_lines: Vec<String> = {
        let mut q = world
            .query_filtered::<(&MapPosition, Option<&Rotation>, Option<&RigidBody>), With<Ship>>();
        q.iter(world)
            .map(|(p, r, b)| {
                format!(
                    "Ship: pos ({:.1}, {:.1}) heading {:.1} speed {:.1}",
                    p.pos.x,
                    p.pos.y,
                    r.map_or(0.0, |r| r.degrees()),
                    b.map_or(0.0, |b| b.speed())
                )
            })
            .collect()
    };

    let stars = world
        .get_resource::<Starfield>()
        .map(|field| field.stars.clone())
        .unwrap_or_default();

    let debug = world.contains_resource::<DebugMode>();

    let mut hud = Vec::new();
    if let Some(editor) = world.get_resource::<CameraEditor>() {
        hud.push(format!("Controlling: {}  (, / . to switch)", editor.active_target()));
        hud.push(editor.report());
    }
    if debug {
        for (i, view) in ordered.iter().enumerate() {
            let p = view.state.position();
            hud.push(format!(
                "View {}: pos ({:.1}, {:.1}, {:.1}) zoom {:.2} rot {:.1}",
                i, p.x, p.y, p.z, views[i].camera.zoom, views[i].camera.rotation
            ));
        }
        hud.extend(ship_lines);
    }

    FrameSnapshot {
        screen,
        views,
        ships,
        stars,
        hud,
        debug,
    }
}

/// World point (y-up) to raylib's y-down world space.
fn to_raylib(p: Vector2) -> Vector2 {
    Vector2 { x: p.x, y: -p.y }
}

fn draw_scene<D: RaylibDraw>(d: &mut D, frame: &FrameSnapshot) {
    for star in &frame.stars {
        d.draw_circle_v(to_raylib(star.pos), star.size, star.color);
    }
    for (pos, size, angle) in &frame.ships {
        let [tip, left, right] = ship_vertices(*pos, *size, *angle);
        // counter-clockwise in raylib's y-down space
        d.draw_triangle(to_raylib(tip), to_raylib(left), to_raylib(right), Color::ORANGE);
    }
}

/// Tip, left and right corners of a ship pointing along `angle` (0 is up).
fn ship_vertices(pos: Vector2, size: f32, angle: f32) -> [Vector2; 3] {
    let half = size / 2.0;
    let (sin, cos) = angle.sin_cos();
    let turn = |dx: f32, dy: f32| Vector2 {
        x: pos.x + dx * cos - dy * sin,
        y: pos.y + dx * sin + dy * cos,
    };
    [
        turn(0.0, half),
        turn(-half * 0.7, -half),
        turn(half * 0.7, -half),
    ]
}

fn draw_frame(d: &mut RaylibDrawHandle, frame: &FrameSnapshot) {
    d.clear_background(Color::BLACK);

    for view in &frame.views {
        let clip = view.clip;
        let mut s = d.begin_scissor_mode(
            clip.x as i32,
            clip.y as i32,
            clip.width as i32,
            clip.height as i32,
        );
        s.clear_background(BACKGROUND);
        if view.visible {
            let mut d2 = s.begin_mode2D(view.camera);
            draw_scene(&mut d2, frame);
        }
    }

    if frame.debug {
        for view in &frame.views {
            let clip = view.clip;
            d.draw_rectangle_lines(
                clip.x as i32,
                clip.y as i32,
                clip.width as i32,
                clip.height as i32,
                Color::LIME,
            );
        }
        let fps = d.get_fps();
        d.draw_text(
            &format!("FPS: {}", fps),
            10,
            frame.screen.h - HUD_LINE_HEIGHT,
            HUD_FONT_SIZE,
            Color::LIME,
        );
    }

    for (i, line) in frame.hud.iter().enumerate() {
        d.draw_text(
            line,
            10,
            10 + i as i32 * HUD_LINE_HEIGHT,
            HUD_FONT_SIZE,
            Color::RAYWHITE,
        );
    }
}

/// Draw every camera view and the HUD.
pub fn render_system(world: &mut World) {
    let frame = snapshot_frame(world);
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    if let Some(thread) = world.get_non_send_resource::<RaylibThread>() {
        let mut d = rl.begin_drawing(thread);
        draw_frame(&mut d, &frame);
    }
    world.insert_non_send_resource(rl);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::viewcamera::EditorCamera;
    use crate::resources::camerastate::{CameraState, Viewport};

    fn world_with_screen() -> World {
        let mut world = World::new();
        world.insert_resource(ScreenSize { w: 1400, h: 1000 });
        world
    }

    #[test]
    fn test_snapshot_orders_views() {
        let mut world = world_with_screen();
        let right = CameraState::for_screen(700.0, 1000.0)
            .with_viewport(Viewport::from_rect(700.0, 0.0, 700.0, 1000.0));
        let left = CameraState::for_screen(700.0, 1000.0)
            .with_viewport(Viewport::from_rect(0.0, 0.0, 700.0, 1000.0));
        world.spawn(ViewCamera::new(right, 1));
        world.spawn(ViewCamera::new(left, 0));

        let frame = snapshot_frame(&mut world);
        assert_eq!(frame.views.len(), 2);
        assert_eq!(frame.views[0].clip.x, 0.0);
        assert_eq!(frame.views[1].clip.x, 700.0);
        assert!(frame.hud.is_empty());
        assert!(!frame.debug);
    }

    #[test]
    fn test_snapshot_hud_reports_editor() {
        let mut world = world_with_screen();
        world.insert_resource(CameraEditor::for_screen(1400.0, 1000.0));
        world.spawn((
            ViewCamera::new(CameraState::for_screen(1400.0, 1000.0), 0),
            EditorCamera,
        ));
        let frame = snapshot_frame(&mut world);
        assert_eq!(frame.hud.len(), 2);
        assert!(frame.hud[0].contains("VIEWPORT SIZE"));
    }

    #[test]
    fn test_snapshot_debug_adds_view_lines() {
        let mut world = world_with_screen();
        world.insert_resource(DebugMode {});
        world.spawn(ViewCamera::new(CameraState::for_screen(1400.0, 1000.0), 0));
        world.spawn((MapPosition::new(5.0, 6.0), Ship::default()));
        let frame = snapshot_frame(&mut world);
        assert!(frame.debug);
        assert_eq!(frame.hud.len(), 2);
        assert!(frame.hud[1].starts_with("Ship: pos (5.0, 6.0)"));
        assert_eq!(frame.ships.len(), 1);
        assert_eq!(frame.ships[0].0.x, 5.0);
        assert_eq!(frame.ships[0].2, 0.0);
    }

    #[test]
    fn test_snapshot_carries_ship_heading() {
        let mut world = world_with_screen();
        world.spawn((
            MapPosition::new(0.0, 0.0),
            Ship::default(),
            Rotation {
                angle: 1.5,
                angular_velocity: 0.0,
            },
        ));
        let frame = snapshot_frame(&mut world);
        assert_eq!(frame.ships[0].2, 1.5);
    }

    #[test]
    fn test_ship_vertices_turn_counter_clockwise() {
        let pos = Vector2 { x: 10.0, y: 20.0 };
        let [tip, _, _] = ship_vertices(pos, 20.0, 0.0);
        assert_eq!((tip.x, tip.y), (10.0, 30.0));

        // a quarter turn left points the tip at -x
        let [tip, left, right] = ship_vertices(pos, 20.0, std::f32::consts::FRAC_PI_2);
        assert!((tip.x - 0.0).abs() < 1e-4);
        assert!((tip.y - 20.0).abs() < 1e-4);
        assert!(left.y < pos.y);
        assert!(right.y > pos.y);
    }
}
