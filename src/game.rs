//! Scene setup and the per-frame update schedule.
//!
//! Both demos share the same world layout: a star field, a player ship in the
//! middle of the world and the editor/debug observers. They differ in their
//! cameras:
//! - [`Demo::Toy`] has one full-window view driven by the [`CameraEditor`]
//! - [`Demo::Split`] has two half-width views, the left one following the ship
//!
//! Nothing here touches raylib, so the whole scene can be built and updated
//! in tests without a window.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector3;

use crate::components::inputcontrolled::{InputControlled, Ship};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::viewcamera::{EditorCamera, Follow, ViewCamera};
use crate::events::editor::{camera_key_observer, cycle_target_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::cameraeditor::CameraEditor;
use crate::resources::camerastate::{CameraState, ProjectionPlanes, Viewport};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::starfield::Starfield;
use crate::resources::toyconfig::ToyConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::camerasync::{fit_views_to_screen, sync_editor_camera};
use crate::systems::follow::follow_camera_system;
use crate::systems::input::emit_input_events;
use crate::systems::movement::{movement, spin};
use crate::systems::thrustcontroller::{spin_controller, thrust_controller};

/// Which demo to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Toy,
    Split,
}

/// Build the scene for `demo` into `world`.
///
/// Returns the player ship entity.
pub fn setup(world: &mut World, config: &ToyConfig, demo: Demo) -> Entity {
    let (w, h) = config.window_size();
    let (w, h) = (w as f32, h as f32);

    world.insert_resource(ScreenSize {
        w: w as i32,
        h: h as i32,
    });
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(Starfield::generate(config.stars, w, h, config.seed));
    world.insert_resource(config.clone());

    register_observers(world);
    let ship = spawn_ship(world, config);

    match demo {
        Demo::Toy => setup_toy(world, config),
        Demo::Split => setup_split(world, config, ship),
    }
    info!("{:?} scene ready ({}x{})", demo, w, h);
    ship
}

/// Register the editor and debug observers.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(camera_key_observer));
    world.spawn(Observer::new(cycle_target_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers events.
    world.flush();
}

/// Spawn the player ship at the centre of the world.
pub fn spawn_ship(world: &mut World, config: &ToyConfig) -> Entity {
    let (w, h) = config.window_size();
    world
        .spawn((
            MapPosition::new(w as f32 / 2.0, h as f32 / 2.0),
            RigidBody::new(),
            Rotation::default(),
            InputControlled::uniform(config.thrust).with_spin_force(config.spin),
            Ship::default(),
        ))
        .id()
}

/// One full-window view, mirrored from the camera editor.
fn setup_toy(world: &mut World, config: &ToyConfig) {
    let (w, h) = config.window_size();
    let (w, h) = (w as f32, h as f32);
    let state =
        CameraState::for_screen(w, h).with_position(Vector3::new(w / 2.0, h / 2.0, 0.0));

    world.insert_resource(CameraEditor::new(state, config.steps()));
    world.spawn((ViewCamera::new(state, 0), EditorCamera));
    info!("You are now controlling: {}", world.resource::<CameraEditor>().active_target());
}

/// Two half-width views: the left follows the ship, the right stays on the
/// world centre.
fn setup_split(world: &mut World, config: &ToyConfig, ship: Entity) {
    let (w, h) = config.window_size();
    let (w, h) = (w as f32, h as f32);
    let half = w / 2.0;
    let centre = Vector3::new(w / 2.0, h / 2.0, 0.0);

    let left = CameraState::for_screen(w, h)
        .with_viewport(Viewport::from_rect(0.0, 0.0, half, h))
        .with_projection(ProjectionPlanes::centered(half, h))
        .with_position(centre);
    let right = left.with_viewport(Viewport::from_rect(half, 0.0, half, h));

    world.spawn((ViewCamera::new(left, 0), Follow { target: ship }));
    world.spawn(ViewCamera::new(right, 1));
}

/// Systems run once per frame after input has been polled.
///
/// Raylib polling and drawing stay outside so that the schedule runs headless.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(emit_input_events);
    update.add_systems(thrust_controller);
    update.add_systems(movement.after(thrust_controller));
    update.add_systems(spin_controller);
    update.add_systems(spin.after(spin_controller));
    update.add_systems(follow_camera_system.after(movement));
    // Must see this frame's key events, which the observers apply on command flush.
    update.add_systems(fit_views_to_screen.after(emit_input_events));
    update.add_systems(sync_editor_camera.after(fit_views_to_screen));
    update
}
