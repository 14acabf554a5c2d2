//! Camera toy entry point.
//!
//! A small 2D playground written in Rust using:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Demos
//!
//! - `toy` (default): edit the camera's viewport, position, up, forward and
//!   projection live with the numpad. Comma and period cycle the parameter
//!   group; Ctrl reverses a key and Alt doubles its step.
//! - `split`: two side-by-side views, the left one following the ship.
//! - `measure`: no window; projects evenly spaced points and reports the
//!   spacing of the results.
//!
//! W/A/S/D fly the ship and the left/right arrows turn it. F11 toggles the
//! debug overlay in both windowed demos. Resizing the window stretches every
//! view at the same zoom.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- split
//! cargo run --release -- measure --zoom 2 --output report.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod projection;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::{Args, Parser, Subcommand};

use crate::game::Demo;
use crate::projection::{DEFAULT_MEASURE_SCREEN, MeasureParams};
use crate::resources::screensize::ScreenSize;
use crate::resources::toyconfig::{DEFAULT_CONFIG_PATH, ToyConfig};
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Camera toy
#[derive(Parser)]
#[command(version, about = "Interactive 2D camera parameter playground")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Camera parameter editor (default).
    Toy,
    /// Two cameras side by side, one following the ship.
    Split,
    /// Measure projected point spacing and exit.
    Measure(MeasureArgs),
}

#[derive(Args)]
struct MeasureArgs {
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    end: f64,
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    /// Write the JSON report here instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let demo = match cli.command {
        // Early-exit: no window needed
        Some(Command::Measure(args)) => {
            if let Err(e) = measure(&args) {
                log::error!("{}", e);
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            return;
        }
        Some(Command::Split) => Demo::Split,
        Some(Command::Toy) | None => Demo::Toy,
    };

    run_window(cli.config, demo);
}

fn measure(args: &MeasureArgs) -> Result<(), String> {
    let params = MeasureParams {
        zoom: args.zoom,
        start: args.start,
        end: args.end,
        step: args.step,
    };
    let report = projection::run_measurement(params, DEFAULT_MEASURE_SCREEN)?;
    match &args.output {
        Some(path) => {
            projection::write_report(path, &report)?;
            println!("Report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_window(config_path: PathBuf, demo: Demo) {
    log::info!("Hello, world! This is the camera toy!");
    // --------------- Config ---------------
    let mut config = ToyConfig::with_path(config_path);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    let (window_width, window_height) = config.window_size();

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Camera Toy")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup(&mut world, &config, demo);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut input = Schedule::default();
    input.add_systems(update_input_state);
    let mut update = game::update_schedule();

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        input.run(&mut world);
        update.run(&mut world);
        render_system(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update screen size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut screen = world.resource_mut::<ScreenSize>();
        if screen.w != new_w || screen.h != new_h {
            *screen = ScreenSize { w: new_w, h: new_h };
        }
    }
}
