//! Toy configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1000
//! height = 1000
//! target_fps = 60
//!
//! [editor]
//! discrete_step = 5.0
//! vector_step = 0.05
//!
//! [ship]
//! thrust = 200.0
//! spin = 0.05
//!
//! [scene]
//! stars = 300
//! seed = 42
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::rotation::DEFAULT_SPIN_FORCE;
use crate::resources::keybindings::{DEFAULT_DISCRETE_STEP, DEFAULT_VECTOR_STEP, StepSizes};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1000;
const DEFAULT_WINDOW_HEIGHT: u32 = 1000;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_THRUST: f32 = 200.0;
const DEFAULT_STARS: u32 = 300;
pub const DEFAULT_CONFIG_PATH: &str = "./cameratoy.ini";

/// Toy configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct ToyConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Editor step for viewport, position and projection keys.
    pub discrete_step: f32,
    /// Editor step for up and forward vector keys.
    pub vector_step: f32,
    /// Ship speed in world units per second while a thrust key is held.
    pub thrust: f32,
    /// Ship spin speed added per frame while an arrow key is held.
    pub spin: f32,
    /// Number of background stars.
    pub stars: u32,
    /// Star field seed; `None` picks one at random.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ToyConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            discrete_step: DEFAULT_DISCRETE_STEP,
            vector_step: DEFAULT_VECTOR_STEP,
            thrust: DEFAULT_THRUST,
            spin: DEFAULT_SPIN_FORCE,
            stars: DEFAULT_STARS,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [editor] section
        if let Some(step) = config.getfloat("editor", "discrete_step").ok().flatten() {
            self.discrete_step = step as f32;
        }
        if let Some(step) = config.getfloat("editor", "vector_step").ok().flatten() {
            self.vector_step = step as f32;
        }

        // [ship] section
        if let Some(thrust) = config.getfloat("ship", "thrust").ok().flatten() {
            self.thrust = thrust as f32;
        }
        if let Some(spin) = config.getfloat("ship", "spin").ok().flatten() {
            self.spin = spin as f32;
        }

        // [scene] section
        if let Some(stars) = config.getuint("scene", "stars").ok().flatten() {
            self.stars = stars as u32;
        }
        if let Some(seed) = config.getuint("scene", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, steps={}/{}, thrust={}, stars={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.discrete_step,
            self.vector_step,
            self.thrust,
            self.stars
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("editor", "discrete_step", Some(self.discrete_step.to_string()));
        config.set("editor", "vector_step", Some(self.vector_step.to_string()));

        config.set("ship", "thrust", Some(self.thrust.to_string()));
        config.set("ship", "spin", Some(self.spin.to_string()));

        config.set("scene", "stars", Some(self.stars.to_string()));
        if let Some(seed) = self.seed {
            config.set("scene", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Editor step sizes.
    pub fn steps(&self) -> StepSizes {
        StepSizes {
            discrete: self.discrete_step,
            vector: self.vector_step,
        }
    }
}
