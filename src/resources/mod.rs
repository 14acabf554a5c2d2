//! ECS resources made available to systems.
//!
//! Overview
//! - `cameraeditor` – the camera parameter editor and its active target
//! - `camerastate` – editable camera parameters and control targets
//! - `debugmode` – presence toggles the debug overlay
//! - `input` – per-frame keyboard state of keys relevant to the toy
//! - `keybindings` – static numpad binding table and modifier rules
//! - `screensize` – current window dimensions in pixels
//! - `starfield` – procedurally generated background stars
//! - `toyconfig` – settings loaded from the INI file
//! - `worldtime` – simulation time and delta
pub mod cameraeditor;
pub mod camerastate;
pub mod debugmode;
pub mod input;
pub mod keybindings;
pub mod screensize;
pub mod starfield;
pub mod toyconfig;
pub mod worldtime;
