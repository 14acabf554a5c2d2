//! Toy systems.
//!
//! Submodules overview
//! - [`camerasync`] – map camera parameters onto raylib cameras and viewports,
//!   and rescale views when the window is resized
//! - [`follow`] – keep following cameras centred on their target
//! - [`input`] – read hardware input and emit editor/debug events
//! - [`movement`] – integrate positions and headings over time
//! - [`render`] – draw every camera view and the HUD using raylib
//! - [`thrustcontroller`] – translate thrust and arrow keys into ship motion
//! - [`time`] – update simulation time and delta

pub mod camerasync;
pub mod follow;
pub mod input;
pub mod movement;
pub mod render;
pub mod thrustcontroller;
pub mod time;
