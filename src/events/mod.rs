//! Event types and observers used by the toy.
//!
//! Submodules:
//! - [`editor`] – numpad key and target-cycle events for the camera editor
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod editor;
pub mod switchdebug;
