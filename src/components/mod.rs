//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – keyboard thrust intent and the player ship marker
//! - [`mapposition`] – world-space position (y-up) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – heading and spin speed
//! - [`viewcamera`] – per-viewport cameras, editor and follow markers

pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod rotation;
pub mod viewcamera;
