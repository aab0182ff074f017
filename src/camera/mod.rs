//! Camera state and orbit math.
//!
//! Provides the host-owned [`Camera`], the spherical-coordinate
//! representation of its offset from the orbit target, and the
//! [`OrbitState`] that resolves accumulated input into a pose each
//! frame.

/// Orbit state updater: pending deltas, damping, limit enforcement.
pub mod controller;
/// Core camera struct and matrix builders.
pub mod core;
/// Spherical coordinates in the up-aligned basis.
pub mod spherical;

pub use controller::OrbitState;
pub use core::Camera;
pub use spherical::Spherical;
