//! Platform-agnostic input handling.
//!
//! The host forwards raw pointer/wheel events (and aggregated touch
//! points) to an [`InputTranslator`], which owns the interaction state
//! machine and turns them into pending deltas on an
//! [`OrbitState`](crate::camera::OrbitState).

/// Platform-agnostic pointer events and winit conversions.
pub mod event;
/// Interaction state machine and event-to-delta translation.
pub mod translator;

pub use event::{PointerButton, PointerEvent};
pub use translator::{InputTranslator, InteractionState};
