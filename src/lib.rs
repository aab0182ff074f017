// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances — casts and float comparisons are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

//! Orbit camera controls for 3D viewers.
//!
//! Orbita steers a host-owned camera around a fixed pivot from pointer
//! and wheel input: orbit (rotate), dolly (zoom), and pan, with
//! optional inertial damping. The host forwards input events, calls
//! [`OrbitState::advance`] once per frame, and reads the camera pose
//! back; nothing here touches a window or a GPU.
//!
//! # Key entry points
//!
//! - [`camera::OrbitState`] - accumulated intent and the per-frame update
//! - [`camera::Camera`] - the host-owned camera pose
//! - [`input::InputTranslator`] - pointer/touch events to pending deltas
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use orbita::{Camera, InputTranslator, OrbitState, PointerButton, PointerEvent};
//! use orbita::options::CameraOptions;
//!
//! let mut camera = Camera::new(
//!     Vec3::new(0.0, 0.0, 10.0),
//!     Vec3::ZERO,
//!     16.0 / 9.0,
//!     &CameraOptions::default(),
//! );
//! let mut orbit = OrbitState::new(&camera);
//! let mut translator = InputTranslator::new();
//!
//! // Event dispatch:
//! let _ = translator.handle_event(
//!     &mut orbit,
//!     &mut camera,
//!     PointerEvent::ButtonPressed { button: PointerButton::Left, x: 10.0, y: 10.0 },
//! );
//!
//! // Render loop, once per frame:
//! let changed = orbit.advance(&mut camera);
//! # let _ = changed;
//! ```

pub mod camera;
pub mod error;
pub mod events;
pub mod input;
pub mod options;

pub use camera::{Camera, OrbitState, Spherical};
pub use error::OrbitaError;
pub use events::{ControlEvent, ObserverId};
pub use input::{InputTranslator, InteractionState, PointerButton, PointerEvent};
