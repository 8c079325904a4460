// -- Lint policy ---------------------------------------------------------
// Clippy groups live here; rustc lint levels are set in Cargo.toml.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! Interactive 3D scene viewer built on wgpu.
//!
//! Astroview draws a small fixed scene: a textured sky sphere, a spinning
//! earth and sun, and an articulated figure built from spheres and
//! cylinders whose limbs swing on a looping frame counter. A first-person
//! camera pans, rotates, zooms and switches between perspective and
//! orthographic projection.
//!
//! # Key entry points
//!
//! - [`mesh`] - procedural sphere, cylinder, cone, cube, tetrahedron,
//!   octahedron, quad and grid generators
//! - [`camera::CameraController`] - camera pose and projection
//! - [`scene::compose`] - lays out the scene on a [`scene::TransformStack`]
//! - [`engine::SceneEngine`] - GPU context, renderer and view state
//! - [`options::Options`] - runtime configuration (display, camera,
//!   lighting, animation, textures, key bindings)
//!
//! # Frame flow
//!
//! Window events become [`InputEvent`]s, which the [`InputProcessor`]
//! turns into [`ViewerCommand`]s applied to the view state. Each frame the
//! engine ticks the [`animation::AnimationClock`], composes the scene into
//! a draw list, groups it into a [`renderer::FramePlan`] and draws that in
//! one depth-tested pass.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::command::ViewerCommand;
pub use engine::view_state::{ViewFlow, ViewState};
pub use engine::SceneEngine;
pub use error::ViewerError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
