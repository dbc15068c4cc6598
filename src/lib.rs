#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Sum-of-squared-errors loss surfaces for a two-parameter line, with
//! synthetic "coffee shop tips" data and a naive greedy random-walk search
//! to explore them. Meant for teaching: what a squared-error surface looks
//! like, and how a slow, jittery, accept-only-if-better search creeps toward
//! its minimum.
//!
//! # Getting Started
//!
//! ```
//! use sse_landscape::prelude::*;
//!
//! let mut sim = TipsSimulation::new(DataGenerator::builder().seed(42).build()?)?;
//! let search = NaiveSearch::builder().n_samples(5_000).step_size(0.001).build()?;
//! let result = sim.run(&search);
//!
//! let landscape = sim.landscape(false)?;
//! let scene = landscape.scene(
//!     &SurfaceConfig::new().resolution(40),
//!     Some(&result.trajectory),
//!     &SceneOptions::new(),
//! )?;
//! assert_eq!(scene.markers().len(), 4);
//!
//! let html = render_html(&scene);
//! assert!(html.contains("Surface Minimum"));
//! # Ok::<(), sse_landscape::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Dataset`] | Immutable `(feature, target)` pairs. |
//! | [`DataGenerator`] | Synthetic data from a true line plus clipped Gaussian noise. |
//! | [`Landscape`] | Data with optional true parameters and optional standardization. |
//! | [`LossSurface`] | SSE over an N×N `(bias, slope)` grid, with its minimum cell. |
//! | [`NaiveSearch`] | Greedy random walk; returns a [`SearchResult`] with the full [`Trajectory`]. |
//! | [`Scene`](scene::Scene) | Renderer-independent figure description. |
//! | [`Deviates`](random::Deviates) | Injectable uniform/normal random source. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on data, surface, trajectory and scene types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for generation, search and surface evaluation | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod dataset;
mod error;
mod generator;
mod landscape;
mod loss;
pub mod random;
mod rng_util;
pub mod scene;
mod search;
mod simulation;
mod surface;
mod visualization;

pub use dataset::{Dataset, Standardization};
pub use error::{Axis, Error, Result};
pub use generator::{DataGenerator, DataGeneratorBuilder};
pub use landscape::{Landscape, LandscapeBuilder, Truth};
pub use loss::{LossPoint, Params, sse};
pub use search::{NaiveSearch, NaiveSearchBuilder, SearchResult, Trajectory};
pub use simulation::TipsSimulation;
pub use surface::{LossSurface, SurfaceConfig};
pub use visualization::{render_html, write_html};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use sse_landscape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dataset::{Dataset, Standardization};
    pub use crate::error::{Error, Result};
    pub use crate::generator::DataGenerator;
    pub use crate::landscape::{Landscape, Truth};
    pub use crate::loss::{LossPoint, Params, sse};
    pub use crate::random::Deviates;
    pub use crate::scene::{MarkerKind, Scene, SceneOptions, present};
    pub use crate::search::{NaiveSearch, SearchResult, Trajectory};
    pub use crate::simulation::TipsSimulation;
    pub use crate::surface::{LossSurface, SurfaceConfig};
    pub use crate::visualization::{render_html, write_html};
}
