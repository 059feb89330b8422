//! # VOXALIS Noise
//!
//! Deterministic procedural noise for terrain and density fields.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same noise
//! 2. **Infallible sampling**: Only construction can fail
//! 3. **No stale state**: Fractal octave tables are rebuilt by every setter
//!    that affects them
//!
//! ## Core Components
//!
//! - `PermutationTable`: seeded lattice hashing in 1-3 dimensions
//! - `NoiseSource`: the sampling capability every variant implements
//! - `ValueNoise`: interpolated lattice values with a quintic fade
//! - `FractalNoise`: octave composition over any `NoiseSource`
//! - `NoiseConfig`: TOML configuration producing a `FractalNoise`
//!
//! ## Example
//!
//! ```rust,ignore
//! use voxalis_noise::{FractalNoise, NoiseSource, ValueNoise};
//!
//! let base = ValueNoise::new(12345, 1.0, 1.0);
//! let fractal = FractalNoise::builder(vec![base])
//!     .octaves(5)
//!     .frequency(0.02)
//!     .build()?;
//!
//! let height = fractal.sample_2d(100.0, 200.0);
//! ```
//!
//! ## Threading
//!
//! Reseeding takes `&mut self`, so a sampler cannot be rebuilt while
//! another thread samples it. Give each thread its own instance (all types
//! are `Clone`) if sampling in parallel.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod fractal;
pub mod permutation;
pub mod source;
pub mod value;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use fractal::{FractalNoise, FractalNoiseBuilder, OctaveLayer, MAX_OCTAVES};
pub use permutation::PermutationTable;
pub use source::NoiseSource;
pub use value::ValueNoise;
