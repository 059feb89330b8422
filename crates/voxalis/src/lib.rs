//! # VOXALIS
//!
//! Procedural toolkit for voxel worlds.
//!
//! ## Crates
//!
//! - `math`: vectors, integer grid coordinates, face directions
//! - `noise`: permutation tables, value noise, fractal noise, TOML config
//! - `rendering`: mesh buffers and cube builders
//! - `diagnostics`: clock and benchmark helpers
//!
//! `preview` glues them together: sample a heightmap from any noise
//! source, print it, or turn it into a column mesh.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod preview;

pub use voxalis_diagnostics as diagnostics;
pub use voxalis_math as math;
pub use voxalis_noise as noise;
pub use voxalis_rendering as rendering;

pub use voxalis_noise::{FractalNoise, NoiseConfig, NoiseSource, ValueNoise};
