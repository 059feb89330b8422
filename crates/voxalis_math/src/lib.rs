//! # VOXALIS Math
//!
//! Small, host-independent math types used across the toolkit.
//!
//! - [`Vec3`], [`Vec2`], [`Color`]: plain `f32` structs, laid out for
//!   vertex buffers
//! - [`IVec3`]: integer grid coordinates and sizes
//! - [`Direction`]: the six axis-aligned faces of a voxel

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod direction;
pub mod ivec;
pub mod vector;

pub use direction::Direction;
pub use ivec::IVec3;
pub use vector::{Color, Vec2, Vec3};
