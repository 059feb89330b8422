//! # VOXALIS Rendering
//!
//! CPU-side mesh assembly. Everything here fills caller-owned buffers;
//! uploading them is the host renderer's job.
//!
//! - `MeshData`: growable vertex/index/UV/color buffers
//! - `cube`: face and cube builders for voxel meshes

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod cube;
pub mod mesh;

pub use cube::{add_cube, add_cube_colored, add_face, add_face_colored, cube_mesh, cube_mesh_colored};
pub use mesh::{MeshData, MeshVertex};
