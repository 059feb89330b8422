//! Mesh buffers.

use bytemuck::{Pod, Zeroable};
use voxalis_math::{Color, Vec2, Vec3};

// =============================================================================
// VERTEX FORMAT - Interleaved layout for upload
// =============================================================================

/// Interleaved vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// UV coordinates [u, v]
    pub uv: [f32; 2],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
}

// =============================================================================
// MESH DATA - Separate streams, grown face by face
// =============================================================================

/// Vertex, index, UV and color streams for a mesh.
///
/// `uv` and `colors` are optional streams: either empty or one entry per
/// vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangle list, three indices per triangle
    pub triangles: Vec<u32>,
    /// Texture coordinates
    pub uv: Vec<Vec2>,
    /// Vertex colors
    pub colors: Vec<Color>,
}

impl MeshData {
    /// Creates an empty mesh
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    #[must_use]
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if mesh is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get triangle count
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Empties every stream, keeping allocations.
    pub fn clear(&mut self) -> &mut Self {
        self.vertices.clear();
        self.triangles.clear();
        self.uv.clear();
        self.colors.clear();
        self
    }

    /// Replaces this mesh's contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.clear();
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend_from_slice(&other.triangles);
        self.uv.extend_from_slice(&other.uv);
        self.colors.extend_from_slice(&other.colors);
        self
    }

    /// Appends `other`, shifting its indices past this mesh's vertices.
    ///
    /// A stream carried by only one side is padded for the other side's
    /// vertices (zero UVs, white colors) so it stays one entry per vertex.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        let offset = self.vertices.len();
        let total = offset + other.vertices.len();

        self.triangles
            .extend(other.triangles.iter().map(|&index| index + offset as u32));
        self.vertices.extend_from_slice(&other.vertices);
        merge_stream(&mut self.uv, &other.uv, offset, total, Vec2::ZERO);
        merge_stream(&mut self.colors, &other.colors, offset, total, Color::WHITE);
        self
    }

    /// Interleaves the streams into one vertex buffer.
    ///
    /// Missing UVs become zero and missing colors become white.
    #[must_use]
    pub fn interleave(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| MeshVertex {
                position: position.to_array(),
                uv: self.uv.get(i).copied().unwrap_or(Vec2::ZERO).to_array(),
                color: self.colors.get(i).copied().unwrap_or(Color::WHITE).to_array(),
            })
            .collect()
    }

    /// Index buffer as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

/// Appends `other` to an optional stream, padding either side with `fill`.
fn merge_stream<T: Copy>(stream: &mut Vec<T>, other: &[T], offset: usize, total: usize, fill: T) {
    if stream.is_empty() && other.is_empty() {
        return;
    }
    stream.resize(offset, fill);
    stream.extend_from_slice(other);
    stream.resize(total, fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshData {
        MeshData {
            vertices: vec![Vec3::ZERO, Vec3::RIGHT, Vec3::UP],
            triangles: vec![0, 1, 2],
            uv: vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            colors: Vec::new(),
        }
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh = triangle();
        mesh.merge(&triangle());

        assert_eq!(mesh.count(), 6);
        assert_eq!(mesh.triangles, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.uv.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_merge_pads_mismatched_streams() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let colored = MeshData {
            vertices: vec![Vec3::ZERO, Vec3::FORWARD, Vec3::UP],
            triangles: vec![0, 1, 2],
            uv: Vec::new(),
            colors: vec![red; 3],
        };

        let mut mesh = triangle();
        mesh.merge(&colored);
        assert_eq!(mesh.uv.len(), 6);
        assert_eq!(mesh.colors.len(), 6);
        assert_eq!(mesh.uv[4], Vec2::ZERO);

        let vertices = mesh.interleave();
        assert_eq!(vertices[0].color, Color::WHITE.to_array());
        assert_eq!(vertices[3].color, red.to_array());

        // Textured into colored pads the other way round.
        let mut mesh = colored.clone();
        mesh.merge(&triangle());
        assert_eq!(mesh.uv.len(), 6);
        assert_eq!(mesh.uv[0], Vec2::ZERO);
        assert_eq!(mesh.uv[4], Vec2::new(1.0, 0.0));
        assert_eq!(mesh.colors[5], Color::WHITE);
    }

    #[test]
    fn test_copy_from_replaces_contents() {
        let mut mesh = triangle();
        mesh.merge(&triangle());
        mesh.copy_from(&triangle());
        assert_eq!(mesh, triangle());
    }

    #[test]
    fn test_clear() {
        let mut mesh = triangle();
        assert!(!mesh.is_empty());
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_interleave_fills_missing_streams() {
        let vertices = triangle().interleave();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].uv, [1.0, 0.0]);
        assert_eq!(vertices[2].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_index_bytes_length() {
        assert_eq!(triangle().index_bytes().len(), 3 * 4);
    }
}
