//! Cube mesh builder.
//!
//! A unit cube has 8 corners at +-0.5. Each face is a quad of four corners
//! wound the same way, split into two triangles. Faces are indexed by
//! [`Direction::index`].

use voxalis_math::{Color, Direction, Vec2, Vec3};

use crate::mesh::MeshData;

/// Unit cube corners.
const CORNERS: [Vec3; 8] = [
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
];

/// Corner indices of each face, by face index.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // Front
    [5, 0, 3, 6], // Right
    [4, 5, 6, 7], // Back
    [1, 4, 7, 2], // Left
    [5, 4, 1, 0], // Top
    [3, 2, 7, 6], // Bottom
];

/// Quad UVs in corner order.
const QUAD_UV: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Pushes the quad's positions and its two triangles.
fn push_quad(mesh: &mut MeshData, direction: Direction, center: Vec3, size: f32) {
    let base = mesh.count() as u32;

    mesh.vertices.extend(
        FACES[direction.index()]
            .iter()
            .map(|&corner| CORNERS[corner] * size + center),
    );
    mesh.triangles
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Adds one textured face. UVs scale with `size` so textures tile.
pub fn add_face(mesh: &mut MeshData, direction: Direction, center: Vec3, size: f32) {
    push_quad(mesh, direction, center, size);
    mesh.uv.extend(QUAD_UV.iter().map(|&uv| uv * size));
}

/// Adds one vertex-colored face.
pub fn add_face_colored(
    mesh: &mut MeshData,
    direction: Direction,
    center: Vec3,
    size: f32,
    color: Color,
) {
    push_quad(mesh, direction, center, size);
    mesh.colors.extend_from_slice(&[color; 4]);
}

/// Adds all six textured faces of a cube.
pub fn add_cube(mesh: &mut MeshData, center: Vec3, size: f32) {
    for direction in Direction::CROSS {
        add_face(mesh, direction, center, size);
    }
}

/// Adds all six vertex-colored faces of a cube.
pub fn add_cube_colored(mesh: &mut MeshData, center: Vec3, size: f32, color: Color) {
    for direction in Direction::CROSS {
        add_face_colored(mesh, direction, center, size, color);
    }
}

/// A standalone textured cube.
#[must_use]
pub fn cube_mesh(center: Vec3, size: f32) -> MeshData {
    let mut mesh = MeshData::new();
    add_cube(&mut mesh, center, size);
    mesh
}

/// A standalone vertex-colored cube.
#[must_use]
pub fn cube_mesh_colored(center: Vec3, size: f32, color: Color) -> MeshData {
    let mut mesh = MeshData::new();
    add_cube_colored(&mut mesh, center, size, color);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Normal of the first triangle of a face.
    fn face_normal(mesh: &MeshData, face: usize) -> Vec3 {
        let i = face * 6;
        let a = mesh.vertices[mesh.triangles[i] as usize];
        let b = mesh.vertices[mesh.triangles[i + 1] as usize];
        let c = mesh.vertices[mesh.triangles[i + 2] as usize];
        let (u, v) = (b - a, c - a);
        Vec3::new(
            u.y * v.z - u.z * v.y,
            u.z * v.x - u.x * v.z,
            u.x * v.y - u.y * v.x,
        )
    }

    #[test]
    fn test_face_counts() {
        let mut mesh = MeshData::new();
        add_face(&mut mesh, Direction::Top, Vec3::ZERO, 1.0);

        assert_eq!(mesh.count(), 4);
        assert_eq!(mesh.triangles, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.uv.len(), 4);
        assert!(mesh.colors.is_empty());
    }

    #[test]
    fn test_cube_counts() {
        let mesh = cube_mesh(Vec3::ZERO, 1.0);
        assert_eq!(mesh.count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.triangles.iter().all(|&i| (i as usize) < mesh.count()));
    }

    #[test]
    fn test_faces_lie_on_their_side() {
        let center = Vec3::new(10.0, -4.0, 2.0);
        for direction in Direction::CROSS {
            let mut mesh = MeshData::new();
            add_face(&mut mesh, direction, center, 2.0);

            let axis = direction.to_vec3();
            for vertex in &mesh.vertices {
                assert_eq!((*vertex - center).dot(axis), 1.0, "{direction:?}");
            }
        }
    }

    #[test]
    fn test_winding_is_consistent() {
        // Every face winds the same way relative to its outward axis.
        let mesh = cube_mesh(Vec3::ZERO, 1.0);
        let signs: Vec<bool> = Direction::CROSS
            .iter()
            .enumerate()
            .map(|(face, dir)| face_normal(&mesh, face).dot(dir.to_vec3()) > 0.0)
            .collect();
        assert!(signs.iter().all(|&s| s == signs[0]));
    }

    #[test]
    fn test_uv_scales_with_size() {
        let mut mesh = MeshData::new();
        add_face(&mut mesh, Direction::Front, Vec3::ZERO, 3.0);
        assert_eq!(mesh.uv[2], Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_colored_cube() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let mesh = cube_mesh_colored(Vec3::ONE, 0.5, red);
        assert_eq!(mesh.colors.len(), 24);
        assert!(mesh.colors.iter().all(|&c| c == red));
        assert!(mesh.uv.is_empty());
    }
}
