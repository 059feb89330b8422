//! Heightmap previews for noise sources.
//!
//! Heights are stored row-major: `heights[z * width + x]`.

use voxalis_math::{Color, IVec3};
use voxalis_noise::NoiseSource;
use voxalis_rendering::{add_cube_colored, MeshData};

/// Characters from lowest to highest.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// Color of the lowest column.
const LOW_COLOR: Color = Color::rgb(0.12, 0.28, 0.62);

/// Color of the highest column.
const HIGH_COLOR: Color = Color::rgb(0.92, 0.92, 0.88);

/// Samples a `width` x `depth` grid on the XZ plane, `scale` units apart.
pub fn sample_heightmap<N: NoiseSource + ?Sized>(
    noise: &N,
    width: usize,
    depth: usize,
    scale: f32,
) -> Vec<f32> {
    let mut heights = Vec::with_capacity(width * depth);
    for z in 0..depth {
        for x in 0..width {
            heights.push(noise.sample_2d(x as f32 * scale, z as f32 * scale));
        }
    }
    heights
}

/// Maps every height to `[0, 1]` relative to the map's own range.
/// A flat map maps to zero.
fn normalized(heights: &[f32]) -> Vec<f32> {
    let (min, max) = heights
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &h| (lo.min(h), hi.max(h)));
    let range = max - min;

    if range <= f32::EPSILON {
        return vec![0.0; heights.len()];
    }
    heights.iter().map(|&h| (h - min) / range).collect()
}

/// Renders the map as text, one line per row.
#[must_use]
pub fn render_ascii(heights: &[f32], width: usize) -> String {
    if width == 0 || heights.is_empty() {
        return String::new();
    }

    let last = (ASCII_RAMP.len() - 1) as f32;
    let levels = normalized(heights);
    let mut out = String::with_capacity(heights.len() + heights.len() / width);

    for row in levels.chunks(width) {
        out.extend(row.iter().map(|&t| char::from(ASCII_RAMP[(t * last).round() as usize])));
        out.push('\n');
    }
    out
}

/// Builds one colored cube per column, lifted to its height.
///
/// Column tops range from `0` to `max_height` cells; color goes from
/// low to high with the same ratio.
#[must_use]
pub fn heightmap_mesh(heights: &[f32], width: usize, max_height: u32) -> MeshData {
    let mut mesh = MeshData::new();
    if width == 0 {
        return mesh;
    }

    for (i, t) in normalized(heights).into_iter().enumerate() {
        let cell = IVec3::new(
            (i % width) as i32,
            (t * max_height as f32).round() as i32,
            (i / width) as i32,
        );
        add_cube_colored(&mut mesh, cell.to_vec3(), 1.0, LOW_COLOR.lerp(HIGH_COLOR, t));
    }

    tracing::debug!(
        columns = heights.len(),
        vertices = mesh.count(),
        "heightmap mesh built"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxalis_noise::ValueNoise;

    #[test]
    fn test_heightmap_layout() {
        let noise = ValueNoise::new(5, 1.0, 1.0);
        let heights = sample_heightmap(&noise, 4, 3, 0.37);

        assert_eq!(heights.len(), 12);
        // Row-major: index 2 * 4 + 1 is x = 1, z = 2.
        assert_eq!(heights[9], noise.sample_2d(0.37, 2.0 * 0.37));
    }

    #[test]
    fn test_ascii_shape() {
        let heights = [0.0, 0.5, 1.0, -1.0, 0.25, 0.75];
        let text = render_ascii(&heights, 3);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == 3));
        assert_eq!(lines[0].as_bytes()[2], b'@');
        assert_eq!(lines[1].as_bytes()[0], b' ');
    }

    #[test]
    fn test_ascii_flat_map() {
        assert_eq!(render_ascii(&[0.3; 4], 2), "  \n  \n");
        assert_eq!(render_ascii(&[], 4), "");
        assert_eq!(render_ascii(&[1.0], 0), "");
    }

    #[test]
    fn test_column_mesh() {
        let heights = [-1.0, 0.0, 1.0, 0.0];
        let mesh = heightmap_mesh(&heights, 2, 8);

        assert_eq!(mesh.count(), 4 * 24);
        assert_eq!(mesh.colors.len(), mesh.count());

        let top = mesh.vertices.iter().map(|v| v.y).fold(f32::MIN, f32::max);
        let bottom = mesh.vertices.iter().map(|v| v.y).fold(f32::MAX, f32::min);
        assert_eq!(top, 8.5);
        assert_eq!(bottom, -0.5);
        assert_eq!(mesh.colors[0], LOW_COLOR);
        assert_eq!(mesh.colors[2 * 24], LOW_COLOR.lerp(HIGH_COLOR, 1.0));
    }

    #[test]
    fn test_empty_mesh_for_zero_width() {
        assert!(heightmap_mesh(&[1.0, 2.0], 0, 4).is_empty());
    }
}
