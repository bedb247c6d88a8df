//! Procedural mesh generators.
//!
//! All generators are pure: the same arguments always produce the same mesh.
//! Winding is clockwise when viewed from outside, matching the solid raster
//! preset (counter-clockwise front faces are culled).

use std::f32::consts::TAU;

use super::{MeshData, Vertex};

/// Axis-aligned box centered at the origin spanning `±width`, `±height`, `±depth`.
///
/// Each face has its own four vertices so texture coordinates stay per-face;
/// the topology (24 vertices, 36 indices) never depends on the dimensions.
pub fn create_box(width: f32, height: f32, depth: f32) -> MeshData {
    let (w, h, d) = (width, height, depth);

    let vertices = vec![
        // front (-z)
        Vertex::new(-w, -h, -d, 0.0, 1.0),
        Vertex::new(-w, h, -d, 0.0, 0.0),
        Vertex::new(w, h, -d, 1.0, 0.0),
        Vertex::new(w, -h, -d, 1.0, 1.0),
        // back (+z)
        Vertex::new(-w, -h, d, 1.0, 1.0),
        Vertex::new(w, -h, d, 0.0, 1.0),
        Vertex::new(w, h, d, 0.0, 0.0),
        Vertex::new(-w, h, d, 1.0, 0.0),
        // top (+y)
        Vertex::new(-w, h, -d, 0.0, 1.0),
        Vertex::new(-w, h, d, 0.0, 0.0),
        Vertex::new(w, h, d, 1.0, 0.0),
        Vertex::new(w, h, -d, 1.0, 1.0),
        // bottom (-y)
        Vertex::new(-w, -h, -d, 1.0, 1.0),
        Vertex::new(w, -h, -d, 0.0, 1.0),
        Vertex::new(w, -h, d, 0.0, 0.0),
        Vertex::new(-w, -h, d, 1.0, 0.0),
        // left (-x)
        Vertex::new(-w, -h, d, 0.0, 1.0),
        Vertex::new(-w, h, d, 0.0, 0.0),
        Vertex::new(-w, h, -d, 1.0, 0.0),
        Vertex::new(-w, -h, -d, 1.0, 1.0),
        // right (+x)
        Vertex::new(w, -h, -d, 0.0, 1.0),
        Vertex::new(w, h, -d, 0.0, 0.0),
        Vertex::new(w, h, d, 1.0, 0.0),
        Vertex::new(w, -h, d, 1.0, 1.0),
    ];

    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Flat `m x n` vertex grid in the XZ plane, centered at the origin.
///
/// `m` counts rows along Z, `n` columns along X. Texture coordinates span
/// [0, 1] across the whole grid. Fewer than two rows or columns cannot form a
/// quad and yield an empty mesh.
pub fn create_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    if m < 2 || n < 2 {
        return MeshData::default();
    }

    let half_width = 0.5 * width;
    let half_depth = 0.5 * depth;

    let dx = width / (n - 1) as f32;
    let dz = depth / (m - 1) as f32;
    let du = 1.0 / (n - 1) as f32;
    let dv = 1.0 / (m - 1) as f32;

    let mut vertices = Vec::with_capacity((m * n) as usize);
    for i in 0..m {
        let z = half_depth - i as f32 * dz;
        for j in 0..n {
            let x = -half_width + j as f32 * dx;
            vertices.push(Vertex::new(x, 0.0, z, j as f32 * du, i as f32 * dv));
        }
    }

    let mut indices = Vec::with_capacity((6 * (m - 1) * (n - 1)) as usize);
    for i in 0..m - 1 {
        for j in 0..n - 1 {
            indices.extend_from_slice(&[
                i * n + j,
                i * n + j + 1,
                (i + 1) * n + j,
                (i + 1) * n + j,
                i * n + j + 1,
                (i + 1) * n + j + 1,
            ]);
        }
    }

    MeshData { vertices, indices }
}

/// Capped cylinder (or truncated cone) centered at the origin along +Y.
///
/// Ring vertices are duplicated at the seam because the texture coordinates
/// differ there. A zero slice or stack count yields an empty mesh.
pub fn create_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    if slice_count == 0 || stack_count == 0 {
        return MeshData::default();
    }

    let mut mesh = MeshData::default();

    let stack_height = height / stack_count as f32;
    let radius_step = (top_radius - bottom_radius) / stack_count as f32;
    let d_theta = TAU / slice_count as f32;

    for i in 0..=stack_count {
        let y = -0.5 * height + i as f32 * stack_height;
        let r = bottom_radius + i as f32 * radius_step;

        for j in 0..=slice_count {
            let (s, c) = (j as f32 * d_theta).sin_cos();
            mesh.vertices.push(Vertex::new(
                r * c,
                y,
                r * s,
                j as f32 / slice_count as f32,
                1.0 - i as f32 / stack_count as f32,
            ));
        }
    }

    let ring = slice_count + 1;
    for i in 0..stack_count {
        for j in 0..slice_count {
            mesh.indices.extend_from_slice(&[
                i * ring + j,
                (i + 1) * ring + j,
                (i + 1) * ring + j + 1,
                i * ring + j,
                (i + 1) * ring + j + 1,
                i * ring + j + 1,
            ]);
        }
    }

    push_cap(&mut mesh, top_radius, height, slice_count, Cap::Top);
    push_cap(&mut mesh, bottom_radius, height, slice_count, Cap::Bottom);

    mesh
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Cap {
    Top,
    Bottom,
}

fn push_cap(mesh: &mut MeshData, radius: f32, height: f32, slice_count: u32, cap: Cap) {
    let base = mesh.vertices.len() as u32;
    let y = match cap {
        Cap::Top => 0.5 * height,
        Cap::Bottom => -0.5 * height,
    };
    let d_theta = TAU / slice_count as f32;

    for i in 0..=slice_count {
        let (s, c) = (i as f32 * d_theta).sin_cos();
        let x = radius * c;
        let z = radius * s;
        // Scale by height so cap texel density roughly matches the sides.
        mesh.vertices
            .push(Vertex::new(x, y, z, x / height + 0.5, z / height + 0.5));
    }

    mesh.vertices.push(Vertex::new(0.0, y, 0.0, 0.5, 0.5));
    let center = mesh.vertices.len() as u32 - 1;

    for i in 0..slice_count {
        match cap {
            Cap::Top => mesh
                .indices
                .extend_from_slice(&[center, base + i + 1, base + i]),
            Cap::Bottom => mesh
                .indices
                .extend_from_slice(&[center, base + i, base + i + 1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_indices_in_range(mesh: &MeshData) -> bool {
        let n = mesh.vertices.len() as u32;
        mesh.indices.iter().all(|&i| i < n)
    }

    // ── box ───────────────────────────────────────────────────────────────

    #[test]
    fn box_topology_is_fixed() {
        for (w, h, d) in [(1.0, 1.0, 1.0), (0.1, 5.0, 2.5), (10.0, 0.5, 3.0)] {
            let mesh = create_box(w, h, d);
            assert_eq!(mesh.vertices.len(), 24);
            assert_eq!(mesh.indices.len(), 36);
            assert!(all_indices_in_range(&mesh));
        }
    }

    #[test]
    fn box_dimensions_scale_positions() {
        let mesh = create_box(2.0, 3.0, 4.0);
        for v in &mesh.vertices {
            assert_eq!(v.position[0].abs(), 2.0);
            assert_eq!(v.position[1].abs(), 3.0);
            assert_eq!(v.position[2].abs(), 4.0);
        }
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn grid_counts_match_rows_and_columns() {
        for (m, n) in [(2, 2), (3, 5), (10, 4), (17, 17)] {
            let mesh = create_grid(10.0, 8.0, m, n);
            assert_eq!(mesh.vertices.len() as u32, m * n);
            assert_eq!(mesh.indices.len() as u32, 3 * (m - 1) * (n - 1) * 2);
            assert_eq!(mesh.triangle_count() as u32, (m - 1) * (n - 1) * 2);
            assert!(all_indices_in_range(&mesh));
        }
    }

    #[test]
    fn grid_spans_requested_extent() {
        let mesh = create_grid(10.0, 6.0, 2, 2);
        let xs: Vec<f32> = mesh.vertices.iter().map(|v| v.position[0]).collect();
        let zs: Vec<f32> = mesh.vertices.iter().map(|v| v.position[2]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -5.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 5.0);
        assert_eq!(zs.iter().cloned().fold(f32::INFINITY, f32::min), -3.0);
        assert_eq!(zs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 3.0);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn grid_uv_covers_unit_square() {
        let mesh = create_grid(4.0, 4.0, 3, 3);
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices[8].uv, [1.0, 1.0]);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(create_grid(1.0, 1.0, 1, 5).is_empty());
        assert!(create_grid(1.0, 1.0, 5, 0).is_empty());
    }

    // ── cylinder ──────────────────────────────────────────────────────────

    #[test]
    fn cylinder_counts() {
        let (slices, stacks) = (8u32, 8u32);
        let mesh = create_cylinder(0.5, 0.5, 4.0, slices, stacks);

        let side_vertices = (stacks + 1) * (slices + 1);
        let cap_vertices = 2 * (slices + 2);
        assert_eq!(mesh.vertices.len() as u32, side_vertices + cap_vertices);

        let side_indices = 6 * slices * stacks;
        let cap_indices = 2 * 3 * slices;
        assert_eq!(mesh.indices.len() as u32, side_indices + cap_indices);
        assert!(all_indices_in_range(&mesh));
    }

    #[test]
    fn cylinder_height_is_centered() {
        let mesh = create_cylinder(0.5, 0.25, 4.0, 6, 3);
        let ys = mesh.vertices.iter().map(|v| v.position[1]);
        let (lo, hi) = ys.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
        assert_eq!(lo, -2.0);
        assert_eq!(hi, 2.0);
    }

    #[test]
    fn cylinder_is_deterministic() {
        assert_eq!(
            create_cylinder(0.5, 0.5, 4.0, 8, 8),
            create_cylinder(0.5, 0.5, 4.0, 8, 8)
        );
    }

    #[test]
    fn degenerate_cylinder_is_empty() {
        assert!(create_cylinder(1.0, 1.0, 1.0, 0, 4).is_empty());
        assert!(create_cylinder(1.0, 1.0, 1.0, 4, 0).is_empty());
    }
}
