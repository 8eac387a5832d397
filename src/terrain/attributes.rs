//! Per-vertex attribute derivation: normals, colors, wireframe edges

use crate::core::error::Error;
use crate::core::types::{Result, Vec3, Vec4};

/// Height bands of the terrain palette: half-open upper bound and RGBA.
/// Heights at or past the last bound fall into [`TOP_BAND_COLOR`].
pub const HEIGHT_BANDS: [(f32, Vec4); 7] = [
    (0.35, Vec4::new(0.9, 0.3, 0.1, 1.0)),
    (0.40, Vec4::new(0.6, 0.6, 0.2, 1.0)),
    (0.45, Vec4::new(0.7, 0.5, 0.2, 1.0)),
    (0.50, Vec4::new(0.2, 0.8, 0.6, 1.0)),
    (0.52, Vec4::new(0.9, 0.9, 0.2, 1.0)),
    (0.55, Vec4::new(0.3, 0.3, 0.7, 1.0)),
    (0.70, Vec4::new(0.55, 0.55, 0.55, 1.0)),
];

/// Color of the unbounded band above the last threshold
pub const TOP_BAND_COLOR: Vec4 = Vec4::new(0.0, 0.3, 0.9, 1.0);

/// Smooth per-vertex normals by face-normal averaging.
///
/// Two passes: accumulate each triangle's unit face normal into its three
/// corners (with a contribution count per corner), then divide by the count
/// and re-normalize. Unweighted by area, so the result is independent of
/// triangle order. A vertex no triangle touches, or an accumulator that
/// sums to zero, is an invariant violation and surfaces as an error.
pub fn vertex_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Result<Vec<Vec3>> {
    let mut accum = vec![Vec3::ZERO; positions.len()];
    let mut contributions = vec![0u32; positions.len()];

    for &tri in triangles {
        let [a, b, c] = tri.map(|v| v as usize);
        let edge_ab = positions[b] - positions[a];
        let edge_ac = positions[c] - positions[a];
        let face = edge_ab
            .cross(edge_ac)
            .try_normalize()
            .ok_or_else(|| Error::Mesh(format!("degenerate triangle ({a}, {b}, {c})")))?;

        for corner in [a, b, c] {
            accum[corner] += face;
            contributions[corner] += 1;
        }
    }

    accum
        .iter()
        .zip(&contributions)
        .enumerate()
        .map(|(vid, (&sum, &count))| {
            if count == 0 {
                return Err(Error::Mesh(format!("vertex {vid} has no incident triangle")));
            }
            (sum / count as f32)
                .try_normalize()
                .ok_or_else(|| Error::Mesh(format!("zero-length normal at vertex {vid}")))
        })
        .collect()
}

/// Palette band for a final height
pub fn band_color(height: f32) -> Vec4 {
    for (bound, color) in HEIGHT_BANDS {
        if height < bound {
            return color;
        }
    }
    TOP_BAND_COLOR
}

/// One RGBA per vertex, a pure function of that vertex's height
pub fn vertex_colors(positions: &[Vec3]) -> Vec<Vec4> {
    positions.iter().map(|p| band_color(p.z)).collect()
}

/// Expand each triangle into its three sides for wireframe rendering.
/// Sides shared between adjacent triangles appear once per owning triangle;
/// no deduplication, no sorting.
pub fn wireframe_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut edges = Vec::with_capacity(triangles.len() * 3);
    for &[a, b, c] in triangles {
        edges.push([a, b]);
        edges.push([b, c]);
        edges.push([c, a]);
    }
    edges
}
