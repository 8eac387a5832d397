//! Fractal terrain mesh generation
//!
//! A terrain is built in three sequential stages over one regular grid:
//! lattice construction and triangulation ([`grid`]), recursive
//! Diamond-Square height displacement ([`displace`]), and per-vertex
//! attribute derivation ([`attributes`]). The finished [`Terrain`] is a set
//! of vertex/index buffers ready for upload to a renderer.

pub mod attributes;
pub mod displace;
pub mod grid;
pub mod params;
pub mod rng;

pub use params::TerrainParams;
pub use rng::{Lcg64, UniformSource};

use log::debug;

use crate::core::types::{Result, Vec3, Vec4};
use grid::HeightGrid;

/// Generated terrain: positions, triangle indices, smooth normals, banded
/// colors, and a wireframe edge list, all sharing one vertex indexing.
///
/// Immutable once generated; regenerate to change anything.
#[derive(Clone, Debug)]
pub struct Terrain {
    params: TerrainParams,
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    normals: Vec<Vec3>,
    colors: Vec<Vec4>,
    edges: Vec<[u32; 2]>,
}

impl Terrain {
    /// Generate a terrain from `params`, seeding the stock PRNG from
    /// `params.seed`. The same parameters always produce the same terrain.
    pub fn generate(params: &TerrainParams) -> Result<Terrain> {
        let mut rng = Lcg64::new(params.seed);
        Self::generate_with(params, &mut rng)
    }

    /// Generate with caller-supplied randomness.
    ///
    /// Fails fast on invalid parameters; no partial artifact is ever
    /// returned.
    pub fn generate_with(params: &TerrainParams, rng: &mut dyn UniformSource) -> Result<Terrain> {
        params.validate()?;

        let mut grid = HeightGrid::new(
            params.div,
            params.min_x,
            params.max_x,
            params.min_y,
            params.max_y,
        );
        let triangles = grid.triangulate();
        debug!(
            "terrain: built grid, {} vertices / {} triangles",
            grid.vertex_count(),
            triangles.len()
        );

        displace::synthesize(&mut grid, params.roughness, rng);
        debug!("terrain: synthesized heights, roughness {}", params.roughness);

        let positions = grid.into_positions();
        let normals = attributes::vertex_normals(&positions, &triangles)?;
        let colors = attributes::vertex_colors(&positions);
        let edges = attributes::wireframe_edges(&triangles);
        debug!("terrain: derived attributes, {} edges", edges.len());

        Ok(Terrain {
            params: params.clone(),
            positions,
            triangles,
            normals,
            colors,
            edges,
        })
    }

    /// Parameters this terrain was generated from
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Vertex positions, row-major over the lattice
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Triangle corner indices, two triangles per grid cell
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Unit vertex normals, same order as `positions`
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// RGBA vertex colors, same order as `positions`
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Wireframe edges, three per triangle, undeduplicated
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // Flat views for buffer upload. All are zero-copy casts over the owned
    // arrays, in the same order the typed accessors expose.

    /// `3 * vertex_count` floats, xyz-interleaved
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `3 * vertex_count` floats, xyz-interleaved
    pub fn normal_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// `4 * vertex_count` floats, rgba-interleaved
    pub fn color_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// `3 * triangle_count` indices, grouped in 3s
    pub fn triangle_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// `2 * edge_count` indices, grouped in 2s
    pub fn edge_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.edges)
    }
}
