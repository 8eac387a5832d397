//! Diamond-Square height synthesis

use log::trace;

use super::grid::HeightGrid;
use super::rng::UniformSource;

/// Baseline height seeded into the four grid corners.
///
/// The diamond/square traversal never revisits a corner index, so corners
/// still hold this value after synthesis completes.
pub const BASE_HEIGHT: f32 = 0.5;

/// Displace the grid's heights in place by recursive midpoint displacement.
///
/// Each level draws one fresh perturbation per touched point, uniform in
/// `[-scale/2, scale/2)` with `scale = roughness * size`. The step halves
/// every level, so perturbation magnitude decays geometrically and the
/// result is self-similar fractal roughness.
pub fn synthesize(grid: &mut HeightGrid, roughness: f32, rng: &mut dyn UniformSource) {
    let div = grid.div() as usize;

    grid.set_height(0, 0, BASE_HEIGHT);
    grid.set_height(div, 0, BASE_HEIGHT);
    grid.set_height(0, div, BASE_HEIGHT);
    grid.set_height(div, div, BASE_HEIGHT);

    subdivide(grid, div, roughness, rng);
}

/// One recursion level: diamond pass, square pass, then recurse at half the
/// step. Draw order is fixed (row-major within each pass) so synthesis is
/// reproducible for a given source.
fn subdivide(grid: &mut HeightGrid, size: usize, roughness: f32, rng: &mut dyn UniformSource) {
    let half = size / 2;
    if half < 1 {
        return;
    }

    let div = grid.div() as usize;
    let scale = roughness * size as f32;
    trace!("displace: size {} scale {}", size, scale);

    // Diamond pass: centers of the size x size cells.
    for row in (half..div).step_by(size) {
        for col in (half..div).step_by(size) {
            let jitter = rng.next_signed_unit() * scale / 2.0;
            diamond_point(grid, row, col, half, jitter);
        }
    }

    // Square pass: the cross pattern. Rows step by half; the column origin
    // alternates between half and 0 with the row.
    for row in (0..=div).step_by(half) {
        let start = (row + half) % size;
        for col in (start..=div).step_by(size) {
            let jitter = rng.next_signed_unit() * scale / 2.0;
            square_point(grid, row, col, half, jitter);
        }
    }

    subdivide(grid, size / 2, roughness, rng);
}

/// Set (row, col) to the average of its four diagonal neighbors at offset
/// `half`, plus `jitter`. Diamond points are always interior, so all four
/// neighbors are in bounds.
fn diamond_point(grid: &mut HeightGrid, row: usize, col: usize, half: usize, jitter: f32) {
    let sum = grid.height(row - half, col - half) // bottom-left
        + grid.height(row + half, col - half) // top-left
        + grid.height(row - half, col + half) // bottom-right
        + grid.height(row + half, col + half); // top-right
    grid.set_height(row, col, sum / 4.0 + jitter);
}

/// Set (row, col) to the average of its in-bounds axis neighbors at offset
/// `half`, plus `jitter`. Boundary points lose one or two neighbors and
/// divide by the survivors (2-4).
fn square_point(grid: &mut HeightGrid, row: usize, col: usize, half: usize, jitter: f32) {
    let div = grid.div() as usize;
    let mut sum = 0.0;
    let mut count = 0u32;

    if col >= half {
        sum += grid.height(row, col - half); // left
        count += 1;
    }
    if col + half <= div {
        sum += grid.height(row, col + half); // right
        count += 1;
    }
    if row + half <= div {
        sum += grid.height(row + half, col); // top
        count += 1;
    }
    if row >= half {
        sum += grid.height(row - half, col); // bottom
        count += 1;
    }

    grid.set_height(row, col, sum / count as f32 + jitter);
}
