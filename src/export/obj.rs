//! Wavefront OBJ export of a generated terrain
//!
//! Positions and normals share vertex indexing by construction, so faces
//! are written as `f a//a b//b c//c`.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::types::Result;
use crate::terrain::Terrain;

/// Write `terrain` as OBJ text: one `v` and one `vn` record per vertex, one
/// `f` record per triangle. OBJ indices are 1-based.
pub fn write_obj<W: Write>(terrain: &Terrain, mut out: W) -> Result<()> {
    for p in terrain.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in terrain.normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for &[a, b, c] in terrain.triangles() {
        writeln!(out, "f {0}//{0} {1}//{1} {2}//{2}", a + 1, b + 1, c + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// Write OBJ to a file path, buffered
pub fn write_obj_file(terrain: &Terrain, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_obj(terrain, BufWriter::new(file))
}
