//! Terrain generator binary: generates a fractal terrain mesh and writes
//! it to disk as Wavefront OBJ plus a JSON manifest.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --div <N>          Grid subdivisions per axis, power of two (default: 64)
//!   --seed <SEED>      Random seed (default: 12345)
//!   --roughness <R>    Perturbation coefficient (default: 0.005)
//!   --name <NAME>      Output file stem (default: "terrain")
//!
//! Output:
//!   <name>.obj    positions, normals, faces
//!   <name>.json   generation parameters + buffer counts

use std::path::PathBuf;
use std::time::Instant;

use serde_json::json;

use terramesh::export::obj;
use terramesh::terrain::{Terrain, TerrainParams};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let div = parse_u32_arg(&args, "--div").unwrap_or(64);
    let seed = parse_u64_arg(&args, "--seed").unwrap_or(12345);
    let roughness = parse_f32_arg(&args, "--roughness").unwrap_or(0.005);
    let name = parse_str_arg(&args, "--name").unwrap_or_else(|| "terrain".to_string());

    let params = TerrainParams {
        div,
        roughness,
        seed,
        ..Default::default()
    };

    println!("=== Terramesh Generator ===");
    println!("Grid:      {} x {} cells", div, div);
    println!("Seed:      {}", seed);
    println!("Roughness: {}", roughness);
    println!();

    let start = Instant::now();
    let terrain = match Terrain::generate(&params) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("generation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!(
        "Generated {} vertices / {} triangles / {} edges in {:.1}ms",
        terrain.vertex_count(),
        terrain.triangle_count(),
        terrain.edge_count(),
        elapsed.as_secs_f64() * 1000.0
    );

    let obj_path = PathBuf::from(format!("{}.obj", name));
    if let Err(e) = obj::write_obj_file(&terrain, &obj_path) {
        eprintln!("failed to write {}: {}", obj_path.display(), e);
        std::process::exit(1);
    }
    println!("Wrote {}", obj_path.display());

    let manifest = json!({
        "name": name,
        "params": params,
        "vertex_count": terrain.vertex_count(),
        "triangle_count": terrain.triangle_count(),
        "edge_count": terrain.edge_count(),
    });
    let manifest_path = PathBuf::from(format!("{}.json", name));
    let body = serde_json::to_string_pretty(&manifest).expect("Failed to serialize manifest");
    if let Err(e) = std::fs::write(&manifest_path, body) {
        eprintln!("failed to write {}: {}", manifest_path.display(), e);
        std::process::exit(1);
    }
    println!("Wrote {}", manifest_path.display());
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}
