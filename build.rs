//! Build script to generate the embedded puzzle catalog
//!
//! Scans `data/puzzles/` for `YYYY-MM-DD.json` files and generates Rust source
//! with a sorted const table of `(date, json)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const PUZZLE_DIR: &str = "data/puzzles";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    generate_catalog(
        &Path::new(&manifest_dir).join(PUZZLE_DIR),
        &Path::new(&out_dir).join("puzzles.rs"),
    );

    // Rebuild if puzzle files change
    println!("cargo:rerun-if-changed={PUZZLE_DIR}");
}

fn generate_catalog(input_dir: &Path, output_path: &Path) {
    let mut files: Vec<(String, PathBuf)> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?.to_string();
            Some((stem, path))
        })
        .collect();

    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle catalog").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Puzzle files compiled into the binary, sorted by date").unwrap();
    writeln!(output, "pub const PUZZLES: &[(&str, &str)] = &[").unwrap();

    for (date, path) in &files {
        println!("cargo:rerun-if-changed={}", path.display());
        writeln!(
            output,
            "    ({date:?}, include_str!({:?})),",
            path.display().to_string()
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of embedded puzzle days").unwrap();
    writeln!(output, "pub const PUZZLES_COUNT: usize = {};", files.len()).unwrap();
}
