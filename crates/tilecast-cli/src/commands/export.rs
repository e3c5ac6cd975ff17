//! Export command implementation
//!
//! Converts a TMX map into a Godot text scene next to it (or at an
//! explicit output path).

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tilecast_export::{write_scene, FORMAT_EXTENSION, FORMAT_NAME};

use crate::input::{generator_info, load_map};

/// Run the export command
///
/// # Arguments
/// * `map_path` - Path to the TMX map file
/// * `out` - Output scene path (default: map path with `.tscn` extension)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(map_path: &str, out: Option<&str>) -> Result<ExitCode> {
    let map_path = Path::new(map_path);
    let out_path = match out {
        Some(out) => PathBuf::from(out),
        None => map_path.with_extension(FORMAT_EXTENSION),
    };

    println!("{} {}", "Exporting:".cyan().bold(), map_path.display());

    let map = load_map(map_path)?;
    write_scene(&map, &out_path, &generator_info())
        .with_context(|| format!("Failed to export {}", map_path.display()))?;

    println!(
        "{} {} written as {}",
        "SUCCESS".green().bold(),
        out_path.display(),
        FORMAT_NAME
    );
    Ok(ExitCode::SUCCESS)
}
