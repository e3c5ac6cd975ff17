//! Check command implementation
//!
//! Runs the full transform in memory and reports whether the map would
//! export, without writing anything.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use tilecast_export::build_scene;

use crate::input::{generator_info, load_map};

/// Run the check command
///
/// # Arguments
/// * `map_path` - Path to the TMX map file
///
/// # Returns
/// Exit code: 0 exportable, 1 not exportable
pub fn run(map_path: &str) -> Result<ExitCode> {
    let map_path = Path::new(map_path);
    println!("{} {}", "Checking:".cyan().bold(), map_path.display());

    let map = load_map(map_path)?;
    match build_scene(&map, &generator_info()) {
        Ok(scene) => {
            println!(
                "{} would export {} lines",
                "OK".green().bold(),
                scene.lines().count()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "INVALID".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}
