//! tilecast CLI - Tiled map to Godot text-scene exporter
//!
//! This binary provides commands for exporting TMX maps as Godot 3
//! `.tscn` scenes and for checking maps without writing output.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tilecast_cli::commands;

/// tilecast - Tiled map to Godot scene exporter
#[derive(Parser)]
#[command(name = "tilecast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a TMX map as a Godot text scene
    Export {
        /// Path to the TMX map file
        #[arg(short, long)]
        map: String,

        /// Output scene path (default: map path with .tscn extension)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Check whether a TMX map would export, without writing output
    Check {
        /// Path to the TMX map file
        #[arg(short, long)]
        map: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { map, out } => commands::export::run(&map, out.as_deref()),
        Commands::Check { map } => commands::check::run(&map),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
