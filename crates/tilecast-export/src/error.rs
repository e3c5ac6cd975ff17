//! Export error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scene export.
///
/// Every variant is terminal for the current export: the first one
/// encountered stops the transform and no output file is created. There is
/// no recoverable category; a partially valid scene document would corrupt
/// the engine's load step.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Collection tilesets and tilesets with non-zero spacing or margin
    /// cannot be merged into a single atlas-backed `TileSet`.
    #[error("unsupported tileset '{name}': {detail}")]
    UnsupportedTileset { name: String, detail: &'static str },

    /// The backing image is missing, truncated, or not a PNG container.
    #[error("unsupported texture format for '{}': texture image must be in PNG format", path.display())]
    UnsupportedImageFormat { path: PathBuf },

    /// A placed tile references a tileset outside the consolidated set.
    #[error("found tile with unknown tileset on layer '{layer}'")]
    UnknownTilesetReference { layer: String },

    /// The map has nothing to export.
    #[error("map has no {what}")]
    EmptyMap { what: &'static str },

    /// The 65536-wide cell packing cannot address an unbounded grid.
    #[error("infinite tile layers are not supported (layer '{layer}')")]
    InfiniteLayer { layer: String },

    /// Failure writing the finished document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
