//! Tiled → Godot scene transform core.
//!
//! Converts an in-memory Tiled map (as loaded by the `tiled` crate) into a
//! Godot 3 text scene. The transform is a one-shot, synchronous batch job:
//! validate and merge the map's tilesets into a single `TileSet`
//! sub-resource, pack every placed tile into Godot's integer tile-data
//! encoding, assemble the `.tscn` document, and write it out.
//!
//! The export is fail-fast: the first validation error aborts the whole
//! transform and nothing is written to disk.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tilecast_export::{write_scene, GeneratorInfo};
//!
//! let map = tiled::Loader::new().load_tmx_map("level.tmx").unwrap();
//! let info = GeneratorInfo {
//!     tool: "tilecast v0.1.0".into(),
//!     host: "rs-tiled 0.15 @ linux (x86_64)".into(),
//!     timestamp: "Thu, 27 Aug 2026 12:00:00 +0000".into(),
//! };
//! write_scene(&map, Path::new("level.tscn"), &info).unwrap();
//! ```

pub mod encode;
pub mod error;
pub mod image;
mod layers;
pub mod scene;
pub mod tileset;

pub use error::ExportError;
pub use image::{read_png_header, PngHeaderError, PngInfo};
pub use scene::{build_scene, write_scene, GeneratorInfo, FORMAT_EXTENSION, FORMAT_NAME};
pub use tileset::{consolidate, MergedTileset, TilesetSlot};
