//! Whole-scene assembly.

use std::fs;
use std::path::Path;

use tilecast_scene::{SceneDocument, Value};
use tiled::{LayerType, Map, Tileset};

use crate::error::ExportError;
use crate::layers::{export_layers, LayerCounters};
use crate::tileset::consolidate;

/// Display name of the target format.
pub const FORMAT_NAME: &str = "Godot TileMap Scene";

/// File extension of the target format, without the dot.
pub const FORMAT_EXTENSION: &str = "tscn";

/// Provenance strings stamped into the scene header comments.
///
/// Callers supply the strings pre-rendered so the document stays a pure
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct GeneratorInfo {
    /// Tool name and version, e.g. `tilecast v0.1.0`.
    pub tool: String,
    /// Map-loader and host platform description.
    pub host: String,
    /// Human-readable export time.
    pub timestamp: String,
}

/// Builds the complete `.tscn` document for a map.
///
/// The section order is fixed: header comments, external resources, the
/// merged `TileSet` sub-resource, the `Root` node, then one node per
/// layer. Resource ids are bound by position in this order, so nothing is
/// reordered after emission.
pub fn build_scene(map: &Map, info: &GeneratorInfo) -> Result<String, ExportError> {
    let mut doc = SceneDocument::new();
    doc.push_comment(info.tool.as_str());
    doc.push_comment(info.host.as_str());
    doc.push_comment(info.timestamp.as_str());
    doc.push_blank();

    let used = used_tilesets(map)?;
    if used.is_empty() {
        return Err(ExportError::EmptyMap {
            what: "tilesets attached",
        });
    }
    let merged = consolidate(&used, &mut doc)?;

    doc.push_heading(
        "node",
        vec![
            ("name", Value::str("Root")),
            ("type", Value::str("Node2D")),
        ],
    );
    doc.push_blank();

    if map.layers().next().is_none() {
        return Err(ExportError::EmptyMap { what: "layers" });
    }
    let mut counters = LayerCounters::default();
    export_layers(map, &merged, &mut counters, &mut doc)?;

    Ok(doc.render())
}

/// Builds the scene and writes it to `path`.
///
/// The document is rendered in full before the file is opened, so a
/// failed export never leaves a partial file behind.
pub fn write_scene(map: &Map, path: &Path, info: &GeneratorInfo) -> Result<(), ExportError> {
    let content = build_scene(map, info)?;
    fs::write(path, content)?;
    Ok(())
}

/// The map's tilesets that are actually referenced by at least one placed
/// tile, in attachment order.
///
/// Attached-but-unused tilesets are dropped rather than exported: they
/// would bloat the merged `TileSet` with slots no cell can address.
fn used_tilesets(map: &Map) -> Result<Vec<&Tileset>, ExportError> {
    let mut referenced = vec![false; map.tilesets().len()];
    for layer in map.layers() {
        let tiles = match layer.layer_type() {
            LayerType::Tiles(tiles) => tiles,
            _ => continue,
        };
        let (width, height) = match (tiles.width(), tiles.height()) {
            (Some(width), Some(height)) => (width, height),
            _ => {
                return Err(ExportError::InfiniteLayer {
                    layer: layer.name.clone(),
                })
            }
        };
        for y in 0..height {
            for x in 0..width {
                if let Some(tile) = tiles.get_tile(x as i32, y as i32) {
                    referenced[tile.tileset_index()] = true;
                }
            }
        }
    }
    Ok(map
        .tilesets()
        .iter()
        .zip(&referenced)
        .filter(|(_, used)| **used)
        .map(|(ts, _)| &**ts)
        .collect())
}
