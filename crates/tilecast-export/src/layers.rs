//! Per-layer node emission.

use tilecast_scene::{SceneDocument, Value};
use tiled::{LayerType, Map, ObjectLayer, TileLayer};

use crate::encode::{atlas_id, cell_offset, tileset_word};
use crate::error::ExportError;
use crate::tileset::MergedTileset;

/// Node-name suffix bookkeeping across layers of one map.
///
/// The first node of each type carries the bare type name; every later one
/// appends its ordinal, matching the engine editor's own naming.
#[derive(Debug, Default)]
pub struct LayerCounters {
    tile_layers: u32,
    object_layers: u32,
}

impl LayerCounters {
    fn next_tile_layer(&mut self) -> String {
        self.tile_layers += 1;
        suffixed("TileMap", self.tile_layers)
    }

    fn next_object_layer(&mut self) -> String {
        self.object_layers += 1;
        suffixed("StaticBody2D", self.object_layers)
    }
}

fn suffixed(base: &str, ordinal: u32) -> String {
    if ordinal > 1 {
        format!("{base}{ordinal}")
    } else {
        base.to_string()
    }
}

/// Walks the map's layers in document order and appends one node per
/// exportable layer. Image and group layers have no scene counterpart and
/// are skipped.
pub fn export_layers(
    map: &Map,
    merged: &MergedTileset,
    counters: &mut LayerCounters,
    doc: &mut SceneDocument,
) -> Result<(), ExportError> {
    for layer in map.layers() {
        match layer.layer_type() {
            LayerType::Tiles(tiles) => {
                export_tile_layer(map, &layer.name, &tiles, merged, counters, doc)?;
            }
            LayerType::Objects(objects) => {
                export_object_layer(&layer.name, &objects, counters, doc);
            }
            LayerType::Image(_) | LayerType::Group(_) => {}
        }
    }
    Ok(())
}

/// Emits a `TileMap` node holding the layer's cells in the packed
/// three-ints-per-cell encoding. Cells scan row by row, left to right;
/// empty cells contribute nothing.
fn export_tile_layer(
    map: &Map,
    name: &str,
    tiles: &TileLayer,
    merged: &MergedTileset,
    counters: &mut LayerCounters,
    doc: &mut SceneDocument,
) -> Result<(), ExportError> {
    let (width, height) = match (tiles.width(), tiles.height()) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            return Err(ExportError::InfiniteLayer {
                layer: name.to_string(),
            })
        }
    };

    let mut tile_data = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let tile = match tiles.get_tile(x as i32, y as i32) {
                Some(tile) => tile,
                None => continue,
            };
            let slot_index = merged
                .slot_of(&tile.get_tileset().name)
                .ok_or_else(|| ExportError::UnknownTilesetReference {
                    layer: name.to_string(),
                })?;
            let slot = merged.slot(slot_index);
            tile_data.push(cell_offset(x, y));
            tile_data.push(tileset_word(slot_index, tile.flip_h, tile.flip_v));
            tile_data.push(atlas_id(tile.id(), slot.columns()));
        }
    }

    doc.push_heading(
        "node",
        vec![
            ("name", Value::str(counters.next_tile_layer())),
            ("type", Value::str("TileMap")),
            ("parent", Value::str(".")),
        ],
    );
    doc.push_record("tile_set", Value::sub_resource(merged.sub_id()));
    doc.push_record(
        "cell_size",
        Value::ctor(
            "Vector2",
            [i64::from(map.tile_width), i64::from(map.tile_height)],
        ),
    );
    // TileMap tile-data format, distinct from the scene format version.
    doc.push_record("format", Value::Int(1));
    doc.push_record("tile_data", Value::ctor("PoolIntArray", tile_data));
    doc.push_blank();

    Ok(())
}

/// Emits a placeholder `StaticBody2D` node for an object layer.
///
/// TODO translate the layer's objects into collision shapes instead of
/// leaving a marker comment.
fn export_object_layer(
    name: &str,
    _objects: &ObjectLayer,
    counters: &mut LayerCounters,
    doc: &mut SceneDocument,
) {
    doc.push_heading(
        "node",
        vec![
            ("name", Value::str(counters.next_object_layer())),
            ("type", Value::str("StaticBody2D")),
            ("parent", Value::str(".")),
        ],
    );
    doc.push_comment(format!("LAYER {name}"));
    doc.push_blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_names_suffix_from_the_second_layer_on() {
        let mut counters = LayerCounters::default();
        assert_eq!(counters.next_tile_layer(), "TileMap");
        assert_eq!(counters.next_tile_layer(), "TileMap2");
        assert_eq!(counters.next_tile_layer(), "TileMap3");
        assert_eq!(counters.next_object_layer(), "StaticBody2D");
        assert_eq!(counters.next_object_layer(), "StaticBody2D2");
    }
}
