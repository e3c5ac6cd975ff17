//! Tileset validation and consolidation.
//!
//! All of a map's atlas tilesets merge into one Godot `TileSet`
//! sub-resource. Each source tileset becomes a numbered slot backed by its
//! own `ext_resource` texture; the slot index doubles as the base of the
//! per-cell tileset word.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tilecast_scene::{SceneDocument, Value};
use tiled::Tileset;

use crate::error::ExportError;
use crate::image::read_png_header;

/// One source tileset after validation, with its atlas geometry resolved
/// from the backing PNG rather than the editor-maintained map attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetSlot {
    pub name: String,
    pub image_path: PathBuf,
    pub tile_width: u32,
    pub tile_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    /// External-resource id of the slot's texture.
    pub ext_id: u32,
}

impl TilesetSlot {
    /// Tiles per atlas row, from the real pixel width of the texture.
    pub fn columns(&self) -> u32 {
        self.image_width / self.tile_width
    }
}

/// The consolidated `TileSet` and the mapping back to its sources.
#[derive(Debug)]
pub struct MergedTileset {
    slots: Vec<TilesetSlot>,
    by_name: HashMap<String, usize>,
    sub_id: u32,
}

impl MergedTileset {
    /// Slot index for a source tileset name, if it was consolidated.
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn slot(&self, index: usize) -> &TilesetSlot {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[TilesetSlot] {
        &self.slots
    }

    /// Sub-resource id of the merged `TileSet`.
    pub fn sub_id(&self) -> u32 {
        self.sub_id
    }
}

/// Validates the given tilesets, merges them into a single `TileSet`
/// sub-resource, and emits the resource sections into `doc`.
///
/// Validation runs in two passes so that a map with any unsupported
/// tileset fails before its textures are touched: first every tileset is
/// checked for atlas shape (backing image present, zero spacing, zero
/// margin), then every backing image is header-read for its pixel size.
pub fn consolidate(
    tilesets: &[&Tileset],
    doc: &mut SceneDocument,
) -> Result<MergedTileset, ExportError> {
    let mut sources = Vec::with_capacity(tilesets.len());
    for ts in tilesets {
        let image = ts
            .image
            .as_ref()
            .filter(|image| !image.source.as_os_str().is_empty())
            .ok_or_else(|| ExportError::UnsupportedTileset {
                name: ts.name.clone(),
                detail: "image collection tilesets are not supported",
            })?;
        if ts.spacing != 0 {
            return Err(ExportError::UnsupportedTileset {
                name: ts.name.clone(),
                detail: "tile spacing is not supported",
            });
        }
        if ts.margin != 0 {
            return Err(ExportError::UnsupportedTileset {
                name: ts.name.clone(),
                detail: "tile margin is not supported",
            });
        }
        sources.push((*ts, image.source.as_path()));
    }

    let mut slots = Vec::with_capacity(sources.len());
    let mut by_name = HashMap::with_capacity(sources.len());
    for (ts, image_path) in sources {
        let info =
            read_png_header(image_path).map_err(|_| ExportError::UnsupportedImageFormat {
                path: image_path.to_path_buf(),
            })?;
        // A texture narrower than one tile yields a zero-column atlas,
        // which no tile id can be packed against.
        if info.width < ts.tile_width {
            return Err(ExportError::UnsupportedTileset {
                name: ts.name.clone(),
                detail: "texture image is narrower than one tile",
            });
        }
        by_name.insert(ts.name.clone(), slots.len());
        slots.push(TilesetSlot {
            name: ts.name.clone(),
            image_path: image_path.to_path_buf(),
            tile_width: ts.tile_width,
            tile_height: ts.tile_height,
            image_width: info.width,
            image_height: info.height,
            ext_id: 0,
        });
    }

    for slot in &mut slots {
        slot.ext_id = doc.alloc_ext_id();
        doc.push_heading(
            "ext_resource",
            vec![
                ("path", Value::str(res_path(&slot.image_path))),
                ("type", Value::str("Texture")),
                ("id", Value::Int(i64::from(slot.ext_id))),
            ],
        );
    }
    doc.push_blank();

    let sub_id = doc.alloc_sub_id();
    doc.push_heading(
        "sub_resource",
        vec![
            ("type", Value::str("TileSet")),
            ("id", Value::Int(i64::from(sub_id))),
        ],
    );
    for (i, slot) in slots.iter().enumerate() {
        push_slot_records(doc, i, slot);
    }
    doc.push_blank();

    Ok(MergedTileset {
        slots,
        by_name,
        sub_id,
    })
}

/// Emits the full record block for one slot of the merged `TileSet`.
fn push_slot_records(doc: &mut SceneDocument, i: usize, slot: &TilesetSlot) {
    let key = |field: &str| format!("{i}/{field}");
    let w = i64::from(slot.image_width);
    let h = i64::from(slot.image_height);
    doc.push_record(key("name"), Value::str(format!("{} {}", slot.name, i)));
    doc.push_record(key("texture"), Value::ext_resource(slot.ext_id));
    doc.push_record(key("tex_offset"), Value::ctor("Vector2", [0, 0]));
    doc.push_record(key("modulate"), Value::ctor("Color", [1, 1, 1, 1]));
    doc.push_record(key("region"), Value::ctor("Rect2", [0, 0, w, h]));
    doc.push_record(key("tile_mode"), Value::Int(2));
    doc.push_record(key("autotile/icon_coordinate"), Value::ctor("Vector2", [0, 0]));
    doc.push_record(
        key("autotile/tile_size"),
        Value::ctor(
            "Vector2",
            [i64::from(slot.tile_width), i64::from(slot.tile_height)],
        ),
    );
    doc.push_record(key("autotile/spacing"), Value::Int(0));
    doc.push_record(key("autotile/occluder_map"), Value::List(Vec::new()));
    doc.push_record(key("autotile/navpoly_map"), Value::List(Vec::new()));
    doc.push_record(key("autotile/priority_map"), Value::List(Vec::new()));
    doc.push_record(key("autotile/z_index_map"), Value::List(Vec::new()));
    doc.push_record(key("occluder_offset"), Value::ctor("Vector2", [0, 0]));
    doc.push_record(key("navigation_offset"), Value::ctor("Vector2", [0, 0]));
    doc.push_record(key("shapes"), Value::List(Vec::new()));
    doc.push_record(key("z_index"), Value::Int(0));
}

/// Project-root resource path for a texture: the scene and its textures
/// are expected to sit at the top of the Godot project.
fn res_path(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("res://{}", name.to_string_lossy()),
        None => String::from("res://"),
    }
}
