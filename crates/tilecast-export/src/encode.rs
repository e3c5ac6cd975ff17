//! Integer packing for Godot's tile-data encoding.
//!
//! Godot 3 stores each placed cell as three consecutive ints: a packed cell
//! offset, a tileset-plus-flags word, and a packed atlas coordinate. Both
//! coordinate packings use the same row-major 65536-wide scheme.
//!
//! Coordinates at or beyond 65536 alias into neighbouring rows and corrupt
//! the id; the packing is a documented format limitation and is not
//! validated here.

/// Multiplier for both cell offsets and atlas coordinates.
pub const PACK_STRIDE: i64 = 65536;

/// Flip bit added to the tileset word for horizontally mirrored cells.
pub const FLIP_H: i64 = 1 << 29;

/// Flip bit added to the tileset word for vertically mirrored cells.
pub const FLIP_V: i64 = 1 << 30;

/// Packs a grid coordinate as `y * 65536 + x`.
pub fn cell_offset(x: u32, y: u32) -> i64 {
    i64::from(y) * PACK_STRIDE + i64::from(x)
}

/// Packs a tileset-local tile index as `row * 65536 + column`, where the
/// row/column split is derived from the atlas column count.
pub fn atlas_id(local_index: u32, columns: u32) -> i64 {
    let row = local_index / columns;
    let col = local_index - row * columns;
    i64::from(row) * PACK_STRIDE + i64::from(col)
}

/// Composes the tileset-plus-flags word for one cell.
///
/// The base value is the consolidated tileset slot; flip bits are additive
/// and may both be set.
pub fn tileset_word(slot: usize, flip_h: bool, flip_v: bool) -> i64 {
    let mut word = slot as i64;
    if flip_h {
        word += FLIP_H;
    }
    if flip_v {
        word += FLIP_V;
    }
    word
}

/// Splits a packed id back into `(row, column)`.
pub fn decode_packed(id: i64) -> (i64, i64) {
    (id / PACK_STRIDE, id % PACK_STRIDE)
}
