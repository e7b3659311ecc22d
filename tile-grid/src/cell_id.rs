//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Compact quadkey-style cell identifiers
//!
//! The quadkey digits of a tile (column bit = 1, row bit = 2) are written
//! coarsest level first, each digit as two bits with the high (row) bit first.
//! The resulting bit sequence is packed with the first bit as least significant
//! bit. The zoom level is appended as the last two decimal digits:
//! `id = packed * 100 + z`.

use crate::tile::TileCoord;

/// Highest zoom level whose identifiers fit into `u64`
/// (`2^(2*28) * 100 + 28 < 2^64`)
pub const MAX_CELL_ID_ZOOM: u8 = 28;

/// Identifier of a tile.
///
/// Ids are unique for all tiles up to [`MAX_CELL_ID_ZOOM`]; the arithmetic
/// overflows above it.
pub fn cell_id(tile: &TileCoord) -> u64 {
    debug_assert!(tile.z <= MAX_CELL_ID_ZOOM);
    let mut packed: u64 = 0;
    let mut pos = 0u32;
    for level in (1..=tile.z).rev() {
        let mask = 1u32 << (level - 1);
        let col_bit = ((tile.x & mask) != 0) as u64;
        let row_bit = ((tile.y & mask) != 0) as u64;
        packed |= row_bit << pos;
        packed |= col_bit << (pos + 1);
        pos += 2;
    }
    packed * 100 + tile.z as u64
}

/// Zoom level encoded in an identifier
pub fn cell_zoom(id: u64) -> u8 {
    (id % 100) as u8
}

/// Tile of an identifier, `None` if `id` was not produced by [`cell_id`]
pub fn decode_cell_id(id: u64) -> Option<TileCoord> {
    let z = cell_zoom(id);
    if z > MAX_CELL_ID_ZOOM {
        return None;
    }
    let packed = id / 100;
    if packed >> (2 * z as u32) != 0 {
        return None;
    }
    let (mut x, mut y) = (0u32, 0u32);
    for (i, level) in (1..=z).rev().enumerate() {
        let pos = 2 * i as u32;
        let row_bit = ((packed >> pos) & 1) as u32;
        let col_bit = ((packed >> (pos + 1)) & 1) as u32;
        y |= row_bit << (level - 1);
        x |= col_bit << (level - 1);
    }
    Some(TileCoord { x, y, z })
}
