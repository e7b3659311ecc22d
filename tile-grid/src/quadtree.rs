//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Quadtree subdivision

use crate::tile::TileCoord;

/// Depth-first iterator over all tiles at `grid_zoom` nested in a tile.
///
/// Children are visited in the order of [`TileCoord::children`]. A tile at or
/// below `grid_zoom` yields itself.
pub struct Subdivision {
    grid_zoom: u8,
    stack: Vec<TileCoord>,
}

impl Subdivision {
    pub fn new(tile: TileCoord, grid_zoom: u8) -> Subdivision {
        // at most 3 siblings per level are waiting on the stack
        let depth = grid_zoom.saturating_sub(tile.z) as usize;
        let mut stack = Vec::with_capacity(3 * depth + 1);
        stack.push(tile);
        Subdivision { grid_zoom, stack }
    }
}

impl Iterator for Subdivision {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tile) = self.stack.pop() {
            if tile.z >= self.grid_zoom {
                return Some(tile);
            }
            self.stack.extend(tile.children().iter().rev());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .stack
            .iter()
            .try_fold(0usize, |sum, tile| {
                let count = leaf_count(tile.z, self.grid_zoom);
                if count > usize::MAX as u64 {
                    None
                } else {
                    sum.checked_add(count as usize)
                }
            });
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Number of tiles at `grid_zoom` nested in a tile at `zoom` (`4^(grid_zoom - zoom)`)
pub fn leaf_count(zoom: u8, grid_zoom: u8) -> u64 {
    let depth = grid_zoom.saturating_sub(zoom) as u32;
    4u64.checked_pow(depth).unwrap_or(u64::MAX)
}

/// All tiles at `grid_zoom` nested in `tile`, depth-first.
///
/// No lower zoom bound is applied here: the result grows with `4^(grid_zoom - tile.z)`.
pub fn subdivide(tile: TileCoord, grid_zoom: u8) -> Vec<TileCoord> {
    Subdivision::new(tile, grid_zoom).collect()
}
