//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid cell generation

use crate::core::feature::{FeatureCollection, GridCell};
use crate::core::gridcfg::GridParams;
use tile_grid::{Subdivision, TileCoord};

/// Builds the grid cells nested in a requested tile
pub struct GridGeometryBuilder<'a> {
    params: &'a GridParams,
}

impl<'a> GridGeometryBuilder<'a> {
    pub fn new(params: &'a GridParams) -> GridGeometryBuilder<'a> {
        GridGeometryBuilder { params }
    }

    /// One polygon feature for each grid zoom tile nested in `tile`.
    ///
    /// Returns an empty collection for tiles below `minzoom`. Tiles at or
    /// above the grid zoom yield a single cell for the tile itself.
    pub fn build(&self, tile: &TileCoord) -> FeatureCollection {
        if tile.z < self.params.minzoom {
            debug!("{} below minzoom {}", tile, self.params.minzoom);
            return FeatureCollection::new();
        }
        let features: Vec<GridCell> = Subdivision::new(*tile, self.params.grid_zoom)
            .map(GridCell::new)
            .collect();
        debug!("{} => {} grid cells", tile, features.len());
        FeatureCollection { features }
    }
}
