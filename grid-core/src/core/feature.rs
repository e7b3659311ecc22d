//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::geom::Polygon;
use tile_grid::{cell_id, TileCoord};

pub trait Feature {
    fn fid(&self) -> Option<u64>;
    fn geometry(&self) -> &Polygon;
}

/// Polygon of a single grid tile, identified by its cell id
#[derive(Clone, PartialEq, Debug)]
pub struct GridCell {
    pub tile: TileCoord,
    pub polygon: Polygon,
    pub id: u64,
}

impl GridCell {
    pub fn new(tile: TileCoord) -> GridCell {
        GridCell {
            tile,
            polygon: Polygon::from_extent(&tile.bounds()),
            id: cell_id(&tile),
        }
    }
}

impl Feature for GridCell {
    fn fid(&self) -> Option<u64> {
        Some(self.id)
    }
    fn geometry(&self) -> &Polygon {
        &self.polygon
    }
}

/// Grid cells covering a tile
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FeatureCollection {
    pub features: Vec<GridCell>,
}

impl FeatureCollection {
    pub fn new() -> FeatureCollection {
        FeatureCollection {
            features: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.features.len()
    }
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<GridCell> {
        self.features.iter()
    }
}
