//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::builder::GridGeometryBuilder;
use crate::core::feature::Feature;
use crate::core::geom::Point;
use crate::core::GridParams;
use std::collections::HashSet;
use tile_grid::{cell_zoom, decode_cell_id, TileCoord};

fn params(grid_zoom: u8, minzoom: u8, maxzoom: u8) -> GridParams {
    GridParams {
        grid_zoom,
        minzoom,
        maxzoom,
        ..Default::default()
    }
}

#[test]
fn test_default_grid() {
    let params = GridParams::default();
    let builder = GridGeometryBuilder::new(&params);
    let tile = TileCoord {
        x: 8745,
        y: 5592,
        z: 14,
    };
    let cells = builder.build(&tile);
    assert_eq!(cells.len(), 16384);
    let ids: HashSet<u64> = cells.iter().map(|cell| cell.id).collect();
    assert_eq!(ids.len(), 16384);
    for cell in cells.iter() {
        assert_eq!(cell.tile.z, 21);
        assert!(tile.contains(&cell.tile));
        assert_eq!(cell_zoom(cell.id), 21);
        assert_eq!(decode_cell_id(cell.id), Some(cell.tile));
        assert_eq!(cell.fid(), Some(cell.id));
    }
}

#[test]
fn test_below_minzoom() {
    let params = GridParams::default();
    let builder = GridGeometryBuilder::new(&params);
    let cells = builder.build(&TileCoord {
        x: 4372,
        y: 2796,
        z: 13,
    });
    assert!(cells.is_empty());
}

#[test]
fn test_cell_polygons() {
    let params = params(3, 1, 2);
    let builder = GridGeometryBuilder::new(&params);
    let cells = builder.build(&TileCoord { x: 0, y: 0, z: 1 });
    assert_eq!(cells.len(), 16);

    // first cell is the north-west corner of the world
    let first = &cells.features[0];
    assert_eq!(first.tile, TileCoord { x: 0, y: 0, z: 3 });
    assert_eq!(first.id, 3);
    let ring = &first.geometry().rings[0].points;
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);
    // SW, SE, NE, NW
    assert_eq!(ring[0].x, -180.0);
    assert_eq!(ring[1].x, -135.0);
    assert_eq!(ring[2].x, -135.0);
    assert_eq!(ring[3].x, -180.0);
    assert!(ring[0].y < ring[3].y);
    assert_eq!(ring[1].y, ring[0].y);
    assert_eq!(ring[2].y, ring[3].y);
    assert!((ring[3].y - 85.0511287798066).abs() < 1e-9);

    // cells share their borders
    let bounds: Vec<_> = cells.iter().map(|cell| cell.tile.bounds()).collect();
    let total_width: f64 = bounds.iter().map(|b| b.width()).sum();
    assert!((total_width - 4.0 * 180.0).abs() < 1e-9);
    let east = &cells.features[1];
    assert_eq!(east.tile, TileCoord { x: 1, y: 0, z: 3 });
    assert_eq!(
        east.geometry().rings[0].points[0],
        Point::new(ring[1].x, ring[1].y)
    );
}

#[test]
fn test_grid_zoom_tile() {
    let params = params(3, 1, 2);
    let builder = GridGeometryBuilder::new(&params);
    let tile = TileCoord { x: 5, y: 2, z: 3 };
    let cells = builder.build(&tile);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells.features[0].tile, tile);
}
