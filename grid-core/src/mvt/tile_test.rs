//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::builder::GridGeometryBuilder;
use crate::core::feature::FeatureCollection;
use crate::core::screen;
use crate::core::GridParams;
use crate::mvt::json::JsonTile;
use crate::mvt::tile::{GridTile, TileResponder};
use crate::mvt::vector_tile;
use std::collections::HashSet;
use tile_grid::{cell_id, Grid, TileCoord};

const TILE: TileCoord = TileCoord {
    x: 8745,
    y: 5592,
    z: 14,
};

fn grid_tile(tile: &TileCoord, cells_of: &TileCoord) -> Option<GridTile> {
    let grid = Grid::web_mercator();
    let params = GridParams::default();
    let cells = GridGeometryBuilder::new(&params).build(cells_of);
    TileResponder::new(&grid, &params).tile(tile, &cells)
}

fn upper_left_cell() -> screen::Polygon {
    let points = [(0, 32), (0, 0), (32, 0), (32, 32), (0, 32)]
        .iter()
        .map(|&(x, y)| screen::Point { x, y })
        .collect();
    screen::Polygon {
        rings: vec![screen::LineString { points }],
    }
}

#[test]
fn test_screen_cells() {
    let tile = grid_tile(&TILE, &TILE).expect("grid tile");
    assert_eq!(tile.tile, TILE);
    assert_eq!(tile.extent, 4096);
    assert_eq!(tile.features.len(), 16384);

    let first = &tile.features[0];
    assert_eq!(
        first.id,
        cell_id(&TileCoord {
            x: 8745 << 7,
            y: 5592 << 7,
            z: 21
        })
    );
    assert_eq!(first.geometry, upper_left_cell());

    for feature in &tile.features {
        let ring = &feature.geometry.rings[0];
        assert_eq!(ring.points.len(), 5);
        assert_eq!(ring.signed_area2(), 2 * 32 * 32);
        for p in &ring.points {
            assert!(p.x >= 0 && p.x <= 4096 && p.y >= 0 && p.y <= 4096);
        }
    }
}

#[test]
fn test_no_data() {
    let grid = Grid::web_mercator();
    let params = GridParams::default();
    let responder = TileResponder::new(&grid, &params);
    assert!(responder.tile(&TILE, &FeatureCollection::new()).is_none());

    // cells of a distant tile
    let far = TileCoord {
        x: 8745,
        y: 5600,
        z: 14,
    };
    assert!(grid_tile(&TILE, &far).is_none());
}

#[test]
fn test_buffer() {
    // two columns of the eastern neighbour fall into the 64 unit buffer
    let east = TileCoord {
        x: 8746,
        y: 5592,
        z: 14,
    };
    let tile = grid_tile(&TILE, &east).expect("buffered cells");
    assert_eq!(tile.features.len(), 2 * 128);
    for feature in &tile.features {
        for p in &feature.geometry.rings[0].points {
            assert!(p.x >= 4096 && p.x <= 4160);
        }
    }
}

#[test]
fn test_mvt_encoding() {
    let tile = grid_tile(&TILE, &TILE).expect("grid tile");
    let mvt_tile = tile.to_mvt("grid");
    assert_eq!(mvt_tile.get_layers().len(), 1);
    let layer = &mvt_tile.get_layers()[0];
    assert_eq!(layer.get_name(), "grid");
    assert_eq!(layer.get_version(), 2);
    assert_eq!(layer.get_extent(), 4096);
    assert!(layer.get_keys().is_empty());
    assert!(layer.get_values().is_empty());
    assert_eq!(layer.get_features().len(), 16384);
    let feature = &layer.get_features()[0];
    assert_eq!(feature.get_id(), tile.features[0].id);
    assert_eq!(feature.get_field_type(), vector_tile::Tile_GeomType::POLYGON);
    assert!(feature.get_tags().is_empty());
    assert_eq!(
        feature.get_geometry(),
        &[9, 0, 64, 26, 0, 63, 64, 0, 0, 64, 15]
    );
}

#[test]
fn test_read_written_tile() {
    let tile = grid_tile(&TILE, &TILE).expect("grid tile");
    let mvt_tile = tile.to_mvt("cells");
    let bytes = GridTile::tile_bytevec(&mvt_tile).unwrap();
    assert!(!bytes.is_empty());

    let decoded = GridTile::read_from(&mut &bytes[..]).unwrap();
    assert_eq!(decoded, mvt_tile);
    let layer = &decoded.get_layers()[0];
    assert_eq!(layer.get_name(), "cells");
    let ids: HashSet<u64> = layer.get_features().iter().map(|f| f.get_id()).collect();
    assert_eq!(ids.len(), 16384);
    assert!(ids.contains(&tile.features[16383].id));
}

#[test]
fn test_json_encoding() {
    let tile = grid_tile(&TILE, &TILE).expect("grid tile");
    let json_tile = JsonTile::from(&tile);
    assert_eq!(json_tile.z, 14);
    assert_eq!(json_tile.x, 8745);
    assert_eq!(json_tile.y, 5592);
    assert_eq!(json_tile.extent, 4096);
    assert_eq!(json_tile.num_features, 16384);
    let feature = &json_tile.features[0];
    assert_eq!(feature.id, tile.features[0].id);
    assert_eq!(feature.geom_type, 3);
    assert!(feature.tags.is_empty());
    assert_eq!(
        feature.geometry,
        vec![vec![[0, 32], [0, 0], [32, 0], [32, 32], [0, 32]]]
    );

    let bytes = json_tile.to_vec().unwrap();
    let json = String::from_utf8(bytes.clone()).unwrap();
    assert!(json.starts_with(r#"{"z":14,"x":8745,"y":5592,"extent":4096,"numFeatures":16384,"#));
    assert!(json.contains(r#""type":3,"tags":{},"geometry":[[[0,32],[0,0],[32,0],[32,32],[0,32]]]"#));
    assert!(!json.contains("numPoints"));
    assert_eq!(JsonTile::from_slice(&bytes).unwrap(), json_tile);
}
