//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{extent_wgs84_to_merc, lonlat_to_merc, Extent, Grid};
use crate::tile::TileCoord;

fn assert_extent_eq(a: &Extent, b: &Extent) {
    const EPSILON: f64 = 1e-6;
    assert!(
        (a.minx - b.minx).abs() < EPSILON
            && (a.miny - b.miny).abs() < EPSILON
            && (a.maxx - b.maxx).abs() < EPSILON
            && (a.maxy - b.maxy).abs() < EPSILON,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn test_bbox() {
    let grid = Grid::web_mercator();

    let extent000 = grid.tile_extent_xyz(&TileCoord { x: 0, y: 0, z: 0 });
    assert_extent_eq(
        &extent000,
        &Extent {
            minx: -20037508.342789248,
            miny: -20037508.342789248,
            maxx: 20037508.342789248,
            maxy: 20037508.342789248,
        },
    );

    let extent = grid.tile_extent_xyz(&TileCoord {
        x: 486,
        y: 332,
        z: 10,
    });
    assert_extent_eq(
        &extent,
        &Extent {
            minx: -1017529.7205322683,
            miny: 7005300.768279836,
            maxx: -978393.9620502554,
            maxy: 7044436.526761845,
        },
    );

    let extent_ch = grid.tile_extent_xyz(&TileCoord {
        x: 1073,
        y: 717,
        z: 11,
    });
    assert_extent_eq(
        &extent_ch,
        &Extent {
            minx: 958826.0828092508,
            miny: 5987771.047747567,
            maxx: 978393.9620502554,
            maxy: 6007338.926988572,
        },
    );
}

#[test]
fn test_resolutions() {
    let grid = Grid::web_mercator();
    assert_eq!(grid.nlevels(), 23);
    assert_eq!(grid.maxzoom(), 22);
    assert_eq!(grid.pixel_width(0), 156543.0339280410);
    assert_eq!(grid.pixel_width(10), 152.87405657035254);
    assert_eq!(grid.pixel_width(22), 0.037322767717371225);
}

#[test]
fn test_projected_extent() {
    let extent_wgs84 = Extent {
        minx: 4.0,
        miny: 52.0,
        maxx: 5.0,
        maxy: 53.0,
    };
    let projected = extent_wgs84_to_merc(&extent_wgs84);
    assert_extent_eq(
        &projected,
        &Extent {
            minx: 445277.96317309426,
            miny: 6800125.454397307,
            maxx: 556597.4539663679,
            maxy: 6982997.920389788,
        },
    );
    assert_eq!(
        lonlat_to_merc(extent_wgs84.minx, extent_wgs84.miny),
        (projected.minx, projected.miny)
    );
}

#[test]
fn test_tile_bounds_match_grid() {
    // lon/lat tile bounds projected to Mercator give the grid tile extent
    let grid = Grid::web_mercator();
    for tile in &[
        TileCoord { x: 0, y: 0, z: 0 },
        TileCoord { x: 486, y: 332, z: 10 },
        TileCoord {
            x: 8745,
            y: 5592,
            z: 14,
        },
    ] {
        let projected = extent_wgs84_to_merc(&tile.bounds());
        assert_extent_eq(&projected, &grid.tile_extent_xyz(tile));
    }
}
