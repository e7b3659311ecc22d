//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::screen;
use crate::mvt::geom_encoder::EncodableGeom;

fn ring(coords: &[(i32, i32)]) -> screen::LineString {
    screen::LineString {
        points: coords
            .iter()
            .map(|&(x, y)| screen::Point { x, y })
            .collect(),
    }
}

#[test]
fn test_geom_encoding() {
    let point = screen::Point { x: 25, y: 17 };
    assert_eq!(point.encode().as_slice(), &[9, 50, 34]);

    let polygon = screen::Polygon {
        rings: vec![ring(&[(3, 6), (8, 12), (20, 34), (3, 6)])],
    };
    assert_eq!(polygon.encode().as_slice(), &[9, 6, 12, 18, 10, 12, 24, 44, 15]);

    let polygon_with_hole = screen::Polygon {
        rings: vec![
            ring(&[(11, 11), (20, 11), (20, 20), (11, 20), (11, 11)]),
            ring(&[(13, 13), (13, 17), (17, 17), (17, 13), (13, 13)]),
        ],
    };
    assert_eq!(
        polygon_with_hole.encode().as_slice(),
        &[9, 22, 22, 26, 18, 0, 0, 18, 17, 0, 15, 9, 4, 13, 26, 0, 8, 8, 0, 0, 7, 15]
    );
}

#[test]
fn test_grid_cell_encoding() {
    // 32x32 cell in the upper left corner of a tile
    let polygon = screen::Polygon {
        rings: vec![ring(&[(0, 32), (0, 0), (32, 0), (32, 32), (0, 32)])],
    };
    assert_eq!(polygon.encode().as_slice(), &[9, 0, 64, 26, 0, 63, 64, 0, 0, 64, 15]);
}

#[test]
fn test_degenerate_rings() {
    let polygon = screen::Polygon {
        rings: vec![ring(&[(0, 0), (5, 5), (0, 0)])],
    };
    assert!(polygon.encode().is_empty());
    let polygon = screen::Polygon { rings: vec![] };
    assert!(polygon.encode().is_empty());
}
