//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry types in geographic coordinates (WGS 84)

use std::vec::Vec;
use tile_grid::Extent;

#[derive(PartialEq, Clone, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct LineString {
    pub points: Vec<Point>,
}

impl LineString {
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Polygon {
    pub rings: Vec<LineString>,
}

impl Polygon {
    /// Rectangle with ring order SW, SE, NE, NW, SW
    pub fn from_extent(extent: &Extent) -> Polygon {
        let ring = LineString {
            points: vec![
                Point::new(extent.minx, extent.miny),
                Point::new(extent.maxx, extent.miny),
                Point::new(extent.maxx, extent.maxy),
                Point::new(extent.minx, extent.maxy),
                Point::new(extent.minx, extent.miny),
            ],
        };
        Polygon { rings: vec![ring] }
    }
}

#[test]
fn test_polygon_from_extent() {
    let polygon = Polygon::from_extent(&Extent {
        minx: 8.0,
        miny: 47.0,
        maxx: 9.0,
        maxy: 48.0,
    });
    assert_eq!(polygon.rings.len(), 1);
    let ring = &polygon.rings[0];
    assert!(ring.is_closed());
    assert_eq!(
        ring.points,
        vec![
            Point::new(8.0, 47.0),
            Point::new(9.0, 47.0),
            Point::new(9.0, 48.0),
            Point::new(8.0, 48.0),
            Point::new(8.0, 47.0),
        ]
    );
}
