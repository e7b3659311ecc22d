//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry types in screen coordinates

use std::vec::Vec;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn origin() -> Point {
        Point { x: 0, y: 0 }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct LineString {
    pub points: Vec<Point>,
}

impl LineString {
    /// Twice the signed area of a closed ring (shoelace formula).
    ///
    /// With y pointing down, rings drawn clockwise on screen have a positive area.
    pub fn signed_area2(&self) -> i64 {
        self.points
            .windows(2)
            .map(|w| w[0].x as i64 * w[1].y as i64 - w[1].x as i64 * w[0].y as i64)
            .sum()
    }
    /// Reverse the ring if its orientation doesn't match `exterior`
    pub fn rewind(&mut self, exterior: bool) {
        let area = self.signed_area2();
        if (exterior && area < 0) || (!exterior && area > 0) {
            self.points.reverse();
        }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Polygon {
    pub rings: Vec<LineString>,
}

impl Polygon {
    /// Orient exterior rings with positive and interior rings with negative area
    pub fn rewind(&mut self) {
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.rewind(i == 0);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(coords: &[(i32, i32)]) -> LineString {
        LineString {
            points: coords.iter().map(|&(x, y)| Point { x, y }).collect(),
        }
    }

    #[test]
    fn test_signed_area() {
        // clockwise on screen
        let cw = ring(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)]);
        assert_eq!(cw.signed_area2(), 200);
        let ccw = ring(&[(0, 0), (0, 10), (10, 10), (10, 0), (0, 0)]);
        assert_eq!(ccw.signed_area2(), -200);
        assert_eq!(ring(&[(0, 0), (5, 5), (0, 0)]).signed_area2(), 0);
    }

    #[test]
    fn test_rewind() {
        let mut polygon = Polygon {
            rings: vec![
                ring(&[(0, 0), (0, 10), (10, 10), (10, 0), (0, 0)]),
                ring(&[(2, 2), (4, 2), (4, 4), (2, 4), (2, 2)]),
            ],
        };
        polygon.rewind();
        assert_eq!(
            polygon.rings[0],
            ring(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)])
        );
        assert_eq!(
            polygon.rings[1],
            ring(&[(2, 2), (2, 4), (4, 4), (4, 2), (2, 2)])
        );
        assert!(polygon.rings[0].signed_area2() > 0);
        assert!(polygon.rings[1].signed_area2() < 0);
    }
}
