//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Polygon clipping against a tile with buffer (Sutherland-Hodgman)

/// Axis-aligned clipping rectangle in screen units
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClipBox {
    pub min: f64,
    pub max: f64,
}

impl ClipBox {
    /// Tile area `[0, tile_size]` extended by `buffer` on each side
    pub fn new(tile_size: u32, buffer: u32) -> ClipBox {
        ClipBox {
            min: -(buffer as f64),
            max: tile_size as f64 + buffer as f64,
        }
    }

    /// True if the bounding box of `ring` overlaps the clip box
    pub fn intersects(&self, ring: &[(f64, f64)]) -> bool {
        let (mut minx, mut miny) = (f64::INFINITY, f64::INFINITY);
        let (mut maxx, mut maxy) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in ring {
            minx = minx.min(x);
            miny = miny.min(y);
            maxx = maxx.max(x);
            maxy = maxy.max(y);
        }
        minx < self.max && maxx > self.min && miny < self.max && maxy > self.min
    }

    /// True if all points of `ring` are inside the clip box
    pub fn contains(&self, ring: &[(f64, f64)]) -> bool {
        ring.iter().all(|&(x, y)| {
            x >= self.min && x <= self.max && y >= self.min && y <= self.max
        })
    }

    /// Clip an open ring (without repeated closing point).
    pub fn clip_ring(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        if self.contains(ring) {
            return ring.to_vec();
        }
        if !self.intersects(ring) {
            return Vec::new();
        }
        let (min, max) = (self.min, self.max);
        let output = clip_against_edge(ring, |p| p.0 >= min, |p1, p2| {
            let t = (min - p1.0) / (p2.0 - p1.0);
            (min, p1.1 + t * (p2.1 - p1.1))
        });
        let output = clip_against_edge(&output, |p| p.0 <= max, |p1, p2| {
            let t = (max - p1.0) / (p2.0 - p1.0);
            (max, p1.1 + t * (p2.1 - p1.1))
        });
        let output = clip_against_edge(&output, |p| p.1 >= min, |p1, p2| {
            let t = (min - p1.1) / (p2.1 - p1.1);
            (p1.0 + t * (p2.0 - p1.0), min)
        });
        clip_against_edge(&output, |p| p.1 <= max, |p1, p2| {
            let t = (max - p1.1) / (p2.1 - p1.1);
            (p1.0 + t * (p2.0 - p1.0), max)
        })
    }
}

fn clip_against_edge<F, I>(ring: &[(f64, f64)], inside: F, intersect: I) -> Vec<(f64, f64)>
where
    F: Fn(&(f64, f64)) -> bool,
    I: Fn(&(f64, f64), &(f64, f64)) -> (f64, f64),
{
    let n = ring.len();
    let mut output = Vec::with_capacity(n + 2);
    for i in 0..n {
        let current = &ring[i];
        let next = &ring[(i + 1) % n];
        match (inside(current), inside(next)) {
            (true, true) => output.push(*next),
            (true, false) => output.push(intersect(current, next)),
            (false, true) => {
                output.push(intersect(current, next));
                output.push(*next);
            }
            (false, false) => {}
        }
    }
    output
}
