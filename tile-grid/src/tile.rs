//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile coordinates in the XYZ (slippy map) addressing scheme

use crate::grid::Extent;
use std::f64::consts;
use std::fmt;

/// Highest zoom level addressable with `u32` columns and rows
pub const MAX_ZOOM: u8 = 31;

/// Latitude limit of the Web Mercator projection
const MAX_LATITUDE: f64 = 85.0511287798066;

/// Tile address `z/x/y`, origin top left.
///
/// Valid coordinates satisfy `x < 2^z` and `y < 2^z`. Use [`TileCoord::new`]
/// for untrusted input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileCoord {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Zoom level
    pub z: u8,
}

impl TileCoord {
    /// Checked constructor
    pub fn new(x: u32, y: u32, z: u8) -> Option<TileCoord> {
        if z > MAX_ZOOM {
            return None;
        }
        let dim = Self::dim(z);
        if (x as u64) < dim && (y as u64) < dim {
            Some(TileCoord { x, y, z })
        } else {
            None
        }
    }

    /// Number of tiles per axis at `zoom`
    pub fn dim(zoom: u8) -> u64 {
        1u64 << zoom
    }

    /// The four tiles one level finer, in the order
    /// `(2x, 2y)`, `(2x+1, 2y)`, `(2x, 2y+1)`, `(2x+1, 2y+1)`.
    pub fn children(&self) -> [TileCoord; 4] {
        let (x, y, z) = (self.x * 2, self.y * 2, self.z + 1);
        [
            TileCoord { x, y, z },
            TileCoord { x: x + 1, y, z },
            TileCoord { x, y: y + 1, z },
            TileCoord {
                x: x + 1,
                y: y + 1,
                z,
            },
        ]
    }

    pub fn parent(&self) -> Option<TileCoord> {
        if self.z == 0 {
            return None;
        }
        Some(TileCoord {
            x: self.x / 2,
            y: self.y / 2,
            z: self.z - 1,
        })
    }

    /// True if `other` is this tile or nested within it
    pub fn contains(&self, other: &TileCoord) -> bool {
        if other.z < self.z {
            return false;
        }
        let dz = (other.z - self.z) as u32;
        (other.x as u64 >> dz) == self.x as u64 && (other.y as u64 >> dz) == self.y as u64
    }

    /// Geographic (lon, lat) bounding box
    pub fn bounds(&self) -> Extent {
        let (west, north) = Self::upper_left(self.x as u64, self.y as u64, self.z);
        let (east, south) = Self::upper_left(self.x as u64 + 1, self.y as u64 + 1, self.z);
        Extent {
            minx: west,
            miny: south,
            maxx: east,
            maxy: north,
        }
    }

    /// Tile at `zoom` containing the point (lon, lat).
    ///
    /// Points outside of the Web Mercator latitude range are clamped to the border tiles.
    pub fn from_lonlat(lon: f64, lat: f64, zoom: u8) -> TileCoord {
        let zoom = zoom.min(MAX_ZOOM);
        let n = Self::dim(zoom) as f64;
        let lat_rad = lat.max(-MAX_LATITUDE).min(MAX_LATITUDE).to_radians();
        let x = ((lon + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / consts::PI) / 2.0 * n).floor();
        let max = n - 1.0;
        TileCoord {
            x: clamp(x, max) as u32,
            y: clamp(y, max) as u32,
            z: zoom,
        }
    }

    fn upper_left(xtile: u64, ytile: u64, zoom: u8) -> (f64, f64) {
        let n = Self::dim(zoom) as f64;
        let lon = xtile as f64 / n * 360.0 - 180.0;
        let lat = (consts::PI * (1.0 - 2.0 * ytile as f64 / n))
            .sinh()
            .atan()
            .to_degrees();
        (lon, lat)
    }
}

fn clamp(v: f64, max: f64) -> f64 {
    if v.is_nan() || v < 0.0 {
        0.0
    } else if v > max {
        max
    } else {
        v
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[test]
fn test_new() {
    assert_eq!(
        TileCoord::new(0, 0, 0),
        Some(TileCoord { x: 0, y: 0, z: 0 })
    );
    assert!(TileCoord::new(1, 0, 0).is_none());
    assert!(TileCoord::new(0, 2, 1).is_none());
    assert!(TileCoord::new(u32::MAX, u32::MAX, 32).is_none());
    assert!(TileCoord::new(u32::MAX >> 1, 0, 31).is_some());
}

#[test]
fn test_children() {
    let tile = TileCoord { x: 3, y: 5, z: 4 };
    let children = tile.children();
    assert_eq!(
        children,
        [
            TileCoord { x: 6, y: 10, z: 5 },
            TileCoord { x: 7, y: 10, z: 5 },
            TileCoord { x: 6, y: 11, z: 5 },
            TileCoord { x: 7, y: 11, z: 5 },
        ]
    );
    for child in &children {
        assert_eq!(child.parent(), Some(tile));
        assert!(tile.contains(child));
    }
    assert_eq!(TileCoord { x: 0, y: 0, z: 0 }.parent(), None);
}

#[test]
fn test_contains() {
    let tile = TileCoord { x: 1, y: 0, z: 1 };
    assert!(tile.contains(&tile));
    assert!(tile.contains(&TileCoord { x: 3, y: 1, z: 2 }));
    assert!(!tile.contains(&TileCoord { x: 1, y: 1, z: 2 }));
    assert!(!tile.contains(&TileCoord { x: 0, y: 0, z: 0 }));
}

#[test]
fn test_bounds() {
    let bbox = TileCoord { x: 486, y: 332, z: 10 }.bounds();
    assert_eq!(bbox.minx, -9.140625);
    assert_eq!(bbox.maxx, -8.7890625);
    assert_eq!(bbox.maxy, 53.33087298301705);
    assert!((bbox.miny - 53.120405283106564).abs() < 1e-12);

    let world = TileCoord { x: 0, y: 0, z: 0 }.bounds();
    assert_eq!(world.minx, -180.0);
    assert_eq!(world.maxx, 180.0);
    assert!((world.maxy - 85.0511287798066).abs() < 1e-12);
    assert!((world.miny + 85.0511287798066).abs() < 1e-12);
}

#[test]
fn test_from_lonlat() {
    assert_eq!(
        TileCoord::from_lonlat(-9.0, 53.2, 10),
        TileCoord { x: 486, y: 332, z: 10 }
    );
    assert_eq!(
        TileCoord::from_lonlat(8.5, 47.37, 0),
        TileCoord { x: 0, y: 0, z: 0 }
    );
    // clamped to border tiles
    assert_eq!(
        TileCoord::from_lonlat(180.0, -90.0, 2),
        TileCoord { x: 3, y: 3, z: 2 }
    );
    assert_eq!(
        TileCoord::from_lonlat(-180.0, 90.0, 2),
        TileCoord { x: 0, y: 0, z: 2 }
    );
}

#[test]
fn test_display() {
    assert_eq!(
        TileCoord {
            x: 236602,
            y: 160844,
            z: 18
        }
        .to_string(),
        "18/236602/160844"
    );
}
