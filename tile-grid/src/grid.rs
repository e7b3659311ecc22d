//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Web Mercator tile grid

use crate::tile::TileCoord;
use std::f64::consts;

/// Earth radius used by Spherical Mercator (EPSG:3857)
const EARTH_RADIUS: f64 = 6378137.0;

/// Pixel width of a 256px tile at zoom level 0, rounded to 10 digits
/// to keep the grid extent symmetric.
const PIXEL_WIDTH_Z0: f64 = 156543.0339280410;

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

/// Web Mercator tile grid (Google maps compatible) in XYZ adressing scheme
#[derive(Clone, Debug)]
pub struct Grid {
    /// The width and height of an individual tile, in pixels.
    pub tile_size: u16,
    /// The extent covered by the grid, in meters.
    pub extent: Extent,
    /// Spatial reference system (EPSG code).
    pub srid: i32,
    /// Meters per pixel for each zoom level, starting at zoom level 0.
    resolutions: Vec<f64>,
}

impl Grid {
    /// Highest zoom level with a resolution entry
    pub const MAX_LEVEL: u8 = 22;

    pub fn web_mercator() -> Grid {
        let resolutions = (0..=Self::MAX_LEVEL)
            .map(|z| PIXEL_WIDTH_Z0 / (z as f64).exp2())
            .collect();
        let half = PIXEL_WIDTH_Z0 * 256.0 / 2.0;
        Grid {
            tile_size: 256,
            extent: Extent {
                minx: -half,
                miny: -half,
                maxx: half,
                maxy: half,
            },
            srid: 3857,
            resolutions,
        }
    }
    pub fn nlevels(&self) -> u8 {
        self.resolutions.len() as u8
    }
    pub fn maxzoom(&self) -> u8 {
        self.nlevels() - 1
    }
    /// Pixel width for 256x256 tile
    pub fn pixel_width(&self, zoom: u8) -> f64 {
        self.resolutions[zoom as usize]
    }
    /// Extent of a tile in grid units.
    ///
    /// Panics for zoom levels above [`Grid::maxzoom`].
    pub fn tile_extent_xyz(&self, tile: &TileCoord) -> Extent {
        let size = self.pixel_width(tile.z) * self.tile_size as f64;
        let (x, y) = (tile.x as f64, tile.y as f64);
        Extent {
            minx: self.extent.minx + size * x,
            miny: self.extent.maxy - size * (y + 1.0),
            maxx: self.extent.minx + size * (x + 1.0),
            maxy: self.extent.maxy - size * y,
        }
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Projected extent
pub fn extent_wgs84_to_merc(extent: &Extent) -> Extent {
    let (minx, miny) = lonlat_to_merc(extent.minx, extent.miny);
    let (maxx, maxy) = lonlat_to_merc(extent.maxx, extent.maxy);
    Extent {
        minx,
        miny,
        maxx,
        maxy,
    }
}
