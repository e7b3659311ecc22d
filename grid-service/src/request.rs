//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile request parsing

use crate::error::TileError;
use grid_core::core::GridParams;
use std::fmt;
use std::str::FromStr;
use tile_grid::TileCoord;

/// Output encoding of a tile
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileFormat {
    /// Mapbox Vector Tile
    Pbf,
    /// geojson-vt tile structure
    Json,
}

impl TileFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            TileFormat::Pbf => "application/vnd.mapbox-vector-tile",
            TileFormat::Json => "application/json",
        }
    }
    pub fn extension(&self) -> &'static str {
        match self {
            TileFormat::Pbf => "pbf",
            TileFormat::Json => "json",
        }
    }
}

impl FromStr for TileFormat {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pbf" => Ok(TileFormat::Pbf),
            "json" => Ok(TileFormat::Json),
            _ => Err(TileError::BadRequest(format!("unsupported format '{}'", s))),
        }
    }
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Validated tile request
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TileRequest {
    pub tile: TileCoord,
    pub format: TileFormat,
}

fn parse_number(name: &str, value: &str) -> Result<u64, TileError> {
    value
        .parse::<u64>()
        .map_err(|_| TileError::BadRequest(format!("invalid {} '{}'", name, value)))
}

impl TileRequest {
    /// Parse request path parameters.
    ///
    /// Checks are applied in this order: numeric parameters (bad request),
    /// served zoom levels and tile range (not found), format (bad request).
    pub fn parse(
        z: &str,
        x: &str,
        y: &str,
        format: &str,
        params: &GridParams,
    ) -> Result<TileRequest, TileError> {
        let zoom = parse_number("zoom level", z)?;
        let xtile = parse_number("column", x)?;
        let ytile = parse_number("row", y)?;
        if zoom < params.minzoom as u64 || zoom > params.maxzoom as u64 {
            return Err(TileError::NotFound(format!(
                "zoom level {} not in {}..={}",
                zoom, params.minzoom, params.maxzoom
            )));
        }
        let tile = if xtile <= u32::MAX as u64 && ytile <= u32::MAX as u64 {
            TileCoord::new(xtile as u32, ytile as u32, zoom as u8)
        } else {
            None
        };
        let tile = tile.ok_or_else(|| {
            TileError::NotFound(format!("tile {}/{}/{} out of range", zoom, xtile, ytile))
        })?;
        let format = format.parse::<TileFormat>()?;
        Ok(TileRequest { tile, format })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!("pbf".parse::<TileFormat>(), Ok(TileFormat::Pbf));
        assert_eq!("json".parse::<TileFormat>(), Ok(TileFormat::Json));
        assert!("png".parse::<TileFormat>().is_err());
        assert!("PBF".parse::<TileFormat>().is_err());
        assert_eq!(
            TileFormat::Pbf.content_type(),
            "application/vnd.mapbox-vector-tile"
        );
        assert_eq!(TileFormat::Json.content_type(), "application/json");
        assert_eq!(TileFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_parse() {
        let params = GridParams::default();
        assert_eq!(
            TileRequest::parse("14", "8745", "5592", "json", &params),
            Ok(TileRequest {
                tile: TileCoord {
                    x: 8745,
                    y: 5592,
                    z: 14
                },
                format: TileFormat::Json
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        let params = GridParams::default();
        let status = |z, x, y, format| {
            TileRequest::parse(z, x, y, format, &params)
                .err()
                .map(|e| e.status_code())
        };
        assert_eq!(status("abc", "0", "0", "pbf"), Some(400));
        assert_eq!(status("14", "-1", "0", "pbf"), Some(400));
        assert_eq!(status("14", "0", "1.5", "pbf"), Some(400));
        assert_eq!(status("14", "0", "", "pbf"), Some(400));
        // zoom policy before format
        assert_eq!(status("13", "0", "0", "png"), Some(404));
        assert_eq!(status("15", "0", "0", "pbf"), Some(404));
        assert_eq!(status("99999999999", "0", "0", "pbf"), Some(404));
        assert_eq!(status("14", "16384", "0", "pbf"), Some(404));
        assert_eq!(status("14", "0", "99999999999", "pbf"), Some(404));
        assert_eq!(status("14", "16383", "16383", "png"), Some(400));
        assert_eq!(status("14", "16383", "16383", "pbf"), None);
    }
}
