//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::TileError;
use crate::request::{TileFormat, TileRequest};
use grid_core::core::builder::GridGeometryBuilder;
use grid_core::core::stats::{Measure, StatKey, Statistics};
use grid_core::core::{ApplicationCfg, Config, GridParams};
use grid_core::mvt::json::JsonTile;
use grid_core::mvt::tile::{GridTile, TileResponder};
use pbr::ProgressBar;
use std::io::{stderr, Stderr};
use std::time::Instant;
use tile_grid::{Grid, TileCoord};

/// Encoded tile
#[derive(Clone, PartialEq, Debug)]
pub struct TileResponse {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Grid Vector Tile Service
#[derive(Clone)]
pub struct GridService {
    pub grid: Grid,
    pub params: GridParams,
}

impl GridService {
    pub fn new(params: GridParams) -> GridService {
        GridService {
            grid: Grid::web_mercator(),
            params,
        }
    }
    /// Clipped grid cells of a tile, `None` if the tile is empty or not served
    pub fn grid_tile(&self, tile: &TileCoord) -> Option<GridTile> {
        let cells = GridGeometryBuilder::new(&self.params).build(tile);
        TileResponder::new(&self.grid, &self.params).tile(tile, &cells)
    }
    /// Encoded tile for a validated request
    pub fn tile_response(&self, request: &TileRequest) -> Result<TileResponse, TileError> {
        let tile = self
            .grid_tile(&request.tile)
            .ok_or_else(|| TileError::NotFound(format!("no data for tile {}", request.tile)))?;
        let body = match request.format {
            TileFormat::Pbf => {
                let mvt_tile = tile.to_mvt(&self.params.layer_name);
                GridTile::tile_bytevec(&mvt_tile).map_err(|e| {
                    error!("{}: MVT encoding failed: {}", request.tile, e);
                    TileError::Internal(e.to_string())
                })?
            }
            TileFormat::Json => JsonTile::from(&tile).to_vec().map_err(|e| {
                error!("{}: JSON encoding failed: {}", request.tile, e);
                TileError::Internal(e.to_string())
            })?,
        };
        Ok(TileResponse {
            content_type: request.format.content_type(),
            body,
        })
    }
    /// Parse path parameters and answer the tile request
    pub fn tile_request(
        &self,
        z: &str,
        x: &str,
        y: &str,
        format: &str,
    ) -> Result<TileResponse, TileError> {
        let request = TileRequest::parse(z, x, y, format, &self.params)?;
        self.tile_response(&request)
    }
    fn progress_bar_drilldown(&self, zoomlevels: u8, points: u64) -> ProgressBar<Stderr> {
        let numtiles = zoomlevels as u64 * points;
        let mut pb = ProgressBar::on(stderr(), numtiles);
        pb.message("Tile ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Get statistics from drilldown
    ///
    /// Creates the tiles containing the given (lon, lat) points at all served zoom levels.
    pub fn drilldown(&self, points: &[(f64, f64)], progress: bool) -> Statistics {
        let mut stats = Statistics::new();
        let layer = &self.params.layer_name;
        let (minzoom, maxzoom) = (self.params.minzoom, self.params.maxzoom);
        let mut pb = self.progress_bar_drilldown(maxzoom - minzoom + 1, points.len() as u64);
        for &(lon, lat) in points {
            for zoom in minzoom..=maxzoom {
                let tile = TileCoord::from_lonlat(lon, lat, zoom);
                debug!("level {}: {}", zoom, tile);
                let now = Instant::now();
                let grid_tile = self.grid_tile(&tile);
                let bytes = grid_tile
                    .as_ref()
                    .map(|t| t.to_mvt(layer))
                    .map(|mvt_tile| GridTile::tile_bytevec(&mvt_tile));
                let elapsed = now.elapsed();
                stats.add(
                    StatKey::new(Measure::TileMs, layer, zoom),
                    elapsed.as_millis() as u64,
                );
                stats.add(
                    StatKey::new(Measure::FeatureCount, layer, zoom),
                    grid_tile.map_or(0, |t| t.features.len() as u64),
                );
                match bytes {
                    Some(Ok(bytes)) => stats.add(
                        StatKey::new(Measure::TileBytes, layer, zoom),
                        bytes.len() as u64,
                    ),
                    Some(Err(e)) => warn!("{}: MVT encoding failed: {}", tile, e),
                    None => {}
                }
                if progress {
                    pb.inc();
                }
            }
        }
        if progress {
            eprintln!("");
        }
        stats
    }
}

impl<'a> Config<'a, ApplicationCfg> for GridService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let params = GridParams::from_config(&config.grid)?;
        Ok(GridService::new(params))
    }
    fn gen_config() -> String {
        GridParams::gen_config()
    }
    fn gen_runtime_config(&self) -> String {
        self.params.gen_runtime_config()
    }
}
