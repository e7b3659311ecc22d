//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use tile_grid::{leaf_count, Grid, MAX_CELL_ID_ZOOM};

/// Maximal difference between grid zoom and lowest served zoom
pub const MAX_ZOOM_SPAN: u8 = 10;

/// Validated grid parameters
#[derive(Clone, PartialEq, Debug)]
pub struct GridParams {
    pub grid_zoom: u8,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub layer_name: String,
    pub tile_size: u32,
    pub buffer_size: u32,
}

impl GridParams {
    /// True if tiles at `zoom` are served
    pub fn serves_zoom(&self, zoom: u8) -> bool {
        zoom >= self.minzoom && zoom <= self.maxzoom
    }
    /// Number of grid cells in a tile at `zoom`
    pub fn cells_per_tile(&self, zoom: u8) -> u64 {
        leaf_count(zoom, self.grid_zoom)
    }
}

impl Default for GridParams {
    fn default() -> Self {
        let cfg = GridCfg::default();
        GridParams {
            grid_zoom: cfg.grid_zoom,
            minzoom: cfg.minzoom,
            maxzoom: cfg.maxzoom,
            layer_name: cfg.layer_name,
            tile_size: cfg.tile_size,
            buffer_size: cfg.buffer_size,
        }
    }
}

impl<'a> Config<'a, GridCfg> for GridParams {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        if grid_cfg.minzoom > grid_cfg.maxzoom {
            return Err(format!(
                "minzoom {} greater than maxzoom {}",
                grid_cfg.minzoom, grid_cfg.maxzoom
            ));
        }
        if grid_cfg.maxzoom >= grid_cfg.grid_zoom {
            return Err(format!(
                "maxzoom {} must be lower than grid_zoom {}",
                grid_cfg.maxzoom, grid_cfg.grid_zoom
            ));
        }
        if grid_cfg.grid_zoom > MAX_CELL_ID_ZOOM {
            return Err(format!(
                "grid_zoom {} exceeds maximal grid zoom {}",
                grid_cfg.grid_zoom, MAX_CELL_ID_ZOOM
            ));
        }
        if grid_cfg.maxzoom > Grid::MAX_LEVEL {
            return Err(format!(
                "maxzoom {} exceeds maximal zoom level {}",
                grid_cfg.maxzoom,
                Grid::MAX_LEVEL
            ));
        }
        if grid_cfg.grid_zoom - grid_cfg.minzoom > MAX_ZOOM_SPAN {
            return Err(format!(
                "grid_zoom {} is more than {} levels above minzoom {}",
                grid_cfg.grid_zoom, MAX_ZOOM_SPAN, grid_cfg.minzoom
            ));
        }
        if grid_cfg.layer_name.is_empty()
            || grid_cfg.layer_name.contains(|c| c == '/' || c == '.')
        {
            return Err(format!("Invalid layer name '{}'", grid_cfg.layer_name));
        }
        if grid_cfg.tile_size == 0 {
            return Err("tile_size must be positive".to_string());
        }
        Ok(GridParams {
            grid_zoom: grid_cfg.grid_zoom,
            minzoom: grid_cfg.minzoom,
            maxzoom: grid_cfg.maxzoom,
            layer_name: grid_cfg.layer_name.clone(),
            tile_size: grid_cfg.tile_size,
            buffer_size: grid_cfg.buffer_size,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Zoom level of the grid cells
grid_zoom = 21
# Served zoom levels (at most 10 levels below grid_zoom)
minzoom = 14
maxzoom = 14
layer_name = "grid"
#tile_size = 4096
#buffer_size = 64
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[grid]
grid_zoom = {}
minzoom = {}
maxzoom = {}
layer_name = "{}"
tile_size = {}
buffer_size = {}
"#,
            self.grid_zoom,
            self.minzoom,
            self.maxzoom,
            self.layer_name,
            self.tile_size,
            self.buffer_size
        )
    }
}
