//! A library for slippy map tile calculations
//!
//! ## Tile coordinates
//!
//! ```rust
//! use tile_grid::TileCoord;
//!
//! let tile = TileCoord::new(486, 332, 10).unwrap();
//! assert_eq!(tile.to_string(), "10/486/332");
//! assert!(TileCoord::new(1024, 0, 10).is_none());
//! ```
//!
//! ## Quadtree subdivision
//!
//! ```rust
//! use tile_grid::{subdivide, Subdivision, TileCoord};
//!
//! let tile = TileCoord::new(0, 0, 1).unwrap();
//! let cells = subdivide(tile, 3);
//! assert_eq!(cells.len(), 16);
//! for cell in Subdivision::new(tile, 3) {
//!     println!("Cell {}", cell);
//! }
//! ```
//!
//! ## Cell identifiers
//!
//! ```rust
//! use tile_grid::{cell_id, cell_zoom, decode_cell_id, TileCoord};
//!
//! let tile = TileCoord::new(3, 1, 2).unwrap();
//! let id = cell_id(&tile);
//! assert_eq!(id, 1402);
//! assert_eq!(cell_zoom(id), 2);
//! assert_eq!(decode_cell_id(id), Some(tile));
//! ```
//!
//! ## Web Mercator grid
//!
//! ```rust
//! use tile_grid::{Grid, TileCoord};
//!
//! let grid = Grid::web_mercator();
//! let extent = grid.tile_extent_xyz(&TileCoord::new(0, 0, 0).unwrap());
//! assert_eq!(extent, grid.extent);
//! ```

mod cell_id;
mod grid;
#[cfg(test)]
mod grid_test;
mod quadtree;
mod tile;

pub use cell_id::{cell_id, cell_zoom, decode_cell_id, MAX_CELL_ID_ZOOM};
pub use grid::{extent_wgs84_to_merc, lonlat_to_merc, Extent, Grid};
pub use quadtree::{leaf_count, subdivide, Subdivision};
pub use tile::{TileCoord, MAX_ZOOM};
