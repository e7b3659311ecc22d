//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::clip::ClipBox;
use crate::core::feature::{Feature, FeatureCollection};
use crate::core::geom;
use crate::core::screen;
use crate::core::GridParams;
use crate::mvt::geom_encoder::EncodableGeom;
use crate::mvt::vector_tile;
use protobuf::error::ProtobufError;
use protobuf::{CodedOutputStream, Message};
use std::io::{BufReader, Read, Write};
use tile_grid::{lonlat_to_merc, Extent, Grid, TileCoord};

/// Transformation from geographic to clipped screen coordinates of a tile
pub struct ScreenTransform {
    /// Tile extent in grid units
    extent: Extent,
    tile_size: u32,
    clip: ClipBox,
}

impl ScreenTransform {
    pub fn new(extent: Extent, tile_size: u32, buffer_size: u32) -> ScreenTransform {
        ScreenTransform {
            extent,
            tile_size,
            clip: ClipBox::new(tile_size, buffer_size),
        }
    }
    /// Screen position with origin top left
    fn project(&self, point: &geom::Point) -> (f64, f64) {
        let (x, y) = lonlat_to_merc(point.x, point.y);
        let size = self.tile_size as f64;
        (
            (x - self.extent.minx) / self.extent.width() * size,
            (self.extent.maxy - y) / self.extent.height() * size,
        )
    }
}

pub trait ScreenGeom<T>
where
    Self: Sized,
{
    /// Convert geometry into clipped screen coordinates.
    /// Returns `None` if nothing remains after clipping.
    fn from_geom(transform: &ScreenTransform, geom: &T) -> Option<Self>;
}

impl ScreenGeom<geom::LineString> for screen::LineString {
    fn from_geom(transform: &ScreenTransform, ring: &geom::LineString) -> Option<Self> {
        let mut coords: Vec<(f64, f64)> =
            ring.points.iter().map(|p| transform.project(p)).collect();
        if ring.is_closed() {
            coords.pop();
        }
        let mut points: Vec<screen::Point> = transform
            .clip
            .clip_ring(&coords)
            .iter()
            .map(|&(x, y)| screen::Point {
                x: x.round() as i32,
                y: y.round() as i32,
            })
            .collect();
        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return None;
        }
        points.push(points[0]);
        let ring = screen::LineString { points };
        if ring.signed_area2() == 0 {
            return None;
        }
        Some(ring)
    }
}

impl ScreenGeom<geom::Polygon> for screen::Polygon {
    fn from_geom(transform: &ScreenTransform, polygon: &geom::Polygon) -> Option<Self> {
        let mut rings = polygon.rings.iter();
        let exterior = screen::LineString::from_geom(transform, rings.next()?)?;
        let mut screen_geom = screen::Polygon {
            rings: vec![exterior],
        };
        screen_geom
            .rings
            .extend(rings.filter_map(|ring| screen::LineString::from_geom(transform, ring)));
        screen_geom.rewind();
        Some(screen_geom)
    }
}

/// Grid cell in screen coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct GridFeature {
    pub id: u64,
    pub geometry: screen::Polygon,
}

/// Clipped grid cells of a tile, ready for encoding
#[derive(Clone, PartialEq, Debug)]
pub struct GridTile {
    pub tile: TileCoord,
    /// Tile size in screen units
    pub extent: u32,
    pub features: Vec<GridFeature>,
}

/// Slices grid cells to a requested tile
pub struct TileResponder<'a> {
    grid: &'a Grid,
    tile_size: u32,
    buffer_size: u32,
}

impl<'a> TileResponder<'a> {
    pub fn new(grid: &'a Grid, params: &GridParams) -> TileResponder<'a> {
        TileResponder {
            grid,
            tile_size: params.tile_size,
            buffer_size: params.buffer_size,
        }
    }

    /// Cells of `features` intersecting `tile`, `None` if there are none.
    pub fn tile(&self, tile: &TileCoord, features: &FeatureCollection) -> Option<GridTile> {
        if tile.z > self.grid.maxzoom() {
            warn!("{} exceeds grid zoom levels", tile);
            return None;
        }
        let transform = ScreenTransform::new(
            self.grid.tile_extent_xyz(tile),
            self.tile_size,
            self.buffer_size,
        );
        let features: Vec<GridFeature> = features
            .iter()
            .filter_map(|cell| {
                screen::Polygon::from_geom(&transform, cell.geometry()).map(|geometry| {
                    GridFeature {
                        id: cell.fid().unwrap_or(0),
                        geometry,
                    }
                })
            })
            .collect();
        if features.is_empty() {
            debug!("{}: no data", tile);
            return None;
        }
        Some(GridTile {
            tile: *tile,
            extent: self.tile_size,
            features,
        })
    }
}

impl GridTile {
    pub fn new_layer(&self, layer_name: &str) -> vector_tile::Tile_Layer {
        let mut mvt_layer = vector_tile::Tile_Layer::new();
        mvt_layer.set_version(2);
        mvt_layer.set_name(layer_name.to_string());
        mvt_layer.set_extent(self.extent);
        mvt_layer
    }

    pub fn add_feature(&self, mvt_layer: &mut vector_tile::Tile_Layer, feature: &GridFeature) {
        let enc_geom = feature.geometry.encode();
        if !enc_geom.is_empty() {
            let mut mvt_feature = vector_tile::Tile_Feature::new();
            mvt_feature.set_id(feature.id);
            mvt_feature.set_field_type(vector_tile::Tile_GeomType::POLYGON);
            mvt_feature.set_geometry(enc_geom.into_vec());
            mvt_layer.mut_features().push(mvt_feature);
        }
    }

    /// MVT with a single layer containing all cells
    pub fn to_mvt(&self, layer_name: &str) -> vector_tile::Tile {
        let mut mvt_layer = self.new_layer(layer_name);
        for feature in &self.features {
            self.add_feature(&mut mvt_layer, feature);
        }
        let mut mvt_tile = vector_tile::Tile::new();
        mvt_tile.mut_layers().push(mvt_layer);
        mvt_tile
    }

    pub fn write_to(
        mut out: &mut dyn Write,
        mvt_tile: &vector_tile::Tile,
    ) -> Result<(), ProtobufError> {
        let mut os = CodedOutputStream::new(&mut out);
        mvt_tile.write_to(&mut os)?;
        os.flush()
    }

    pub fn read_from(fin: &mut dyn Read) -> Result<vector_tile::Tile, ProtobufError> {
        let mut reader = BufReader::new(fin);
        vector_tile::Tile::parse_from_reader(&mut reader)
    }

    pub fn tile_bytevec(mvt_tile: &vector_tile::Tile) -> Result<Vec<u8>, ProtobufError> {
        let mut v = Vec::with_capacity(mvt_tile.compute_size() as usize);
        Self::write_to(&mut v, mvt_tile)?;
        Ok(v)
    }
}
