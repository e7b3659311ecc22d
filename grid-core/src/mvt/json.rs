//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! JSON tile encoding
//!
//! Shaped like a geojson-vt tile with an added `extent`, without the
//! `numPoints`, `numSimplified` and `transformed` counters.

use crate::mvt::tile::{GridFeature, GridTile};
use std::collections::BTreeMap;

/// geojson-vt feature type of polygons
pub const POLYGON_TYPE: u8 = 3;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct JsonTile {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub extent: u32,
    #[serde(rename = "numFeatures")]
    pub num_features: usize,
    pub features: Vec<JsonFeature>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct JsonFeature {
    pub id: u64,
    #[serde(rename = "type")]
    pub geom_type: u8,
    pub tags: BTreeMap<String, serde_json::Value>,
    /// Rings of screen coordinates
    pub geometry: Vec<Vec<[i32; 2]>>,
}

impl From<&GridFeature> for JsonFeature {
    fn from(feature: &GridFeature) -> JsonFeature {
        JsonFeature {
            id: feature.id,
            geom_type: POLYGON_TYPE,
            tags: BTreeMap::new(),
            geometry: feature
                .geometry
                .rings
                .iter()
                .map(|ring| ring.points.iter().map(|p| [p.x, p.y]).collect())
                .collect(),
        }
    }
}

impl From<&GridTile> for JsonTile {
    fn from(tile: &GridTile) -> JsonTile {
        JsonTile {
            z: tile.tile.z,
            x: tile.tile.x,
            y: tile.tile.y,
            extent: tile.extent,
            num_features: tile.features.len(),
            features: tile.features.iter().map(JsonFeature::from).collect(),
        }
    }
}

impl JsonTile {
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
    pub fn from_slice(json: &[u8]) -> serde_json::Result<JsonTile> {
        serde_json::from_slice(json)
    }
}
