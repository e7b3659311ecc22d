//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid_service::GridService;
use tile_grid::TileCoord;

type JsonResult = Result<serde_json::Value, serde_json::error::Error>;

impl GridService {
    fn get_tilejson_metadata(&self) -> serde_json::Value {
        let name = &self.params.layer_name;
        let ext = TileCoord { x: 0, y: 0, z: 0 }.bounds();
        json!({
            "id": name,
            "name": name,
            "description": format!("Grid cells at zoom level {}", self.params.grid_zoom),
            "format": "pbf",
            "version": "2.0.0",
            "scheme": "xyz",
            "bounds": [ext.minx,
                       ext.miny,
                       ext.maxx,
                       ext.maxy],
            "minzoom": self.params.minzoom,
            "maxzoom": self.params.maxzoom,
            "center": [0.0, 0.0, self.params.minzoom],
            "basename": name
        })
    }
    // MVT layers in TileJSON manifest
    // https://github.com/mapbox/tilejson-spec/tree/3.0-vector_layers/3.0#315-vector_layers
    fn get_tilejson_vector_layers(&self) -> serde_json::Value {
        json!([{
            "id": self.params.layer_name,
            "description": format!("Grid cells at zoom level {}", self.params.grid_zoom),
            "minzoom": self.params.minzoom,
            "maxzoom": self.params.maxzoom,
            "fields": {}
        }])
    }
    /// TileJSON metadata (https://github.com/mapbox/tilejson-spec)
    pub fn get_tilejson(&self, baseurl: &str) -> JsonResult {
        let mut metadata = self.get_tilejson_metadata();
        let url = json!([format!(
            "{}/{}/{{z}}/{{x}}/{{y}}.pbf",
            baseurl, self.params.layer_name
        )]);
        if let Some(obj) = metadata.as_object_mut() {
            obj.insert("tilejson".to_string(), json!("3.0.0"));
            obj.insert("tiles".to_string(), url);
            obj.insert("vector_layers".to_string(), self.get_tilejson_vector_layers());
        }
        Ok(metadata)
    }
}
