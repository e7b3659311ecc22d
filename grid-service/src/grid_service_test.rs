//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid_service::GridService;
use crate::request::{TileFormat, TileRequest};
use crate::TileError;
use grid_core::core::stats::{Measure, StatKey};
use grid_core::core::config::{parse_config, ApplicationCfg, DEFAULT_CONFIG};
use grid_core::core::{Config, GridParams};
use grid_core::mvt::json::JsonTile;
use grid_core::mvt::tile::GridTile;
use std::collections::BTreeMap;
use tile_grid::{decode_cell_id, TileCoord};

fn service() -> GridService {
    GridService::new(GridParams::default())
}

fn zigzag(v: u32) -> i32 {
    ((v >> 1) as i32) ^ (-((v & 1) as i32))
}

/// Decode MVT polygon commands into closed rings of absolute coordinates
fn decode_rings(geometry: &[u32]) -> Vec<Vec<[i32; 2]>> {
    let mut rings = Vec::new();
    let mut ring: Vec<[i32; 2]> = Vec::new();
    let (mut x, mut y) = (0, 0);
    let mut i = 0;
    while i < geometry.len() {
        let (id, count) = (geometry[i] & 0x7, geometry[i] >> 3);
        i += 1;
        match id {
            1 | 2 => {
                for _ in 0..count {
                    x += zigzag(geometry[i]);
                    y += zigzag(geometry[i + 1]);
                    i += 2;
                    ring.push([x, y]);
                }
            }
            7 => {
                ring.push(ring[0]);
                rings.push(ring);
                ring = Vec::new();
            }
            _ => panic!("unexpected command {}", id),
        }
    }
    rings
}

#[test]
fn test_from_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    let service = GridService::from_config(&config).unwrap();
    assert_eq!(service.params, GridParams::default());
    assert_eq!(service.grid.maxzoom(), 22);

    let toml = r#"
        [grid]
        minzoom = 15

        [webserver]
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        GridService::from_config(&config).err(),
        Some("minzoom 15 greater than maxzoom 14".to_string())
    );

    let toml = r#"
        [grid]
        minzoom = 5

        [webserver]
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        GridService::from_config(&config).err(),
        Some("grid_zoom 21 is more than 10 levels above minzoom 5".to_string())
    );
}

#[test]
fn test_json_tile_at_origin() {
    let response = service().tile_request("14", "0", "0", "json").unwrap();
    assert_eq!(response.content_type, "application/json");
    let json_tile = JsonTile::from_slice(&response.body).unwrap();
    assert_eq!((json_tile.z, json_tile.x, json_tile.y), (14, 0, 0));
    assert_eq!(json_tile.num_features, 16384);
    assert_eq!(json_tile.features.len(), 16384);
    let tile = TileCoord { x: 0, y: 0, z: 14 };
    for feature in &json_tile.features {
        let cell = decode_cell_id(feature.id).expect("valid cell id");
        assert_eq!(cell.z, 21);
        assert!(tile.contains(&cell));
    }
}

#[test]
fn test_below_minzoom() {
    let service = service();
    for &(x, y) in &[("0", "0"), ("511", "340"), ("1023", "1023")] {
        assert_eq!(
            service.tile_request("10", x, y, "json").err().map(|e| e.status_code()),
            Some(404)
        );
    }
    // no data below minzoom, even for requests bypassing the zoom policy
    let request = TileRequest {
        tile: TileCoord { x: 0, y: 0, z: 10 },
        format: TileFormat::Json,
    };
    assert!(matches!(
        service.tile_response(&request),
        Err(TileError::NotFound(_))
    ));
}

#[test]
fn test_pbf_json_equivalence() {
    let service = service();
    let pbf = service
        .tile_request("14", "8745", "5592", "pbf")
        .unwrap();
    assert_eq!(pbf.content_type, "application/vnd.mapbox-vector-tile");
    let json = service
        .tile_request("14", "8745", "5592", "json")
        .unwrap();

    let mvt_tile = GridTile::read_from(&mut &pbf.body[..]).unwrap();
    assert_eq!(mvt_tile.get_layers().len(), 1);
    let layer = &mvt_tile.get_layers()[0];
    assert_eq!(layer.get_name(), "grid");
    assert_eq!(layer.get_extent(), 4096);
    let pbf_features: BTreeMap<u64, Vec<Vec<[i32; 2]>>> = layer
        .get_features()
        .iter()
        .map(|f| (f.get_id(), decode_rings(f.get_geometry())))
        .collect();

    let json_tile = JsonTile::from_slice(&json.body).unwrap();
    assert_eq!(json_tile.extent, layer.get_extent());
    let json_features: BTreeMap<u64, Vec<Vec<[i32; 2]>>> = json_tile
        .features
        .into_iter()
        .map(|f| (f.id, f.geometry))
        .collect();
    assert_eq!(pbf_features.len(), 16384);
    assert_eq!(pbf_features, json_features);
}

#[test]
fn test_bad_format() {
    let err = service().tile_request("14", "0", "0", "xml").err();
    assert_eq!(
        err,
        Some(TileError::BadRequest("unsupported format 'xml'".to_string()))
    );
    assert_eq!(err.map(|e| e.status_code()), Some(400));
}

#[test]
fn test_idempotence() {
    let service = service();
    for format in &["pbf", "json"] {
        let first = service.tile_request("14", "236", "160", format).unwrap();
        let second = service.tile_request("14", "236", "160", format).unwrap();
        assert_eq!(first, second);
    }
    for &(z, format) in &[("10", "json"), ("14", "xml"), ("x", "pbf")] {
        assert_eq!(
            service.tile_request(z, "0", "0", format),
            service.tile_request(z, "0", "0", format)
        );
    }
}

#[test]
fn test_custom_grid() {
    let params = GridParams {
        grid_zoom: 4,
        minzoom: 0,
        maxzoom: 2,
        layer_name: "coarse".to_string(),
        tile_size: 256,
        buffer_size: 0,
    };
    let service = GridService::new(params);
    let response = service.tile_request("0", "0", "0", "json").unwrap();
    let json_tile = JsonTile::from_slice(&response.body).unwrap();
    assert_eq!(json_tile.num_features, 256);
    assert_eq!(json_tile.extent, 256);
    for feature in &json_tile.features {
        let ring = &feature.geometry[0];
        assert_eq!(ring.len(), 5);
        // 16 columns of 16 units
        assert_eq!(ring[2][0] - ring[0][0], 16);
    }
    assert_eq!(
        service.tile_request("3", "0", "0", "json").err().map(|e| e.status_code()),
        Some(404)
    );
}

#[test]
fn test_drilldown() {
    let params = GridParams {
        grid_zoom: 18,
        minzoom: 12,
        maxzoom: 14,
        ..Default::default()
    };
    let service = GridService::new(params);
    let stats = service.drilldown(&[(8.5, 47.37), (-73.98, 40.75)], false);
    let key = |measure, zoom| StatKey::new(measure, "grid", zoom);
    assert_eq!(stats.results(&key(Measure::FeatureCount, 12)).len, 2);
    assert_eq!(stats.results(&key(Measure::FeatureCount, 12)).max, 4096);
    assert_eq!(stats.results(&key(Measure::FeatureCount, 14)).mean, 256.0);
    assert!(stats.results(&key(Measure::TileBytes, 13)).min > 0);
    assert_eq!(stats.results(&key(Measure::TileMs, 14)).len, 2);
    assert_eq!(stats.keys().count(), 9);
    let csv = stats.as_csv();
    assert!(csv.starts_with("measure,layer,zoom,count,min,max,mean,stddev\n"));
    assert!(csv.contains("\nfeature_count,grid,14,2,256,256,256.0,0.0\n"));
}

#[test]
fn test_tilejson() {
    let json = service().get_tilejson("http://127.0.0.1:6767").unwrap();
    assert_eq!(json["tilejson"], "3.0.0");
    assert_eq!(json["id"], "grid");
    assert_eq!(
        json["tiles"][0],
        "http://127.0.0.1:6767/grid/{z}/{x}/{y}.pbf"
    );
    assert_eq!(json["minzoom"], 14);
    assert_eq!(json["maxzoom"], 14);
    assert_eq!(json["bounds"][0], -180.0);
    assert_eq!(json["vector_layers"][0]["id"], "grid");
    assert_eq!(json["vector_layers"][0]["maxzoom"], 14);
}
