//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, read_config, ApplicationCfg, GridCfg, DEFAULT_CONFIG};

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.grid.grid_zoom, 21);
    assert_eq!(config.grid.minzoom, 13);
    assert_eq!(config.grid.maxzoom, 15);
    assert_eq!(config.grid.layer_name, "cells");
    // defaults for missing entries
    assert_eq!(config.grid.tile_size, 4096);
    assert_eq!(config.grid.buffer_size, 32);
    assert_eq!(config.webserver.bind, Some("0.0.0.0".to_string()));
    assert_eq!(config.webserver.port, Some(8080));
    assert_eq!(config.webserver.threads, Some(2));
    assert_eq!(config.webserver.cache_control_max_age, Some(43200));
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg =
        parse_config(DEFAULT_CONFIG.to_string(), "").expect("default config");
    assert_eq!(config.grid, GridCfg::default());
    assert_eq!(config.webserver.port, Some(6767));
    assert_eq!(config.webserver.threads, None);

    // [grid] section is optional
    let toml = r#"
        [webserver]
        port = 6767
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.grid.layer_name, "grid");
    assert_eq!(config.grid.grid_zoom, 21);
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    let err = config.err().unwrap();
    assert!(err.starts_with("src/core/mod.rs - "), "{}", err);

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!(
        Some("Config file 'wrongfile' not found".to_string()),
        config.err()
    );

    let toml = r#"
        [grid]
        minzoom = "fourteen"

        [webserver]
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().contains("minzoom"));
}

#[test]
fn test_envvar_expansion() {
    std::env::set_var("GRID_TEST_LAYER_NAME", "envgrid");
    let toml = r#"
        [grid]
        layer_name = "{{env.GRID_TEST_LAYER_NAME}}"

        [webserver]
        port = {{env.GRID_TEST_PORT | default(value=6868)}}
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.grid.layer_name, "envgrid");
    assert_eq!(config.webserver.port, Some(6868));

    let toml = r#"
        [grid]
        layer_name = "${GRID_TEST_LAYER_NAME}"

        [webserver]
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`",
        config.err().unwrap()
    );

    let toml = r#"
        [grid]
        layer_name = "${grid_layer_2}"

        [webserver]
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.is_err());
}
