//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::{fs, io};
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub grid: GridCfg,
    pub webserver: WebserverCfg,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GridCfg {
    /// Zoom level of the grid cells
    #[serde(default = "default_grid_zoom")]
    pub grid_zoom: u8,
    /// Lowest zoom level served
    #[serde(default = "default_minzoom")]
    pub minzoom: u8,
    /// Highest zoom level served
    #[serde(default = "default_maxzoom")]
    pub maxzoom: u8,
    /// Name of the MVT layer and of the tileset in URLs
    #[serde(default = "default_layer_name")]
    pub layer_name: String,
    /// Width and height of the tile in screen units (MVT extent)
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Tile buffer size in screen units
    #[serde(default = "default_buffer_size")]
    pub buffer_size: u32,
}

pub fn default_grid_zoom() -> u8 {
    21
}

pub fn default_minzoom() -> u8 {
    14
}

pub fn default_maxzoom() -> u8 {
    14
}

pub fn default_layer_name() -> String {
    "grid".to_string()
}

pub fn default_tile_size() -> u32 {
    4096
}

pub fn default_buffer_size() -> u32 {
    64
}

impl Default for GridCfg {
    fn default() -> Self {
        GridCfg {
            grid_zoom: default_grid_zoom(),
            minzoom: default_minzoom(),
            maxzoom: default_maxzoom(),
            layer_name: default_layer_name(),
            tile_size: default_tile_size(),
            buffer_size: default_buffer_size(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebserverCfg {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub threads: Option<u8>,
    // Cache-Control headers set by web server
    // https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Cache-Control#Expiration
    pub cache_control_max_age: Option<u32>,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[grid]
grid_zoom = 21
minzoom = 14
maxzoom = 14
layer_name = "grid"

[webserver]
bind = "127.0.0.1"
port = 6767
"#;

/// Load and parse a configuration file.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let config_toml = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => format!("Config file '{}' not found", path),
        _ => format!("Error while reading config '{}': [{}]", path, err),
    })?;
    parse_config(config_toml, path)
}

/// Substitute `{{env.VAR}}` expressions with environment variables.
fn render_env(template: &str, path: &str) -> Result<String, String> {
    let legacy_var = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if legacy_var.is_match(template) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }
    let mut tera = Tera::default();
    tera.add_raw_template(path, template)
        .map_err(|e| format!("Template error: {}", e))?;
    let env: HashMap<String, String> = env::vars().collect();
    let mut context = Context::new();
    context.insert("env", &env);
    tera.render(path, &context).map_err(|e| {
        let cause = e.source().map(|s| s.to_string()).unwrap_or_else(|| e.to_string());
        format!("Template error: {}", cause)
    })
}

/// Parse a configuration template into a config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    let toml = render_env(&config_toml, path)?;
    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
