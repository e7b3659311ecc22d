//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::ArgMatches;
use grid_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use grid_core::core::{parse_config, read_config, Config};
use grid_service::GridService;
use std::env;
use std::process;
use std::str::FromStr;

/// Configuration from config file or defaults, with `bind` and `port` overrides.
///
/// The port is taken from `--port`, the `PORT` environment variable or the configuration.
pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            println!("Error reading default configuration - {} ", err);
            process::exit(1)
        })
    };
    if let Some(bind) = args.value_of("bind") {
        config.webserver.bind = Some(bind.to_string());
    }
    let port = args
        .value_of("port")
        .map(|p| p.to_string())
        .or_else(|| env::var("PORT").ok());
    if let Some(port) = port {
        let port = u16::from_str(&port).unwrap_or_else(|_| {
            println!("Invalid port number '{}'", port);
            process::exit(1)
        });
        config.webserver.port = Some(port);
    }
    config
}

pub fn service_from_args(config: &ApplicationCfg) -> GridService {
    GridService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

pub fn gen_config(args: &ArgMatches) -> String {
    let toml = r#"
[webserver]
# Bind address. Use 0.0.0.0 to listen on all adresses.
bind = "127.0.0.1"
port = 6767
#threads = 4
#cache_control_max_age = 43200
"#;
    let mut config = String::from("# grid-tiles configuration\n");
    if args.value_of("config").is_some() {
        let service = service_from_args(&config_from_args(args));
        config.push_str(&service.gen_runtime_config());
    } else {
        config.push_str(&GridService::gen_config());
    }
    config.push_str(toml);
    config
}
