//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use grid_webserver as webserver;
use log::Record;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process;
use tile_grid::{cell_zoom, decode_cell_id};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        writeln!(
            buf,
            "{} {} {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,actix_server=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn tile(args: &ArgMatches<'_>) {
    let config = webserver::config_from_args(args);
    let service = webserver::service_from_args(&config);
    let z = args.value_of("z").unwrap_or_default();
    let x = args.value_of("x").unwrap_or_default();
    let y = args.value_of("y").unwrap_or_default();
    let format = args.value_of("format").unwrap_or("pbf");
    match service.tile_request(z, x, y, format) {
        Ok(tile) => {
            let written = match args.value_of("out") {
                Some(fname) => File::create(fname).and_then(|mut f| f.write_all(&tile.body)),
                None => io::stdout().write_all(&tile.body),
            };
            if let Err(e) = written {
                eprintln!("Error writing tile - {}", e);
                process::exit(1)
            }
            info!("{}/{}/{}.{}: {} bytes", z, x, y, format, tile.body.len());
        }
        Err(e) => {
            eprintln!("{} {}", e.status_code(), e);
            process::exit(match e.status_code() {
                400 => 2,
                404 => 3,
                _ => 1,
            })
        }
    }
}

fn drilldown(args: &ArgMatches<'_>) {
    let config = webserver::config_from_args(args);
    let service = webserver::service_from_args(&config);
    let numbers: Result<Vec<f64>, _> = args
        .value_of("points")
        .unwrap_or_default()
        .split(",")
        .map(|v| v.trim().parse::<f64>())
        .collect();
    let numbers = numbers.unwrap_or_else(|_| {
        eprintln!("Error parsing 'points' as list of float values");
        process::exit(1)
    });
    if numbers.len() % 2 != 0 {
        eprintln!("Error parsing 'points' as pairs of float values");
        process::exit(1)
    }
    let points: Vec<(f64, f64)> = numbers.chunks(2).map(|pt| (pt[0], pt[1])).collect();
    let progress = args.value_of("progress").map_or(true, |s| {
        s.parse::<bool>().unwrap_or_else(|_| {
            eprintln!("Error parsing 'progress' as boolean value");
            process::exit(1)
        })
    });
    let stats = service.drilldown(&points, progress);
    print!("{}", stats.as_csv());
}

fn cellid(args: &ArgMatches<'_>) {
    let id = args.value_of("id").unwrap_or_default();
    let tile = id.parse::<u64>().ok().and_then(decode_cell_id);
    match tile {
        Some(tile) => {
            let bbox = tile.bounds();
            println!(
                "{} (zoom {}) bounds: {}, {}, {}, {}",
                tile,
                tile.z,
                bbox.minx,
                bbox.miny,
                bbox.maxx,
                bbox.maxy
            );
        }
        None => {
            let zoom = id.parse::<u64>().map(cell_zoom).ok();
            eprintln!("Invalid cell id '{}' (zoom {:?})", id, zoom);
            process::exit(1)
        }
    }
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("grid_tiles")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("vector tile server publishing a synthetic quadtree grid")
        .subcommand(SubCommand::with_name("serve")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --bind=[IPADDRESS] 'Bind web server to this address (0.0.0.0 for all)'
                                              --port=[PORT] 'Bind web server to this port'")
                        .about("Start web server and serve MVT vector tiles"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("tile")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --z=<LEVEL> 'Zoom level'
                                              --x=<COLUMN> 'Tile column'
                                              --y=<ROW> 'Tile row'
                                              --format=[pbf|json] 'Tile format (Default: pbf)'
                                              -o, --out=[FILE] 'Write tile to FILE instead of stdout'")
                        .about("Create a single tile"))
        .subcommand(SubCommand::with_name("drilldown")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --points=<lon1,lat1,lon2,lat2,..> 'Drilldown points'
                                              --progress=[true|false] 'Show progress bar'")
                        .about("Tile statistics"))
        .subcommand(SubCommand::with_name("cellid")
                        .args_from_usage("--id=<ID> 'Cell id'")
                        .about("Decode grid cell id"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("serve", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(e) = webserver::webserver(sub_m.clone()) {
                    eprintln!("Can not start server on given IP/Port - {}", e);
                    process::exit(1)
                }
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", webserver::gen_config(sub_m));
            }
            ("tile", Some(sub_m)) => {
                init_logger(sub_m);
                tile(sub_m);
            }
            ("drilldown", Some(sub_m)) => {
                init_logger(sub_m);
                drilldown(sub_m);
            }
            ("cellid", Some(sub_m)) => {
                cellid(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
