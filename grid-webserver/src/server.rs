//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::runtime_config::{config_from_args, service_from_args};
use actix_cors::Cors;
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{middleware, rt, web, App, HttpRequest, HttpResponse, HttpServer};
use clap::ArgMatches;
use grid_service::{GridService, TileError};

/// Application state
pub struct AppState {
    pub service: GridService,
    /// Cache-Control max-age of tile responses
    pub cache_max_age: Option<u32>,
}

fn req_baseurl(req: &HttpRequest) -> String {
    let conninfo = req.connection_info();
    format!("{}://{}", conninfo.scheme(), conninfo.host())
}

async fn tileset_tilejson(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    match state.service.get_tilejson(&req_baseurl(&req)) {
        Ok(json) => HttpResponse::Ok().json(json),
        Err(e) => {
            error!("TileJSON creation failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn tile(
    state: web::Data<AppState>,
    params: web::Path<(String, String, String, String)>,
) -> HttpResponse {
    let (z, x, y, format) = params.into_inner();
    match state.service.tile_request(&z, &x, &y, &format) {
        Ok(tile) => {
            let mut resp = HttpResponse::Ok();
            resp.content_type(tile.content_type);
            if let Some(max_age) = state.cache_max_age {
                resp.insert_header(CacheControl(vec![CacheDirective::MaxAge(max_age)]));
            }
            resp.body(tile.body)
        }
        Err(err) => {
            debug!("{}/{}/{}.{}: {}", z, x, y, format, err);
            match err {
                TileError::BadRequest(_) => HttpResponse::BadRequest().finish(),
                TileError::NotFound(_) => HttpResponse::NotFound().finish(),
                TileError::Internal(_) => HttpResponse::InternalServerError().finish(),
            }
        }
    }
}

/// Register TileJSON and tile routes of the grid layer
pub fn register_routes(cfg: &mut web::ServiceConfig, layer_name: &str) {
    cfg.route(
        &format!("/{}.json", layer_name),
        web::get().to(tileset_tilejson),
    )
    .route(
        &format!("/{}/{{z}}/{{x}}/{{y}}.{{format}}", layer_name),
        web::get().to(tile),
    );
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600)
}

pub fn webserver(args: ArgMatches<'static>) -> std::io::Result<()> {
    let config = config_from_args(&args);
    let host = config
        .webserver
        .bind
        .clone()
        .unwrap_or("127.0.0.1".to_string());
    let port = config.webserver.port.unwrap_or(6767);
    let bind_addr = format!("{}:{}", host, port);
    let workers = config
        .webserver
        .threads
        .map(|threads| threads as usize)
        .unwrap_or_else(num_cpus::get);

    let service = service_from_args(&config);
    let layer_name = service.params.layer_name.clone();
    let tile_url = format!("http://{}/{}/{{z}}/{{x}}/{{y}}.pbf", bind_addr, layer_name);
    info!(
        "Serving grid zoom {} cells in zoom levels {}..={}",
        service.params.grid_zoom, service.params.minzoom, service.params.maxzoom
    );
    let state = web::Data::new(AppState {
        service,
        cache_max_age: config.webserver.cache_control_max_age,
    });

    rt::System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(middleware::Logger::default())
                .wrap(middleware::Compress::default())
                .wrap(cors())
                .configure(|cfg| register_routes(cfg, &layer_name))
        })
        .workers(workers)
        .bind(&bind_addr)?
        .shutdown_timeout(3); // default: 30s

        info!("Tile endpoint: {}", tile_url);
        server.run().await
    })
}
