//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

pub mod error;
pub mod grid_service;
#[cfg(test)]
mod grid_service_test;
pub mod metadata;
pub mod request;

pub use error::TileError;
pub use grid_service::{GridService, TileResponse};
pub use request::{TileFormat, TileRequest};
