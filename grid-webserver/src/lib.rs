//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

mod runtime_config;
pub mod server;

pub use runtime_config::{config_from_args, gen_config, service_from_args};
pub use server::webserver;
