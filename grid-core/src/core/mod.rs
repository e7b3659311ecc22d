//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod builder;
pub mod clip;
pub mod config;
pub mod feature;
pub mod geom;
pub mod gridcfg;
pub mod screen;
pub mod stats;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::gridcfg::GridParams;

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod clip_test;
#[cfg(test)]
mod config_test;
