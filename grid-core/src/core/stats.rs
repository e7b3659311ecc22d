//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile measurements per layer and zoom level

use stats::{MinMax, OnlineStats};
use std::collections::BTreeMap;
use std::fmt;

/// Measured quantity
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Measure {
    FeatureCount,
    TileBytes,
    TileMs,
}

impl Measure {
    pub fn name(&self) -> &'static str {
        match self {
            Measure::FeatureCount => "feature_count",
            Measure::TileBytes => "tile_bytes",
            Measure::TileMs => "tile_ms",
        }
    }
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct StatKey {
    pub measure: Measure,
    pub layer: String,
    pub zoom: u8,
}

impl StatKey {
    pub fn new(measure: Measure, layer: &str, zoom: u8) -> StatKey {
        StatKey {
            measure,
            layer: layer.to_string(),
            zoom,
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.measure.name(), self.layer, self.zoom)
    }
}

struct Series {
    online: OnlineStats,
    minmax: MinMax<u64>,
}

impl Default for Series {
    fn default() -> Series {
        Series {
            online: OnlineStats::new(),
            minmax: MinMax::new(),
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct StatResults {
    pub len: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub stddev: f64,
}

impl Series {
    fn results(&self) -> StatResults {
        StatResults {
            len: self.minmax.len(),
            min: self.minmax.min().copied().unwrap_or(0),
            max: self.minmax.max().copied().unwrap_or(0),
            mean: self.online.mean(),
            stddev: self.online.stddev(),
        }
    }
}

#[derive(Default)]
pub struct Statistics(BTreeMap<StatKey, Series>);

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }
    pub fn add(&mut self, key: StatKey, value: u64) {
        let series = self.0.entry(key).or_default();
        series.online.add(value);
        series.minmax.add(value);
    }
    pub fn keys(&self) -> impl Iterator<Item = &StatKey> {
        self.0.keys()
    }
    /// Results of a series, all zero for unknown keys.
    pub fn results(&self, key: &StatKey) -> StatResults {
        self.0.get(key).map(Series::results).unwrap_or_default()
    }
    /// CSV table with one row per series
    pub fn as_csv(&self) -> String {
        let mut csv = String::from("measure,layer,zoom,count,min,max,mean,stddev\n");
        for (key, series) in &self.0 {
            let res = series.results();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{:.1},{:.1}\n",
                key.measure.name(),
                key.layer,
                key.zoom,
                res.len,
                res.min,
                res.max,
                res.mean,
                res.stddev
            ));
        }
        csv
    }
}

impl fmt::Debug for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, series) in &self.0 {
            let res = series.results();
            writeln!(
                f,
                "{}: n={} min={} max={} mean={:.3} stddev={:.3}",
                key, res.len, res.min, res.max, res.mean, res.stddev
            )?;
        }
        Ok(())
    }
}
