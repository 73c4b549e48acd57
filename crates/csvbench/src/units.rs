// Dweve CSVBench - Comparative CSV parser benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unit-suffixed value codec.
//!
//! Measurement reports print values like `1.23ms`, `456KB` or `12.3M`. This
//! module turns them into canonical floats per [`MetricFamily`] (milliseconds
//! for time, kilobytes for memory, plain counts for scalars) and formats
//! canonical floats back into the most readable unit.
//!
//! The formatted strings are display contracts: chart axis ticks and bar
//! labels are both produced by [`UnitCodec::format`], so they always agree.
//!
//! # Examples
//!
//! ```
//! use csvbench::units::{MetricFamily, UnitCodec};
//!
//! assert_eq!(MetricFamily::Scalar.parse("2.5K").unwrap(), 2500.0);
//! assert_eq!(MetricFamily::Memory.format(1000.0), "1.000 MB");
//! assert_eq!(MetricFamily::Time.format(0.0009), "1 µs");
//! ```

use crate::error::{BenchError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading decimal literal, optional whitespace, then whatever unit text follows.
static VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d*)?)\s*(.*?)\s*$").expect("value pattern is a valid regex")
});

const TIME_UNITS: &[(&str, f64)] = &[
    ("", 1.0),
    ("ms", 1.0),
    ("us", 1e-3),
    ("µs", 1e-3),
    ("μs", 1e-3),
    ("ns", 1e-6),
    ("s", 1e3),
];

const MEMORY_UNITS: &[(&str, f64)] = &[
    ("bytes", 1e-3),
    ("B", 1e-3),
    ("KB", 1.0),
    ("MB", 1e3),
    ("GB", 1e6),
];

const SCALAR_UNITS: &[(&str, f64)] = &[("", 1.0), ("K", 1e3), ("M", 1e6), ("G", 1e9)];

/// Shared parse + format capability of a metric.
pub trait UnitCodec {
    /// Parses a raw, possibly unit-suffixed string into a canonical value.
    fn parse(&self, raw: &str) -> Result<f64>;

    /// Formats a canonical value in the most readable unit.
    fn format(&self, value: f64) -> String;
}

/// The kind of quantity a metric measures.
///
/// Determines the canonical base unit, the accepted unit suffixes and the
/// display thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    /// Durations, canonical unit milliseconds.
    Time,
    /// Memory sizes, canonical unit kilobytes.
    Memory,
    /// Plain event counts.
    Scalar,
}

impl MetricFamily {
    /// Returns the family name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricFamily::Time => "time",
            MetricFamily::Memory => "memory",
            MetricFamily::Scalar => "scalar",
        }
    }

    /// Returns the canonical base unit (empty for plain counts).
    pub fn base_unit(&self) -> &'static str {
        match self {
            MetricFamily::Time => "ms",
            MetricFamily::Memory => "KB",
            MetricFamily::Scalar => "",
        }
    }

    fn units(&self) -> &'static [(&'static str, f64)] {
        match self {
            MetricFamily::Time => TIME_UNITS,
            MetricFamily::Memory => MEMORY_UNITS,
            MetricFamily::Scalar => SCALAR_UNITS,
        }
    }

    /// Looks up the multiplier that converts `unit` into the canonical unit.
    pub fn multiplier(&self, unit: &str) -> Option<f64> {
        self.units()
            .iter()
            .find(|(suffix, _)| *suffix == unit)
            .map(|(_, factor)| *factor)
    }
}

impl UnitCodec for MetricFamily {
    fn parse(&self, raw: &str) -> Result<f64> {
        let captures = VALUE_PATTERN
            .captures(raw)
            .ok_or_else(|| BenchError::InvalidNumber {
                value: raw.to_string(),
            })?;

        let literal: f64 = captures[1].parse().map_err(|_| BenchError::InvalidNumber {
            value: raw.to_string(),
        })?;
        let unit = &captures[2];

        let factor = self
            .multiplier(unit)
            .ok_or_else(|| BenchError::UnknownUnit {
                family: self.as_str().to_string(),
                unit: unit.to_string(),
                value: raw.to_string(),
            })?;

        Ok(literal * factor)
    }

    fn format(&self, value: f64) -> String {
        match self {
            MetricFamily::Time => format_time(value),
            MetricFamily::Memory => format_memory(value),
            MetricFamily::Scalar => format_scalar(value),
        }
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats milliseconds as µs, ms or s.
pub fn format_time(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.0} µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.2} ms", ms)
    } else {
        format!("{:.3} s", ms / 1000.0)
    }
}

/// Formats kilobytes as bytes, KB, MB or GB.
pub fn format_memory(kb: f64) -> String {
    if kb < 1.0 {
        format!("{:.0} bytes", kb * 1000.0)
    } else if kb < 1e3 {
        format!("{:.0} KB", kb)
    } else if kb < 1e6 {
        format!("{:.3} MB", kb / 1e3)
    } else {
        format!("{:.3} GB", kb / 1e6)
    }
}

/// Formats a count with a K/M/G suffix above one thousand.
pub fn format_scalar(count: f64) -> String {
    if count < 1e3 {
        format!("{:.0}", count)
    } else if count < 1e6 {
        format!("{:.1} K", count / 1e3)
    } else if count < 1e9 {
        format!("{:.1} M", count / 1e6)
    } else {
        format!("{:.1} G", count / 1e9)
    }
}
