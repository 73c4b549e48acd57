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

//! Static registry of the metrics read from measurement reports.
//!
//! Each [`MetricSpec`] bundles the report key with the codec used to parse
//! and display its values, plus the chart texts. Registration order is
//! significant: it is the column order of the tabular export and the order
//! charts are rendered in.

use crate::error::{BenchError, Result};
use crate::units::{MetricFamily, UnitCodec};

/// One measured quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Key as printed by the measurement tool.
    pub key: &'static str,
    /// Family providing the unit table and display thresholds.
    pub family: MetricFamily,
    /// Value axis label.
    pub axis_label: &'static str,
    /// Chart title.
    pub title: &'static str,
}

impl MetricSpec {
    /// File name of this metric's chart.
    pub fn chart_file_name(&self) -> String {
        format!("{}.svg", self.key)
    }
}

impl UnitCodec for MetricSpec {
    fn parse(&self, raw: &str) -> Result<f64> {
        self.family.parse(raw)
    }

    fn format(&self, value: f64) -> String {
        self.family.format(value)
    }
}

/// Every metric known to the system, in registration order.
pub static METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: "wall_time",
        family: MetricFamily::Time,
        axis_label: "Wall Time - Less is better",
        title: "CSV Parser Wall Time Performance Comparison",
    },
    MetricSpec {
        key: "peak_rss",
        family: MetricFamily::Memory,
        axis_label: "Peak RSS - Less is better",
        title: "CSV Parser Peak RSS Comparison",
    },
    MetricSpec {
        key: "branch_misses",
        family: MetricFamily::Scalar,
        axis_label: "Branch Misses - Less is better",
        title: "CSV Parser Branch Misses Comparison",
    },
    MetricSpec {
        key: "cache_misses",
        family: MetricFamily::Scalar,
        axis_label: "Cache Misses",
        title: "CSV Parser Cache Misses Comparison",
    },
    MetricSpec {
        key: "cache_references",
        family: MetricFamily::Scalar,
        axis_label: "Cache References",
        title: "CSV Parser Cache References Comparison",
    },
    MetricSpec {
        key: "instructions",
        family: MetricFamily::Scalar,
        axis_label: "Instructions",
        title: "CSV Parser CPU Instructions Comparison",
    },
    MetricSpec {
        key: "cpu_cycles",
        family: MetricFamily::Scalar,
        axis_label: "CPU Cycles",
        title: "CSV Parser CPU Cycles Comparison",
    },
];

/// Returns all registered metrics in registration order.
pub fn registered_metrics() -> &'static [MetricSpec] {
    METRICS
}

/// Returns the registered metric keys in registration order.
pub fn metric_keys() -> Vec<&'static str> {
    METRICS.iter().map(|metric| metric.key).collect()
}

/// Looks up a metric by key.
pub fn find_metric(key: &str) -> Option<&'static MetricSpec> {
    METRICS.iter().find(|metric| metric.key == key)
}

/// Looks up a metric by key, failing for keys outside the registry.
pub fn require_metric(key: &str) -> Result<&'static MetricSpec> {
    find_metric(key).ok_or_else(|| BenchError::UnknownMetric(key.to_string()))
}
