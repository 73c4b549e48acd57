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

//! Extracting raw metric values from one report block.

use super::segment::Block;
use crate::error::{BenchError, Result};
use std::collections::BTreeMap;

/// First token of the measurement tool's column header line.
pub const COLUMN_HEADER_KEY: &str = "measurement";

/// Raw, unit-suffixed metric values for one (test input, subject) pair.
///
/// Values are kept exactly as the measurement tool printed them; parsing into
/// canonical units happens only when a chart needs the number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMetricRecord {
    values: BTreeMap<String, String>,
}

impl RawMetricRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from the lines of one block.
    ///
    /// Each line contributes its first two whitespace-separated tokens as
    /// key and value. Shorter lines and the column header are skipped; a
    /// repeated key keeps its last value.
    pub fn from_block(block: &Block<'_>) -> Self {
        Self::from_lines(block.lines.iter().copied())
    }

    /// Builds a record from raw report lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values = BTreeMap::new();
        for line in lines {
            let mut tokens = line.split_whitespace();
            if let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
                if key == COLUMN_HEADER_KEY {
                    continue;
                }
                values.insert(key.to_string(), value.to_string());
            }
        }
        Self { values }
    }

    /// Returns the raw value for a metric key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the raw value, failing with the owning test and subject named.
    pub fn require(&self, key: &str, test: &str, subject: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| BenchError::MissingMetric {
            test: test.to_string(),
            subject: subject.to_string(),
            metric: key.to_string(),
        })
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of metrics in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the record holds no metrics.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, raw value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawMetricRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOP_BLOCK: &str = "\
  measurement          mean ± σ            min … max           outliers         delta
  wall_time          12.3ms ±  1.02ms    11.1ms … 15.9ms          1 (10%)        0%
  peak_rss           4.46MB ±  0        4.46MB … 4.46MB          0 ( 0%)        0%
  cpu_cycles         38.1M  ±  3.22M    34.9M  … 46.7M           1 (10%)        0%
";

    #[test]
    fn test_first_two_tokens() {
        let record = RawMetricRecord::from_lines(POOP_BLOCK.lines());
        assert_eq!(record.get("wall_time"), Some("12.3ms"));
        assert_eq!(record.get("peak_rss"), Some("4.46MB"));
        assert_eq!(record.get("cpu_cycles"), Some("38.1M"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_column_header_skipped() {
        let record = RawMetricRecord::from_lines(POOP_BLOCK.lines());
        assert!(record.get(COLUMN_HEADER_KEY).is_none());
    }

    #[test]
    fn test_short_lines_ignored() {
        let record = RawMetricRecord::from_lines(["", "   ", "orphan", "wall_time 1ms"]);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("wall_time"), Some("1ms"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let record = RawMetricRecord::from_lines(["wall_time 1ms", "wall_time 2ms"]);
        assert_eq!(record.get("wall_time"), Some("2ms"));
    }

    #[test]
    fn test_require_missing() {
        let record: RawMetricRecord = [("wall_time", "1ms")].into_iter().collect();
        assert_eq!(record.require("wall_time", "T1", "A").unwrap(), "1ms");
        assert_eq!(
            record.require("peak_rss", "T1", "A").unwrap_err(),
            BenchError::MissingMetric {
                test: "T1".to_string(),
                subject: "A".to_string(),
                metric: "peak_rss".to_string(),
            }
        );
    }

    #[test]
    fn test_from_block() {
        let block = Block {
            header: "Benchmark 1 (10 runs): ./a x.csv",
            lines: vec!["  wall_time 5ms ± 1ms", "  peak_rss 1MB"],
        };
        let record = RawMetricRecord::from_block(&block);
        assert_eq!(record.get("wall_time"), Some("5ms"));
        assert_eq!(record.get("peak_rss"), Some("1MB"));
    }
}
