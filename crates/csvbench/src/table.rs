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

//! In-memory result table and its flat CSV export.
//!
//! The table keeps, for every benchmarked test input, the raw metric record
//! of each subject in configured order. Export is a pure projection of the
//! raw strings: nothing is parsed or normalized on the way out.

use crate::config::TestInput;
use crate::error::{BenchError, Result};
use crate::metrics::registered_metrics;
use crate::report::RawMetricRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A subject's record within one test row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    /// Subject name.
    pub subject: String,
    /// Raw values reported for the subject.
    pub record: RawMetricRecord,
}

impl SubjectRecord {
    /// Creates a subject record.
    pub fn new(subject: impl Into<String>, record: RawMetricRecord) -> Self {
        Self {
            subject: subject.into(),
            record,
        }
    }
}

/// All subject records for one test input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRow {
    /// The test input.
    pub test: TestInput,
    /// Records in subject configuration order.
    pub subjects: Vec<SubjectRecord>,
}

impl TestRow {
    /// Looks up a subject's record.
    pub fn subject(&self, name: &str) -> Option<&RawMetricRecord> {
        self.subjects
            .iter()
            .find(|entry| entry.subject == name)
            .map(|entry| &entry.record)
    }
}

/// Results of a benchmark run, one row per test input in benchmark order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<TestRow>,
}

impl ResultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the records of one test input.
    pub fn record(&mut self, test: &TestInput, subjects: Vec<SubjectRecord>) {
        self.rows.push(TestRow {
            test: test.clone(),
            subjects,
        });
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[TestRow] {
        &self.rows
    }

    /// Test input names in insertion order.
    pub fn test_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.test.name.as_str()).collect()
    }

    /// Number of test rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether no test has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the raw value of a metric, failing when the subject or the
    /// metric is absent from the row.
    pub fn raw_value(&self, row: &TestRow, subject: &str, metric: &str) -> Result<String> {
        let missing = || BenchError::MissingMetric {
            test: row.test.name.clone(),
            subject: subject.to_string(),
            metric: metric.to_string(),
        };
        let record = row.subject(subject).ok_or_else(missing)?;
        record
            .require(metric, &row.test.name, subject)
            .map(str::to_string)
    }

    /// Export header: `test`, `subject`, then every registered metric key.
    pub fn header() -> Vec<String> {
        let mut header = vec!["test".to_string(), "subject".to_string()];
        header.extend(registered_metrics().iter().map(|m| m.key.to_string()));
        header
    }

    /// Flattens the table into one row per (test, subject) pair.
    pub fn to_rows(&self) -> Result<Vec<Vec<String>>> {
        let mut out = Vec::new();
        for row in &self.rows {
            for entry in &row.subjects {
                let mut flat = vec![row.test.name.clone(), entry.subject.clone()];
                for metric in registered_metrics() {
                    let value = entry
                        .record
                        .require(metric.key, &row.test.name, &entry.subject)?;
                    flat.push(value.to_string());
                }
                out.push(flat);
            }
        }
        Ok(out)
    }

    /// Writes header and rows as CSV.
    ///
    /// All rows are projected before anything is written, so a missing
    /// metric leaves the writer untouched.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let rows = self.to_rows()?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(Self::header())?;
        for row in &rows {
            csv_writer.write_record(row)?;
        }
        csv_writer
            .flush()
            .map_err(|e| BenchError::Csv(e.to_string()))?;
        Ok(())
    }

    /// Writes the CSV export to `path`, creating parent directories.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let rows = self.to_rows()?.len();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        self.write_csv(file)?;
        info!(path = %path.display(), rows, "wrote tabular export");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record(wall_time: &str) -> RawMetricRecord {
        let mut record = RawMetricRecord::new();
        for metric in registered_metrics() {
            record.insert(metric.key, "1");
        }
        record.insert("peak_rss", "1MB");
        record.insert("wall_time", wall_time);
        record
    }

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new();
        table.record(
            &TestInput::new("t1.csv", "T1"),
            vec![
                SubjectRecord::new("A", full_record("10ms")),
                SubjectRecord::new("B", full_record("20ms")),
            ],
        );
        table.record(
            &TestInput::new("t2.csv", "T2"),
            vec![
                SubjectRecord::new("A", full_record("5ms")),
                SubjectRecord::new("B", full_record("8ms")),
            ],
        );
        table
    }

    #[test]
    fn test_header() {
        assert_eq!(
            ResultTable::header(),
            vec![
                "test",
                "subject",
                "wall_time",
                "peak_rss",
                "branch_misses",
                "cache_misses",
                "cache_references",
                "instructions",
                "cpu_cycles",
            ]
        );
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let rows = sample_table().to_rows().unwrap();
        let keys: Vec<_> = rows
            .iter()
            .map(|r| (r[0].as_str(), r[1].as_str(), r[2].as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("T1", "A", "10ms"),
                ("T1", "B", "20ms"),
                ("T2", "A", "5ms"),
                ("T2", "B", "8ms"),
            ]
        );
        assert!(rows.iter().all(|r| r.len() == ResultTable::header().len()));
    }

    #[test]
    fn test_missing_metric_fails_export() {
        let mut table = ResultTable::new();
        let record: RawMetricRecord = [("wall_time", "1ms")].into_iter().collect();
        table.record(
            &TestInput::new("t.csv", "T"),
            vec![SubjectRecord::new("A", record)],
        );
        let err = table.to_rows().unwrap_err();
        assert_eq!(
            err,
            BenchError::MissingMetric {
                test: "T".to_string(),
                subject: "A".to_string(),
                metric: "peak_rss".to_string(),
            }
        );

        let mut buffer = Vec::new();
        assert!(table.write_csv(&mut buffer).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        sample_table().write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "test,subject,wall_time,peak_rss,branch_misses,cache_misses,cache_references,instructions,cpu_cycles"
        );
        assert_eq!(lines[1], "T1,A,10ms,1MB,1,1,1,1,1");
        assert_eq!(lines[4], "T2,B,8ms,1MB,1,1,1,1,1");
    }

    #[test]
    fn test_quotes_names_with_commas() {
        let mut table = ResultTable::new();
        table.record(
            &TestInput::new("x.csv", "XL Mix Quotes, 12 col"),
            vec![SubjectRecord::new("csv (rust)", full_record("1ms"))],
        );
        let mut buffer = Vec::new();
        table.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"XL Mix Quotes, 12 col\",csv (rust),1ms"));
    }

    #[test]
    fn test_raw_value_lookup() {
        let table = sample_table();
        let row = &table.rows()[1];
        assert_eq!(table.raw_value(row, "B", "wall_time").unwrap(), "8ms");
        assert!(matches!(
            table.raw_value(row, "C", "wall_time"),
            Err(BenchError::MissingMetric { .. })
        ));
        assert_eq!(table.test_names(), vec!["T1", "T2"]);
    }

    #[test]
    fn test_save_csv_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output.csv");
        sample_table().save_csv(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("test,subject,"));
    }
}
