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

//! A complete benchmark run: every test input, then the outputs.

use super::aggregator::run_once;
use super::runner::CommandRunner;
use crate::chart;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::metrics::registered_metrics;
use crate::table::ResultTable;
use crate::units::UnitCodec;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Files produced by [`BenchmarkSession::write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutputs {
    /// Tabular export.
    pub csv_path: PathBuf,
    /// One chart per registered metric, empty when charts are disabled.
    pub charts: Vec<PathBuf>,
}

/// Drives the measurement tool over every configured test input.
///
/// Test inputs are benchmarked strictly one after another. The first
/// failure ends the session before anything is written.
#[derive(Debug)]
pub struct BenchmarkSession<R> {
    config: BenchConfig,
    runner: R,
    render_charts: bool,
}

impl<R: CommandRunner> BenchmarkSession<R> {
    /// Creates a session that renders charts.
    pub fn new(config: BenchConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            render_charts: true,
        }
    }

    /// Enables or disables chart rendering.
    pub fn with_charts(mut self, enabled: bool) -> Self {
        self.render_charts = enabled;
        self
    }

    /// The session's configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the measurement tool once per test input and collects the results.
    pub fn run(&self) -> Result<ResultTable> {
        self.config.validate()?;

        let mut table = ResultTable::new();
        for (index, input) in self.config.tests.iter().enumerate() {
            let start = Instant::now();
            let records = run_once(&self.runner, &self.config, input)?;
            info!(
                test = %input.name,
                progress = index + 1,
                total = self.config.tests.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "benchmarked test input"
            );
            table.record(input, records);
        }
        Ok(table)
    }

    /// Writes the CSV export and, unless disabled, the charts.
    ///
    /// Chart layouts are built before the CSV is written so that a value
    /// that fails to parse aborts with no output at all.
    pub fn write_outputs(&self, table: &ResultTable) -> Result<SessionOutputs> {
        let output = &self.config.output;
        if self.render_charts {
            chart::build_all(table, &self.config.subjects)?;
        }

        table.save_csv(&output.csv_path)?;

        let charts = if self.render_charts {
            chart::render_all(table, &self.config, &output.chart_dir)?
        } else {
            Vec::new()
        };

        Ok(SessionOutputs {
            csv_path: output.csv_path.clone(),
            charts,
        })
    }

    /// Runs every test input and writes the outputs.
    pub fn execute(&self) -> Result<(ResultTable, SessionOutputs)> {
        let table = self.run()?;
        let outputs = self.write_outputs(&table)?;
        Ok((table, outputs))
    }
}

/// One line of the console summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Test input name.
    pub test: String,
    /// Subject name.
    pub subject: String,
    /// `(metric key, formatted canonical value)` in registration order.
    pub values: Vec<(&'static str, String)>,
}

/// Normalizes every raw value in the table for display.
pub fn summarize(table: &ResultTable) -> Result<Vec<SummaryRow>> {
    let mut rows = Vec::new();
    for row in table.rows() {
        for entry in &row.subjects {
            let mut values = Vec::with_capacity(registered_metrics().len());
            for metric in registered_metrics() {
                let raw = entry
                    .record
                    .require(metric.key, &row.test.name, &entry.subject)?;
                values.push((metric.key, metric.format(metric.parse(raw)?)));
            }
            rows.push(SummaryRow {
                test: row.test.name.clone(),
                subject: entry.subject.clone(),
                values,
            });
        }
    }
    Ok(rows)
}
