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

//! The `run` command: full benchmark pipeline.

use crate::error::CliError;
use colored::Colorize;
use csvbench::config::{DEFAULT_CHART_DIR, DEFAULT_CSV_PATH};
use csvbench::harness::SummaryRow;
use csvbench::{summarize, BenchConfig, BenchmarkSession, SystemRunner};
use std::path::Path;
use tracing::info;

/// Runs every configured test input and writes the outputs.
///
/// Values are normalized for the console summary before anything is written,
/// so an unparseable value leaves no partial output behind.
pub fn run(config_path: &Path, output_dir: Option<&Path>, charts: bool) -> Result<(), CliError> {
    let mut config = BenchConfig::load(config_path)?;
    if let Some(dir) = output_dir {
        config.output.csv_path = dir.join(DEFAULT_CSV_PATH);
        config.output.chart_dir = dir.join(DEFAULT_CHART_DIR);
    }
    info!(
        config = %config_path.display(),
        subjects = config.subjects.len(),
        tests = config.tests.len(),
        "starting benchmark run"
    );

    let session = BenchmarkSession::new(config, SystemRunner::new()).with_charts(charts);
    let table = session.run()?;
    let rows = summarize(&table)?;
    let outputs = session.write_outputs(&table)?;

    print!("{}", format_summary(&rows));
    println!("{} {}", "CSV:".green().bold(), outputs.csv_path.display());
    for chart in &outputs.charts {
        println!("{} {}", "Chart:".green().bold(), chart.display());
    }
    Ok(())
}

/// Renders the summary as one fixed-width table per test input.
pub fn format_summary(rows: &[SummaryRow]) -> String {
    let mut subject_width = "subject".len();
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        subject_width = subject_width.max(row.subject.chars().count());
        for (i, (key, value)) in row.values.iter().enumerate() {
            let width = key.len().max(value.chars().count());
            match widths.get_mut(i) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(80)));
    out.push_str(&format!("{}\n", "SUMMARY".bold()));
    out.push_str(&format!("{}\n", "=".repeat(80)));

    let mut current_test: Option<&str> = None;
    for row in rows {
        if current_test != Some(row.test.as_str()) {
            current_test = Some(row.test.as_str());
            out.push_str(&format!("\n{}\n", row.test.cyan().bold()));

            let mut header = format!("  {:<subject_width$}", "subject");
            for ((key, _), width) in row.values.iter().zip(&widths) {
                header.push_str(&format!("  {:>width$}", key, width = *width));
            }
            out.push_str(&format!("{}\n", header.dimmed()));
        }

        let mut line = format!("  {:<subject_width$}", row.subject);
        for ((_, value), width) in row.values.iter().zip(&widths) {
            line.push_str(&format!("  {:>width$}", value, width = *width));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out
}
