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

//! CSVBench
//!
//! Comparative benchmarks for interchangeable CSV parsers, driven through an
//! external measurement tool.
//!
//! ## Pipeline
//!
//! - **Invocation**: one measurement run per test input covering every subject
//! - **Report parsing**: marker-delimited blocks matched to subjects by position
//! - **Unit normalization**: `1.23ms`, `456KB`, `12.3M` to canonical floats
//! - **Outputs**: a flat CSV of raw values and one grouped bar chart per metric
//!
//! ## Usage
//!
//! ```no_run
//! use csvbench::{BenchConfig, BenchmarkSession, SystemRunner};
//!
//! let config = BenchConfig::load("bench.yaml")?;
//! let session = BenchmarkSession::new(config, SystemRunner::new());
//! let (table, outputs) = session.execute()?;
//! println!("{} tests, csv at {}", table.len(), outputs.csv_path.display());
//! # Ok::<(), csvbench::BenchError>(())
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod report;
pub mod table;
pub mod units;

pub use chart::{render_all, render_chart, ChartData};
pub use config::{BenchConfig, OutputConfig, Subject, TestInput, ToolConfig};
pub use error::{BenchError, Result};
pub use harness::{summarize, BenchmarkSession, CommandRunner, SessionOutputs, SystemRunner};
pub use metrics::{registered_metrics, MetricSpec};
pub use report::RawMetricRecord;
pub use table::{ResultTable, SubjectRecord};
pub use units::{MetricFamily, UnitCodec};
