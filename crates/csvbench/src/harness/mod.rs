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

//! Benchmark execution.
//!
//! # Modules
//!
//! - `runner`: Invoking the external measurement tool
//! - `aggregator`: One invocation per test input, blocks matched to subjects
//! - `session`: Running every test input and writing the outputs

pub mod aggregator;
pub mod runner;
pub mod session;

pub use aggregator::{build_arguments, collect_records, run_once};
pub use runner::{CommandRunner, SystemRunner};
pub use session::{summarize, BenchmarkSession, SessionOutputs, SummaryRow};
