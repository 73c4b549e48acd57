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

//! CSVBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **run**: Benchmark every subject on every test input, write the CSV
//!   export and one chart per metric, and print a summary
//! - **init**: Write a template configuration
//! - **metrics**: List the metrics read from measurement reports
//!
//! # Logging
//!
//! Progress is logged to stderr through `tracing`. Set `RUST_LOG` (for
//! example `RUST_LOG=csvbench=debug`) to change verbosity.

pub mod cli;
pub mod commands;
pub mod error;
