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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use csvbench_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmarks and write the CSV export and charts
    ///
    /// Invokes the measurement tool once per test input, covering every
    /// subject, then writes the tabular export and one chart per metric.
    Run {
        /// Benchmark configuration file
        #[arg(short, long, value_name = "FILE", default_value = "bench.yaml")]
        config: PathBuf,

        /// Write output.csv and images/ under this directory instead of the
        /// configured locations
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },

    /// Write a template configuration file
    ///
    /// The template compares five CSV parsers over three large inputs.
    Init {
        /// Output file path
        #[arg(short, long, value_name = "FILE", default_value = "bench.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List the metrics read from measurement reports
    Metrics,
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run {
                config,
                output_dir,
                no_charts,
            } => commands::run(&config, output_dir.as_deref(), !no_charts),
            Commands::Init { output, force } => commands::init(&output, force),
            Commands::Metrics => {
                commands::metrics();
                Ok(())
            }
        }
    }
}
