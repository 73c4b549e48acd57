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

//! Structured error types for the CSVBench CLI.
//!
//! All command handlers return `Result<T, CliError>`; `main` prints the error
//! and exits with a failure status.

use csvbench::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CSVBench CLI operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A library operation failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Refused to overwrite an existing file.
    #[error("'{0}' already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use csvbench_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("bench.yaml")
    ///     .map_err(|e| CliError::io_error("bench.yaml", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
