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

//! Error types for benchmark runs.
//!
//! Every failure in this crate is fatal for the run that produced it: a
//! skewed comparison is worse than no comparison, so nothing here is retried
//! or defaulted.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while running, parsing, or rendering benchmarks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// The measurement tool could not be started at all.
    #[error("Failed to invoke '{program}': {message}")]
    Invocation {
        /// Program that was being spawned
        program: PathBuf,
        /// Underlying spawn error
        message: String,
    },

    /// The measurement tool exited with a non-zero status.
    #[error("'{program}' exited with {}: {stderr}", status_text(.status))]
    ToolFailed {
        /// Program that failed
        program: PathBuf,
        /// Exit code, `None` when terminated by a signal
        status: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The measurement tool produced output that is not valid UTF-8.
    #[error("Output of '{program}' is not valid UTF-8")]
    InvalidOutput {
        /// Program whose output was rejected
        program: PathBuf,
    },

    /// A raw value carries a unit suffix the metric family does not know.
    #[error("Unknown {family} unit '{unit}' in value '{value}'")]
    UnknownUnit {
        /// Metric family name
        family: String,
        /// The unrecognized suffix
        unit: String,
        /// The full raw value
        value: String,
    },

    /// A raw value does not start with a numeric literal.
    #[error("Value '{value}' does not start with a number")]
    InvalidNumber {
        /// The full raw value
        value: String,
    },

    /// The report block count does not match the configured subject count.
    #[error("Report for '{test}' has {actual} benchmark blocks, expected {expected} (one per subject)")]
    SubjectCountMismatch {
        /// Test input the report belongs to
        test: String,
        /// Number of configured subjects
        expected: usize,
        /// Number of blocks found in the report
        actual: usize,
    },

    /// A subject's record lacks a metric that is being exported or charted.
    #[error("Metric '{metric}' missing for subject '{subject}' in test '{test}'")]
    MissingMetric {
        /// Test input name
        test: String,
        /// Subject name
        subject: String,
        /// Metric key
        metric: String,
    },

    /// A metric key is not in the registry.
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The configuration file could not be deserialized.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// I/O error with the path that caused it
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// CSV export failed
    #[error("CSV export error: {0}")]
    Csv(String),

    /// Chart drawing failed
    #[error("Chart rendering failed for '{path}': {message}")]
    Chart {
        /// Output file of the chart
        path: PathBuf,
        /// Backend error message
        message: String,
    },
}

fn status_text(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

impl BenchError {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a chart rendering error from any backend error.
    pub fn chart(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Chart {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<csv::Error> for BenchError {
    fn from(source: csv::Error) -> Self {
        Self::Csv(source.to_string())
    }
}

impl From<serde_yaml::Error> for BenchError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::ConfigParse(source.to_string())
    }
}
