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

//! Benchmark configuration.
//!
//! Describes which test inputs every subject is run against, which subjects
//! are compared, where the measurement tool lives and where the results go.
//! Subject order is significant: report blocks are matched to subjects purely
//! by position.
//!
//! # Example
//!
//! ```no_run
//! use csvbench::config::{BenchConfig, Subject, TestInput};
//!
//! let config = BenchConfig::new("/usr/local/bin/poop")
//!     .with_subject(Subject::new("csv (rust)", "./bin/csv_count", "#C69B9C"))
//!     .with_test(TestInput::new("./data/small.csv", "Small"));
//! config.validate().unwrap();
//! ```

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the measurement tool path.
pub const TOOL_ENV_VAR: &str = "CSVBENCH_TOOL";

/// Fixed arguments passed to the measurement tool before the subject operands.
pub const DEFAULT_TOOL_ARGS: &[&str] = &["--color", "never", "-d", "10000"];

/// Default path of the tabular export.
pub const DEFAULT_CSV_PATH: &str = "output.csv";

/// Default directory for chart artifacts.
pub const DEFAULT_CHART_DIR: &str = "images";

/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 2000;

/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 1200;

/// Default bar color for subjects that do not set one.
pub const DEFAULT_BAR_COLOR: &str = "#90ACC2";

/// One workload given identically to every subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInput {
    /// Display name, also the row label in exports and charts.
    pub name: String,
    /// Input file handed to each subject.
    pub path: PathBuf,
}

impl TestInput {
    /// Creates a test input.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One interchangeable program under comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name.
    pub name: String,
    /// Executable invoked with the test input path as its only argument.
    pub path: PathBuf,
    /// Bar color as `#RRGGBB`.
    #[serde(default = "default_bar_color")]
    pub bar_color: String,
}

impl Subject {
    /// Creates a subject.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        bar_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            bar_color: bar_color.into(),
        }
    }

    /// Returns the bar color as RGB components.
    pub fn rgb(&self) -> Result<(u8, u8, u8)> {
        parse_hex_color(&self.bar_color).ok_or_else(|| {
            BenchError::invalid_config(
                format!("subjects.{}.bar_color", self.name),
                format!("'{}' is not a #RRGGBB color", self.bar_color),
            )
        })
    }

    /// The operand passed to the measurement tool for one test input.
    pub fn command_line(&self, input: &TestInput) -> String {
        format!("{} {}", self.path.display(), input.path.display())
    }
}

fn default_bar_color() -> String {
    DEFAULT_BAR_COLOR.to_string()
}

/// External measurement tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path to the measurement executable.
    pub path: PathBuf,
    /// Arguments placed before the subject operands.
    #[serde(default = "default_tool_args")]
    pub args: Vec<String>,
}

impl ToolConfig {
    /// Creates a tool configuration with the default arguments.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            args: default_tool_args(),
        }
    }
}

fn default_tool_args() -> Vec<String> {
    DEFAULT_TOOL_ARGS.iter().map(|s| s.to_string()).collect()
}

/// Where results are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Tabular export path.
    pub csv_path: PathBuf,
    /// Directory receiving one chart per metric.
    pub chart_dir: PathBuf,
    /// Chart width in pixels.
    pub chart_width: u32,
    /// Chart height in pixels.
    pub chart_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl OutputConfig {
    /// Places the CSV export and chart directory under `dir`.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            csv_path: dir.join(DEFAULT_CSV_PATH),
            chart_dir: dir.join(DEFAULT_CHART_DIR),
            ..Self::default()
        }
    }

    /// Chart size as `(width, height)`.
    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}

/// Complete benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Measurement tool.
    pub tool: ToolConfig,
    /// Subjects in report order.
    pub subjects: Vec<Subject>,
    /// Test inputs in benchmark order.
    pub tests: Vec<TestInput>,
    /// Output locations.
    #[serde(default)]
    pub output: OutputConfig,
}

impl BenchConfig {
    /// Creates an empty configuration for the given measurement tool.
    pub fn new(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool: ToolConfig::new(tool_path),
            subjects: Vec::new(),
            tests: Vec::new(),
            output: OutputConfig::default(),
        }
    }

    /// Loads and validates a YAML configuration file.
    ///
    /// When [`TOOL_ENV_VAR`] is set it replaces the configured tool path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(tool) = std::env::var_os(TOOL_ENV_VAR) {
            config.tool.path = PathBuf::from(tool);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML configuration without validating it.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Appends a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Appends a test input.
    pub fn with_test(mut self, test: TestInput) -> Self {
        self.tests.push(test);
        self
    }

    /// Replaces the tool arguments.
    pub fn with_tool_args(mut self, args: Vec<String>) -> Self {
        self.tool.args = args;
        self
    }

    /// Replaces the output locations.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Checks the configuration for problems that would corrupt a run.
    ///
    /// Subject and test names key the result table, so duplicates would
    /// silently merge results of different programs or inputs.
    pub fn validate(&self) -> Result<()> {
        if self.tool.path.as_os_str().is_empty() {
            return Err(BenchError::invalid_config("tool.path", "must not be empty"));
        }
        if self.subjects.is_empty() {
            return Err(BenchError::invalid_config(
                "subjects",
                "at least one subject is required",
            ));
        }
        if self.tests.is_empty() {
            return Err(BenchError::invalid_config(
                "tests",
                "at least one test input is required",
            ));
        }

        let mut names = HashSet::new();
        for subject in &self.subjects {
            if !names.insert(subject.name.as_str()) {
                return Err(BenchError::invalid_config(
                    "subjects",
                    format!("duplicate subject name '{}'", subject.name),
                ));
            }
            subject.rgb()?;
        }

        let mut names = HashSet::new();
        for test in &self.tests {
            if !names.insert(test.name.as_str()) {
                return Err(BenchError::invalid_config(
                    "tests",
                    format!("duplicate test name '{}'", test.name),
                ));
            }
        }

        if self.output.chart_width == 0 || self.output.chart_height == 0 {
            return Err(BenchError::invalid_config(
                "output.chart_width/chart_height",
                "chart dimensions must be positive",
            ));
        }

        Ok(())
    }

    /// The stock comparison of five CSV parsers over three large inputs.
    pub fn template() -> Self {
        Self::new("./poop")
            .with_subject(Subject::new(
                "zcsv (zig)",
                "./src/zig/zig-out/bin/zcsv",
                "#EBB101",
            ))
            .with_subject(Subject::new(
                "zsv (c)",
                "./src/c/zsv/count_fields",
                "#9AC3B4",
            ))
            .with_subject(Subject::new(
                "lazycsv (cpp)",
                "./src/cpp/lazycsv/count_fields",
                "#9A89B3",
            ))
            .with_subject(Subject::new(
                "simd-csv (rust)",
                "./src/rust/simd-csv/target/release/count_fields",
                "#90ACC2",
            ))
            .with_subject(Subject::new(
                "csv (rust)",
                "./src/rust/csv/target/release/count_fields",
                "#C69B9C",
            ))
            .with_test(TestInput::new(
                "./data/gen/xl_mix_quotes_12_col_0_32.csv",
                "XL Mix Quotes, 12 col, 0-32 chars",
            ))
            .with_test(TestInput::new(
                "./data/gen/xl_mix_quotes_2_col_0_12_many_rows.csv",
                "XL Mix Quotes, 2 col, 0-12 chars, many rows",
            ))
            .with_test(TestInput::new(
                "./data/gen/xl_no_quotes_52_col_0_256.csv",
                "XL No Quotes, 52 col, 0-256 chars",
            ))
    }
}

/// Parses `#RRGGBB` into RGB components.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
