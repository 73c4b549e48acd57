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

//! The `init` command: write a template configuration.

use crate::error::CliError;
use colored::Colorize;
use csvbench::BenchConfig;
use std::fs;
use std::path::Path;

/// Writes the stock CSV parser comparison to `output`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::AlreadyExists(output.to_path_buf()));
    }

    let yaml = BenchConfig::template().to_yaml()?;
    fs::write(output, yaml).map_err(|e| CliError::io_error(output, e))?;

    println!(
        "{} {}",
        "Wrote template configuration to".green(),
        output.display()
    );
    Ok(())
}
