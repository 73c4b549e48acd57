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

//! Invocation of the external measurement tool.

use crate::error::{BenchError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs a program to completion and returns its standard output.
///
/// Implementations must fail on a non-zero exit status; a partial report is
/// never usable because blocks are matched to subjects by position.
pub trait CommandRunner {
    /// Executes `program` with `args`, blocking until it exits.
    fn run(&self, program: &Path, args: &[String]) -> Result<String>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates a system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<String> {
        debug!(program = %program.display(), ?args, "spawning measurement tool");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| BenchError::Invocation {
                program: program.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(BenchError::ToolFailed {
                program: program.to_path_buf(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| BenchError::InvalidOutput {
            program: program.to_path_buf(),
        })
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &Path, args: &[String]) -> Result<String> {
        (**self).run(program, args)
    }
}
