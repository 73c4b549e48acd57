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

//! Splitting a measurement report into per-subject blocks.

use tracing::warn;

/// Prefix of the line that opens each subject's block.
pub const BLOCK_MARKER: &str = "Benchmark";

/// The lines one subject contributed to a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// The marker line itself. It only names the subject's command line,
    /// which is never used for association.
    pub header: &'a str,
    /// Lines strictly between this marker and the next.
    pub lines: Vec<&'a str>,
}

/// Splits a report into one block per marker line, in report order.
///
/// Lines before the first marker belong to no block and are dropped. A
/// report without markers yields no blocks; deciding whether that is an
/// error is left to the caller, which knows how many subjects ran.
///
/// # Examples
///
/// ```
/// use csvbench::report::segment;
///
/// let report = "Benchmark 1 (3 runs): ./a x.csv\n  wall_time 10ms\nBenchmark 2 (3 runs): ./b x.csv\n  wall_time 20ms\n";
/// let blocks = segment(report);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].lines, vec!["  wall_time 20ms"]);
/// ```
pub fn segment(report: &str) -> Vec<Block<'_>> {
    let mut blocks: Vec<Block<'_>> = Vec::new();
    let mut preamble = 0usize;

    for line in report.lines() {
        if line.starts_with(BLOCK_MARKER) {
            blocks.push(Block {
                header: line,
                lines: Vec::new(),
            });
        } else if let Some(current) = blocks.last_mut() {
            current.lines.push(line);
        } else if !line.trim().is_empty() {
            preamble += 1;
        }
    }

    if preamble > 0 {
        warn!(lines = preamble, "dropped report lines before the first block");
    }

    blocks
}
