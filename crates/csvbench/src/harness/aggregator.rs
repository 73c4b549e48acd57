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

//! One measurement invocation per test input.
//!
//! Builds the argument list covering every subject, runs the measurement
//! tool once, and pairs the resulting report blocks with subjects by
//! position. The report carries no subject names, so the count check here is
//! the only guard against attributing results to the wrong program.

use super::runner::CommandRunner;
use crate::config::{BenchConfig, Subject, TestInput, ToolConfig};
use crate::error::{BenchError, Result};
use crate::report::{segment, RawMetricRecord};
use crate::table::SubjectRecord;
use tracing::{debug, info};

/// Builds the measurement tool arguments for one test input.
///
/// The tool's fixed arguments come first, followed by one
/// `"<subject path> <input path>"` operand per subject in configured order.
pub fn build_arguments(tool: &ToolConfig, subjects: &[Subject], input: &TestInput) -> Vec<String> {
    let mut args = tool.args.clone();
    args.extend(subjects.iter().map(|subject| subject.command_line(input)));
    args
}

/// Pairs the blocks of a captured report with the configured subjects.
pub fn collect_records(
    report: &str,
    subjects: &[Subject],
    input: &TestInput,
) -> Result<Vec<SubjectRecord>> {
    let blocks = segment(report);
    if blocks.len() != subjects.len() {
        return Err(BenchError::SubjectCountMismatch {
            test: input.name.clone(),
            expected: subjects.len(),
            actual: blocks.len(),
        });
    }

    Ok(subjects
        .iter()
        .zip(&blocks)
        .map(|(subject, block)| {
            debug!(subject = %subject.name, header = block.header, "matched report block");
            SubjectRecord::new(subject.name.clone(), RawMetricRecord::from_block(block))
        })
        .collect())
}

/// Runs the measurement tool once for `input` and returns each subject's record.
pub fn run_once<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &BenchConfig,
    input: &TestInput,
) -> Result<Vec<SubjectRecord>> {
    let args = build_arguments(&config.tool, &config.subjects, input);
    info!(
        test = %input.name,
        subjects = config.subjects.len(),
        "running measurement tool"
    );
    let report = runner.run(&config.tool.path, &args)?;
    collect_records(&report, &config.subjects, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    struct CannedRunner {
        report: String,
        calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    impl CannedRunner {
        fn new(report: &str) -> Self {
            Self {
                report: report.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for CannedRunner {
        fn run(&self, program: &Path, args: &[String]) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), args.to_vec()));
            Ok(self.report.clone())
        }
    }

    fn config(subjects: &[&str]) -> BenchConfig {
        let mut config = BenchConfig::new("/opt/poop");
        for name in subjects {
            config = config.with_subject(Subject::new(
                *name,
                format!("./bin/{}", name.to_lowercase()),
                "#112233",
            ));
        }
        config.with_test(TestInput::new("data/t1.csv", "T1"))
    }

    const THREE_BLOCKS: &str = "\
Benchmark 1 (10 runs): ./bin/a data/t1.csv
  measurement          mean ± σ
  wall_time          1.00ms ± 0.1ms
Benchmark 2 (10 runs): ./bin/b data/t1.csv
  measurement          mean ± σ
  wall_time          2.00ms ± 0.1ms
Benchmark 3 (10 runs): ./bin/c data/t1.csv
  measurement          mean ± σ
  wall_time          3.00ms ± 0.1ms
";

    #[test]
    fn test_build_arguments() {
        let config = config(&["A", "B"]);
        let args = build_arguments(&config.tool, &config.subjects, &config.tests[0]);
        assert_eq!(
            args,
            vec![
                "--color",
                "never",
                "-d",
                "10000",
                "./bin/a data/t1.csv",
                "./bin/b data/t1.csv",
            ]
        );
    }

    #[test]
    fn test_custom_tool_args() {
        let config = config(&["A"]).with_tool_args(vec!["-d".to_string(), "500".to_string()]);
        let args = build_arguments(&config.tool, &config.subjects, &config.tests[0]);
        assert_eq!(args, vec!["-d", "500", "./bin/a data/t1.csv"]);
    }

    #[test]
    fn test_positional_association() {
        let config = config(&["A", "B", "C"]);
        let runner = CannedRunner::new(THREE_BLOCKS);
        let records = run_once(&runner, &config, &config.tests[0]).unwrap();

        let pairs: Vec<_> = records
            .iter()
            .map(|r| (r.subject.as_str(), r.record.get("wall_time").unwrap()))
            .collect();
        assert_eq!(pairs, vec![("A", "1.00ms"), ("B", "2.00ms"), ("C", "3.00ms")]);

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("/opt/poop"));
        assert_eq!(calls[0].1.len(), 4 + 3);
    }

    #[test]
    fn test_too_few_blocks() {
        let config = config(&["A", "B", "C"]);
        let two_blocks = "Benchmark 1\nwall_time 1ms\nBenchmark 2\nwall_time 2ms\n";
        let err = run_once(&CannedRunner::new(two_blocks), &config, &config.tests[0]).unwrap_err();
        assert_eq!(
            err,
            BenchError::SubjectCountMismatch {
                test: "T1".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_empty_report() {
        let config = config(&["A"]);
        let err = collect_records("", &config.subjects, &config.tests[0]).unwrap_err();
        assert!(matches!(
            err,
            BenchError::SubjectCountMismatch { expected: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn test_runner_failure_propagates() {
        struct FailingRunner;
        impl CommandRunner for FailingRunner {
            fn run(&self, program: &Path, _args: &[String]) -> Result<String> {
                Err(BenchError::ToolFailed {
                    program: program.to_path_buf(),
                    status: Some(1),
                    stderr: "error: unable to spawn".to_string(),
                })
            }
        }

        let config = config(&["A"]);
        let err = run_once(&FailingRunner, &config, &config.tests[0]).unwrap_err();
        assert!(matches!(err, BenchError::ToolFailed { .. }));
    }
}
