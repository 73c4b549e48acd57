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

//! The `metrics` command: list the metric registry.

use colored::Colorize;
use csvbench::registered_metrics;

/// Prints every registered metric in registration order.
pub fn metrics() {
    let key_width = registered_metrics()
        .iter()
        .map(|metric| metric.key.len())
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        format!("{:<key_width$}  {:<6}  axis label", "key", "family").bold()
    );
    for metric in registered_metrics() {
        println!(
            "{:<key_width$}  {:<6}  {}",
            metric.key,
            metric.family.as_str(),
            metric.axis_label
        );
    }
}
