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

//! Measurement report parsing.
//!
//! A report is the captured standard output of one measurement invocation
//! covering every subject. It consists of marker-delimited blocks, one per
//! subject in invocation order, each holding `key value …` lines.
//!
//! # Modules
//!
//! - `segment`: Splitting a report into per-subject blocks
//! - `record`: Extracting raw metric values from a block

pub mod record;
pub mod segment;

pub use record::{RawMetricRecord, COLUMN_HEADER_KEY};
pub use segment::{segment, Block, BLOCK_MARKER};
