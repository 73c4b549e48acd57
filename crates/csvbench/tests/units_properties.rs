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

//! Property-based tests for the unit codec using proptest.
//!
//! - Format then parse recovers the value within half a display step
//! - Parsing applies the documented multiplier exactly
//! - Parsing arbitrary text never panics

use csvbench::units::{MetricFamily, UnitCodec};
use proptest::prelude::*;

// ===== Helpers =====

/// Half of the smallest step the formatter can display for `value`.
fn display_tolerance(family: MetricFamily, value: f64) -> f64 {
    let half_step = match family {
        MetricFamily::Time if value < 1.0 => 0.0005,
        MetricFamily::Time if value < 1000.0 => 0.005,
        MetricFamily::Time => 0.5,
        MetricFamily::Memory if value < 1.0 => 0.0005,
        MetricFamily::Memory if value < 1e3 => 0.5,
        MetricFamily::Memory if value < 1e6 => 0.5,
        MetricFamily::Memory => 500.0,
        MetricFamily::Scalar if value < 1e3 => 0.5,
        MetricFamily::Scalar if value < 1e6 => 50.0,
        MetricFamily::Scalar if value < 1e9 => 5e4,
        MetricFamily::Scalar => 5e7,
    };
    half_step * 1.0001 + 1e-9
}

fn assert_round_trip(family: MetricFamily, value: f64) -> Result<(), TestCaseError> {
    let text = family.format(value);
    let parsed = family
        .parse(&text)
        .map_err(|e| TestCaseError::fail(format!("'{text}' did not parse: {e}")))?;
    prop_assert!(
        (parsed - value).abs() <= display_tolerance(family, value),
        "{} formatted as '{}' parsed back as {}",
        value,
        text,
        parsed
    );
    Ok(())
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_time_round_trip(value in 0.0f64..1e7) {
        assert_round_trip(MetricFamily::Time, value)?;
    }

    #[test]
    fn prop_memory_round_trip(value in 0.0f64..1e9) {
        assert_round_trip(MetricFamily::Memory, value)?;
    }

    #[test]
    fn prop_scalar_round_trip(value in 0.0f64..1e12) {
        assert_round_trip(MetricFamily::Scalar, value)?;
    }

    #[test]
    fn prop_scalar_multiplier(whole in 0u32..100_000, suffix in prop::sample::select(vec![("", 1.0), ("K", 1e3), ("M", 1e6), ("G", 1e9)])) {
        let (unit, factor) = suffix;
        let parsed = MetricFamily::Scalar.parse(&format!("{whole}{unit}")).unwrap();
        prop_assert_eq!(parsed, whole as f64 * factor);
    }

    #[test]
    fn prop_memory_multiplier(whole in 0u32..100_000, suffix in prop::sample::select(vec![("KB", 1.0), ("MB", 1e3), ("GB", 1e6)])) {
        let (unit, factor) = suffix;
        let parsed = MetricFamily::Memory.parse(&format!("{whole} {unit}")).unwrap();
        prop_assert_eq!(parsed, whole as f64 * factor);
    }

    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,24}") {
        for family in [MetricFamily::Time, MetricFamily::Memory, MetricFamily::Scalar] {
            let _ = family.parse(&text);
        }
    }
}
