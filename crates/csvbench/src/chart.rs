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

//! Grouped horizontal bar charts, one per registered metric.
//!
//! Layout and drawing are separate steps. [`ChartData::build`] is a pure
//! function of the result table that converts every raw value through the
//! metric's codec and places each bar; [`render_chart`] only draws what the
//! layout says. Test inputs form the row groups on the vertical axis, and
//! within a group each subject gets one bar in configured order.

use crate::config::{BenchConfig, Subject};
use crate::error::{BenchError, Result};
use crate::metrics::{registered_metrics, MetricSpec};
use crate::table::ResultTable;
use crate::units::UnitCodec;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Thickness of one bar in row-group units.
pub const BAR_HEIGHT: f64 = 0.14;

const TITLE_FONT_SIZE: u32 = 40;
const AXIS_LABEL_FONT_SIZE: u32 = 26;
const TICK_LABEL_FONT_SIZE: u32 = 20;
const LEGEND_FONT_SIZE: u32 = 20;
const DATA_LABEL_FONT_SIZE: u32 = 16;

const EDGE_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);

// Headroom to the right of the longest bar for its value label.
const VALUE_AXIS_HEADROOM: f64 = 1.15;

/// Offset of a subject's bar from its group centre.
///
/// Offsets for `count` subjects are `BAR_HEIGHT` apart and symmetric about
/// zero, so bars within a group never overlap.
pub fn bar_offset(index: usize, count: usize) -> f64 {
    (index as f64 - count as f64 / 2.0 + 0.5) * BAR_HEIGHT
}

/// One bar: a subject's canonical value for one test input.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Test input name (row group).
    pub test: String,
    /// Bar centre on the group axis.
    pub center: f64,
    /// Canonical value.
    pub value: f64,
    /// Value label, formatted by the metric codec.
    pub label: String,
}

/// All bars of one subject, aligned with test order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Subject name, shown in the legend.
    pub subject: String,
    /// Fill color.
    pub color: (u8, u8, u8),
    /// One bar per test input.
    pub bars: Vec<Bar>,
}

/// Layout of one metric's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Metric being charted.
    pub metric: &'static MetricSpec,
    /// Row group labels in table order.
    pub tests: Vec<String>,
    /// One series per subject in configured order.
    pub series: Vec<Series>,
}

impl ChartData {
    /// Lays out the chart for `metric` from the result table.
    ///
    /// Fails when any (test, subject) pair lacks the metric or its raw value
    /// does not parse.
    pub fn build(
        metric: &'static MetricSpec,
        table: &ResultTable,
        subjects: &[Subject],
    ) -> Result<Self> {
        let count = subjects.len();
        let mut series = Vec::with_capacity(count);

        for (index, subject) in subjects.iter().enumerate() {
            let offset = bar_offset(index, count);
            let mut bars = Vec::with_capacity(table.len());
            for (group, row) in table.rows().iter().enumerate() {
                let raw = table.raw_value(row, &subject.name, metric.key)?;
                let value = metric.parse(&raw)?;
                bars.push(Bar {
                    test: row.test.name.clone(),
                    center: group as f64 + offset,
                    value,
                    label: metric.format(value),
                });
            }
            series.push(Series {
                subject: subject.name.clone(),
                color: subject.rgb()?,
                bars,
            });
        }

        Ok(Self {
            metric,
            tests: table.test_names().into_iter().map(str::to_string).collect(),
            series,
        })
    }

    /// Iterates over every bar, series by series.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.series.iter().flat_map(|series| series.bars.iter())
    }

    /// Largest canonical value across all bars, zero for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars().map(|bar| bar.value).fold(0.0, f64::max)
    }

    fn value_range_end(&self) -> f64 {
        let max = self.max_value();
        if max > 0.0 {
            max * VALUE_AXIS_HEADROOM
        } else {
            1.0
        }
    }
}

/// Lays out every registered metric in registration order.
pub fn build_all(table: &ResultTable, subjects: &[Subject]) -> Result<Vec<ChartData>> {
    registered_metrics()
        .iter()
        .map(|metric| ChartData::build(metric, table, subjects))
        .collect()
}

fn drawing_error<E: Display>(path: &Path) -> impl FnOnce(E) -> BenchError + '_ {
    move |e| BenchError::chart(path, e)
}

/// Draws one chart as SVG at `path`.
pub fn render_chart(data: &ChartData, path: &Path, size: (u32, u32)) -> Result<()> {
    let metric = data.metric;
    let groups = data.tests.len();

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(metric.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(30)
        .x_label_area_size(80)
        .y_label_area_size(460)
        .build_cartesian_2d(0.0..data.value_range_end(), -0.5..(groups as f64 - 0.5))
        .map_err(drawing_error(path))?;

    let tests = &data.tests;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(groups.max(1))
        .y_label_formatter(&|y| {
            let idx = y.round();
            if idx >= 0.0 && (y - idx).abs() < 0.3 {
                tests.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .x_labels(8)
        .x_label_formatter(&|x| metric.format(*x))
        .x_desc(metric.axis_label)
        .y_desc("Test Files")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let half = BAR_HEIGHT / 2.0;
    let label_gap = data.value_range_end() * 0.005;

    for series in &data.series {
        let (r, g, b) = series.color;
        let color = RGBColor(r, g, b);

        chart
            .draw_series(series.bars.iter().map(|bar| {
                Rectangle::new(
                    [(0.0, bar.center - half), (bar.value, bar.center + half)],
                    color.filled(),
                )
            }))
            .map_err(drawing_error(path))?
            .label(series.subject.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 24, y + 8)], color.filled()));

        chart
            .draw_series(series.bars.iter().map(|bar| {
                Rectangle::new(
                    [(0.0, bar.center - half), (bar.value, bar.center + half)],
                    EDGE_COLOR.stroke_width(1),
                )
            }))
            .map_err(drawing_error(path))?;

        chart
            .draw_series(series.bars.iter().map(|bar| {
                Text::new(
                    bar.label.clone(),
                    (bar.value + label_gap, bar.center),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Left, VPos::Center)),
                )
            }))
            .map_err(drawing_error(path))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    root.present().map_err(drawing_error(path))?;
    debug!(metric = metric.key, path = %path.display(), "rendered chart");
    Ok(())
}

/// Renders every registered metric into `dir` as `<metric key>.svg`.
///
/// All layouts are built before the first file is written, so a value that
/// fails to parse leaves `dir` untouched.
pub fn render_all(table: &ResultTable, config: &BenchConfig, dir: &Path) -> Result<Vec<PathBuf>> {
    let charts = build_all(table, &config.subjects)?;
    fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))?;

    let mut written = Vec::with_capacity(charts.len());
    for data in &charts {
        let path = dir.join(data.metric.chart_file_name());
        render_chart(data, &path, config.output.chart_size())?;
        info!(metric = data.metric.key, path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestInput;
    use crate::metrics::require_metric;
    use crate::report::RawMetricRecord;
    use crate::table::SubjectRecord;

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new("A", "./a", "#EBB101"),
            Subject::new("B", "./b", "#9AC3B4"),
        ]
    }

    fn record(wall_time: &str, peak_rss: &str) -> RawMetricRecord {
        let mut record: RawMetricRecord = registered_metrics()
            .iter()
            .map(|m| (m.key, "1.5K"))
            .collect();
        record.insert("wall_time", wall_time);
        record.insert("peak_rss", peak_rss);
        record
    }

    fn table() -> ResultTable {
        let mut table = ResultTable::new();
        table.record(
            &TestInput::new("t1.csv", "T1"),
            vec![
                SubjectRecord::new("A", record("10ms", "2MB")),
                SubjectRecord::new("B", record("1.5s", "512KB")),
            ],
        );
        table.record(
            &TestInput::new("t2.csv", "T2"),
            vec![
                SubjectRecord::new("A", record("150us", "1GB")),
                SubjectRecord::new("B", record("3ms", "900KB")),
            ],
        );
        table
    }

    #[test]
    fn test_offsets_symmetric() {
        for count in 1..=6 {
            let offsets: Vec<f64> = (0..count).map(|i| bar_offset(i, count)).collect();
            let sum: f64 = offsets.iter().sum();
            assert!(sum.abs() < 1e-9, "count {count}: {offsets:?}");
            for pair in offsets.windows(2) {
                assert!((pair[1] - pair[0] - BAR_HEIGHT).abs() < 1e-9);
            }
        }
        assert!((bar_offset(0, 2) + 0.07).abs() < 1e-9);
        assert!((bar_offset(1, 2) - 0.07).abs() < 1e-9);
        assert_eq!(bar_offset(0, 1), 0.0);
    }

    #[test]
    fn test_build_layout() {
        let metric = require_metric("wall_time").unwrap();
        let data = ChartData::build(metric, &table(), &subjects()).unwrap();

        assert_eq!(data.tests, vec!["T1", "T2"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].subject, "A");
        assert_eq!(data.series[0].color, (0xEB, 0xB1, 0x01));

        let a = &data.series[0].bars;
        let b = &data.series[1].bars;
        assert!(a[0].center < 0.0 && b[0].center > 0.0);
        assert!((a[0].center + b[0].center).abs() < 1e-9);
        assert!(a[1].center < 1.0 && b[1].center > 1.0);

        assert_eq!(a[0].value, 10.0);
        assert_eq!(b[0].value, 1500.0);
        assert!((a[1].value - 0.15).abs() < 1e-12);
        assert_eq!(a[0].label, "10.00 ms");
        assert_eq!(b[0].label, "1.500 s");
        assert_eq!(a[1].label, "150 µs");
        assert_eq!(data.max_value(), 1500.0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let metric = require_metric("peak_rss").unwrap();
        let table = table();
        let first = ChartData::build(metric, &table, &subjects()).unwrap();
        let second = ChartData::build(metric, &table, &subjects()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.series[0].bars[1].label, "1.000 GB");
    }

    #[test]
    fn test_unknown_unit_fails_build() {
        let mut table = ResultTable::new();
        table.record(
            &TestInput::new("t.csv", "T"),
            vec![
                SubjectRecord::new("A", record("10 fortnights", "1MB")),
                SubjectRecord::new("B", record("1ms", "1MB")),
            ],
        );
        let metric = require_metric("wall_time").unwrap();
        let err = ChartData::build(metric, &table, &subjects()).unwrap_err();
        assert!(matches!(err, BenchError::UnknownUnit { ref unit, .. } if unit == "fortnights"));
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let metric = require_metric("wall_time").unwrap();
        let data = ChartData::build(metric, &table(), &subjects()).unwrap();
        let path = dir.path().join("wall_time.svg");

        render_chart(&data, &path, (800, 600)).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(metric.title));
        assert!(svg.contains("10.00 ms"));
    }

    #[test]
    fn test_render_all_one_file_per_metric() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images");
        let mut config = BenchConfig::new("/opt/poop");
        config.subjects = subjects();
        config.output.chart_width = 640;
        config.output.chart_height = 480;

        let written = render_all(&table(), &config, &out).unwrap();

        assert_eq!(written.len(), registered_metrics().len());
        for metric in registered_metrics() {
            assert!(out.join(metric.chart_file_name()).is_file());
        }
    }
}
