//! The load -> extract -> render pipeline.
//!
//! Loading and extraction are pure; rendering goes through [`ChartRenderer`]
//! so the chart handed to the display can be swapped out.

use anyhow::Context;
use std::path::Path;

use crate::analyzer::{AnalyzerError, LengthPolicy, RunHeader, ScanMode, extract_series_with, load, parse_run_header};
use crate::config::PlotterConfig;

/// Everything needed to draw one entity count chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// First log line, shown verbatim.
    pub title: String,
    /// `(frame, entity_count)` pairs in log order.
    pub points: Vec<[f64; 2]>,
    /// Run parameters, if the title is a simulation run header.
    pub run_header: Option<RunHeader>,
}

impl Chart {
    /// First and last frame on the chart.
    pub fn frame_range(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?[0], self.points.last()?[0]))
    }

    pub fn peak_entity_count(&self) -> Option<f64> {
        self.points.iter().map(|p| p[1]).reduce(f64::max)
    }

    pub fn final_entity_count(&self) -> Option<f64> {
        self.points.last().map(|p| p[1])
    }
}

/// Displays a finished chart. Implementations may block until the user is done.
pub trait ChartRenderer {
    fn render(&mut self, chart: Chart) -> anyhow::Result<()>;
}

/// Load a log file and turn it into a chart.
///
/// # Parameters
///
/// * `path` - Log file to read
/// * `scan_mode` - Token positions inspected for markers
/// * `length_policy` - Handling of unequal series
///
/// # Returns
///
/// The chart, or the first loading / extraction error.
pub fn build_chart(path: &Path, scan_mode: ScanMode, length_policy: LengthPolicy) -> Result<Chart, AnalyzerError> {
    let log = load(path)?;
    let series = extract_series_with(&log.tokens, scan_mode)?;
    let points = series.paired(length_policy)?;
    let run_header = parse_run_header(&log.title);

    log::info!(
        "{}: {} points (frames: {}, entity counts: {})",
        path.display(),
        points.len(),
        series.frames.len(),
        series.entity_counts.len()
    );

    Ok(Chart {
        title: log.title,
        points,
        run_header,
    })
}

/// Run the whole pipeline with the given settings.
///
/// Nothing is rendered unless loading and extraction both succeed.
pub fn run<R: ChartRenderer>(config: &PlotterConfig, renderer: &mut R) -> anyhow::Result<()> {
    log::info!("Plotting {}", config.log_path.display());

    let chart = build_chart(&config.log_path, config.scan_mode, config.length_policy)
        .with_context(|| format!("Failed to build chart from {}", config.log_path.display()))?;

    renderer.render(chart)
}
