//! # Top Panel - Summary and Controls
//!
//! Renders a single-row top panel with:
//! - Controls: open another log, reset the view, toggle point markers
//! - Summary: file name, number of samples, frame range, peak and final entity count

use crate::ui::AppState;
use eframe::egui;

/// Render the top panel with controls and chart summary.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Mutable application state for reading the chart and updating controls
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("chart_summary").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Open log...").clicked() {
                state.open_log_file_picker();
            }
            if ui.button("Reset view").clicked() {
                state.reset_view = true;
            }
            ui.checkbox(&mut state.show_points, "Show samples");

            ui.separator();

            let file_name = state
                .config
                .log_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| state.config.log_path.display().to_string());
            ui.label(egui::RichText::new(file_name).monospace());

            ui.separator();
            ui.label("Samples:");
            ui.label(egui::RichText::new(state.chart.points.len().to_string()).strong());

            ui.label("Frames:");
            let frames_str = match state.chart.frame_range() {
                Some((first, last)) => format!("{}-{}", first, last),
                None => "--".to_string(),
            };
            ui.label(egui::RichText::new(frames_str).strong());

            ui.label("Peak:");
            ui.label(egui::RichText::new(format_count(state.chart.peak_entity_count())).strong());

            ui.label("Final:");
            ui.label(egui::RichText::new(format_count(state.chart.final_entity_count())).strong());
        });
    });
}

fn format_count(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string())
}
