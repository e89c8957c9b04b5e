//! # Application State Management
//!
//! This module implements the central `AppState` struct which holds the chart
//! being displayed and the window's own settings. It implements the
//! `eframe::App` trait to integrate with the egui application framework.
//!
//! ## Responsibilities
//!
//! - Holds the current chart and the settings it was built with
//! - Reloads the chart from another log file picked by the user
//! - Shows load failures in an alert window, keeping the previous chart
//! - Coordinates rendering of all UI panels (top, right, plot)
//! - Persists user settings (last directory, point markers) across sessions

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::PlotterConfig;
use crate::pipeline::{Chart, build_chart};

/// Central application state for the chart window.
pub struct AppState {
    /// Optional alert message to display in a modal dialog.
    pub alert: Option<String>,
    /// Chart currently on screen.
    pub chart: Chart,
    /// Settings the chart was built with. `log_path` follows the file on screen.
    pub config: PlotterConfig,
    /// Whether to draw a marker at every sample in addition to the line.
    pub show_points: bool,
    /// Set for one frame to make the plot forget zoom/pan and fit the data again.
    pub reset_view: bool,
    /// Last directory used for the log file picker.
    pub last_open_dir_log: Option<String>,
}

/// Settings persisted across application sessions.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_open_dir_log: Option<String>,
    show_points: Option<bool>,
}

impl AppState {
    /// Create a new AppState, loading persisted settings if available.
    ///
    /// # Parameters
    ///
    /// * `chart` - The chart to display initially
    /// * `config` - Settings used to build it (reused for reloads)
    /// * `storage` - Optional persistent storage for loading saved settings
    pub fn new(chart: Chart, config: PlotterConfig, storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted: PersistedSettings = storage.and_then(|s| eframe::get_value(s, "app_settings")).unwrap_or_default();

        Self {
            alert: None,
            chart,
            config,
            show_points: persisted.show_points.unwrap_or(false),
            reset_view: false,
            last_open_dir_log: persisted.last_open_dir_log,
        }
    }

    /// Open a native file picker for another log file and plot it.
    ///
    /// Cancelling the picker leaves everything unchanged.
    pub fn open_log_file_picker(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("log", &["txt", "log"]);
        if let Some(dir) = &self.last_open_dir_log {
            dialog = dialog.set_directory(dir);
        }
        if let Some(file) = dialog.pick_file() {
            // Remember directory for next time
            if let Some(parent) = file.parent() {
                self.last_open_dir_log = Some(parent.to_string_lossy().to_string());
            }
            self.reload(file);
        }
    }

    /// Rebuild the chart from `path` with the current scan settings.
    ///
    /// On failure the previous chart stays on screen and the error is shown as an alert.
    pub fn reload(&mut self, path: PathBuf) {
        match build_chart(&path, self.config.scan_mode, self.config.length_policy) {
            Ok(chart) => {
                self.chart = chart;
                self.config.log_path = path;
                self.reset_view = true;
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                self.alert = Some(format!("Failed to load {}:\n{}", path.display(), e));
            }
        }
    }
}

impl eframe::App for AppState {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_open_dir_log: self.last_open_dir_log.clone(),
            show_points: Some(self.show_points),
        };
        eframe::set_value(storage, "app_settings", &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(alert) = self.alert.clone() {
            egui::Window::new("Alert")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(alert);
                        ui.add_space(20.0);

                        if ui.button("OK").clicked() {
                            self.alert = None;
                        }
                        ui.add_space(10.0);
                    });
                });
        }

        // Panels layout: top (fixed), right (only with a run header), plot fills the rest
        super::top_panel::render(ctx, self);
        super::right_panel::render(ctx, self);
        super::plot::render(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_chart() -> Chart {
        Chart {
            title: "previous".to_string(),
            points: vec![[0.0, 1.0]],
            run_header: None,
        }
    }

    #[test]
    fn test_reload_replaces_chart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "next run\nFrame 0, EntityCount: 9\nFrame 250, EntityCount: 4\n").unwrap();
        let mut state = AppState::new(empty_chart(), PlotterConfig::default(), None);

        state.reload(file.path().to_path_buf());

        assert!(state.alert.is_none());
        assert_eq!(state.chart.title, "next run");
        assert_eq!(state.chart.points, vec![[0.0, 9.0], [250.0, 4.0]]);
        assert_eq!(state.config.log_path, file.path());
        assert!(state.reset_view);
    }

    #[test]
    fn test_failed_reload_keeps_previous_chart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "broken\nFrame\n").unwrap();
        let mut state = AppState::new(empty_chart(), PlotterConfig::default(), None);

        state.reload(file.path().to_path_buf());

        assert_eq!(state.chart, empty_chart());
        assert_eq!(state.config.log_path, PlotterConfig::default().log_path);
        assert!(state.alert.as_ref().unwrap().contains("no following value"));
    }
}
