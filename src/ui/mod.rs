// UI module for the entity count chart window
//
// This module organizes the window into separate components:
// - `top_panel`: Summary metrics and controls
// - `right_panel`: Run parameter table (only when the title is a run header)
// - `plot`: Central line chart
// - `app_state`: Application state management and main update loop

pub mod app_state;
pub mod plot;
pub mod right_panel;
pub mod top_panel;

use eframe::egui;

use crate::config::PlotterConfig;
use crate::pipeline::{Chart, ChartRenderer};

pub use app_state::AppState;

/// Native window title.
pub const WINDOW_TITLE: &str = "Entity Count Plot";
pub const X_AXIS_LABEL: &str = "Frames";
pub const Y_AXIS_LABEL: &str = "Entity Count";

/// Renders charts in a native eframe window, blocking until it is closed.
pub struct NativeWindow {
    config: PlotterConfig,
}

impl NativeWindow {
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for NativeWindow {
    fn render(&mut self, chart: Chart) -> anyhow::Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size([self.config.window_width, self.config.window_height]),
            ..Default::default()
        };
        let config = self.config.clone();

        log::info!("Opening chart window ({} points)", chart.points.len());

        // Start the GUI on the main thread (required on macOS)
        eframe::run_native(
            WINDOW_TITLE,
            native_options,
            Box::new(move |cc| Ok(Box::new(AppState::new(chart, config, cc.storage)))),
        )
        .map_err(|e| anyhow::anyhow!("Chart window failed: {}", e))?;

        log::info!("Chart window closed");
        Ok(())
    }
}
