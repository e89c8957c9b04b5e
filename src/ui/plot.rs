//! Central panel: the chart title and the entity count line plot.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use super::{AppState, X_AXIS_LABEL, Y_AXIS_LABEL};

/// Render the chart into the remaining central area.
///
/// The title is drawn exactly as it appears in the log, above a single line
/// of entity count versus frame.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&state.chart.title).size(state.config.title_font_size));
        });
        ui.add_space(4.0);

        let mut plot = Plot::new("entity_count_plot")
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .label_formatter(|_name, value| format!("{}: {:.0}\n{}: {:.0}", X_AXIS_LABEL, value.x, Y_AXIS_LABEL, value.y));

        if state.reset_view {
            plot = plot.reset();
            state.reset_view = false;
        }

        plot.show(ui, |plot_ui| {
            plot_ui.line(Line::new(Y_AXIS_LABEL, PlotPoints::from(state.chart.points.clone())).width(1.5));
            if state.show_points {
                plot_ui.points(Points::new("Samples", PlotPoints::from(state.chart.points.clone())).radius(2.5));
            }
        });
    });
}
