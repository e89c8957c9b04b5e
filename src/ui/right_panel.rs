//! # Right Panel - Run Parameters
//!
//! When the log title is a simulation run header, its parameters are listed in
//! a two-column table. The title itself is left untouched in the plot area.

use crate::ui::AppState;
use eframe::egui;

/// Render the run parameter panel, or nothing if the title is not a run header.
pub fn render(ctx: &egui::Context, state: &AppState) {
    let Some(header) = &state.chart.run_header else {
        return;
    };

    egui::SidePanel::right("run_parameters").default_width(260.0).show(ctx, |ui| {
        use egui_extras::{Column, TableBuilder};

        ui.heading("Run");
        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Body) * 1.3;
        let rows = header.rows();
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(110.0).at_least(60.0)) // Label
            .column(Column::remainder()) // Value
            .body(|body| {
                body.rows(row_height, rows.len(), |mut row| {
                    let (label, value) = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(*label);
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(value).monospace());
                    });
                });
            });
    });
}
