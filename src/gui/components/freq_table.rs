// src/gui/components/freq_table.rs
//
// Full frequency table; rows under the current threshold are dimmed.

use eframe::egui::{self, ProgressBar};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

fn cell(ui: &mut egui::Ui, text: String, kept: bool) {
    if kept { ui.label(text); } else { ui.weak(text); }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(table) = app.table.as_ref() else {
        ui.weak("No data yet. Enter a URL and press Analyze.");
        return;
    };

    let max = table.max_count().unwrap_or(1).max(1) as f32;
    let min_count = app.output.as_ref().map(|o| o.min_count).unwrap_or(app.state.gui.min_count);

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(36.0))
        .column(Column::initial(180.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::exact(60.0))
        .column(Column::remainder().at_least(80.0))
        .header(24.0, |mut header| {
            for title in ["#", "Word", "Count", ""] {
                header.col(|ui| { ui.strong(title); });
            }
        })
        .body(|mut body| {
            for (i, e) in table.iter().enumerate() {
                let kept = e.count >= min_count;
                body.row(20.0, |mut row| {
                    row.col(|ui| cell(ui, (i + 1).to_string(), kept));
                    row.col(|ui| cell(ui, e.token.clone(), kept));
                    row.col(|ui| cell(ui, e.count.to_string(), kept));
                    row.col(|ui| {
                        ui.add(ProgressBar::new(e.count as f32 / max).desired_height(12.0));
                    });
                });
            }
        });
}
