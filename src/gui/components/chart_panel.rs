// src/gui/components/chart_panel.rs
use eframe::egui::{self, RichText};

use crate::{chart::RenderPath, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(out) = app.output.as_ref() else {
        ui.heading("Word frequency");
        return;
    };
    let chart = out.chart.as_ref();

    ui.heading(out.page_title.as_deref().unwrap_or(&out.url));
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("{} · {}", chart.kind().label(), chart.backend().label()));
        let path = match chart.render_path() {
            RenderPath::InlineMarkup => "inline markup",
            RenderPath::NativeWidget => "native widget",
        };
        ui.weak(path);
        if !chart.support().is_native() {
            ui.label(
                RichText::new(format!("drawn as {}", chart.support().primitive()))
                    .color(egui::Color32::from_rgb(200, 120, 0)),
            );
        }
    });

    if app.state.gui.show_document {
        let doc = chart.to_json_pretty();
        egui::ScrollArea::vertical()
            .id_salt("chart_document")
            .max_height(240.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut doc.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}
