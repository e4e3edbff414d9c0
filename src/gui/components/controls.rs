// src/gui/components/controls.rs
//
// Left panel: URL, backend, chart type, minimum frequency, actions.
// Widgets only record what was clicked; the actions run after the last
// borrow of `app` inside the panel has ended.

use eframe::egui::{self, ComboBox, Slider, TextEdit};

use crate::{
    chart::{Backend, ChartKind},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut analyze = false;
    let mut rerun = false;
    let mut open = false;
    let mut copy = false;

    // --- URL ---
    ui.strong("Article URL");
    let resp = ui.add(
        TextEdit::singleline(&mut app.state.gui.url_text)
            .hint_text("https://…")
            .desired_width(f32::INFINITY),
    );
    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        analyze = true;
    }

    let red = egui::Color32::from_rgb(220, 30, 30);
    let black = egui::Color32::BLACK;
    let button_analyze = ui.add(
        egui::Button::new(egui::RichText::new("ANALYZE").color(black).strong()).fill(red),
    );
    if button_analyze.clicked() {
        analyze = true;
    }

    ui.separator();

    // --- Backend + chart type ---
    {
        let chart = &mut app.state.options.chart;

        let prev_backend = chart.backend;
        ComboBox::from_label("Backend")
            .selected_text(chart.backend.label())
            .show_ui(ui, |ui| {
                for b in Backend::ALL {
                    ui.selectable_value(&mut chart.backend, b, b.label());
                }
            });
        if chart.backend != prev_backend {
            logf!("UI: Backend → {}", chart.backend);
            rerun = true;
        }

        ui.add_space(4.0);
        ui.strong("Chart type");
        let prev_kind = chart.kind;
        for k in ChartKind::ALL {
            ui.radio_value(&mut chart.kind, k, k.label());
        }
        if chart.kind != prev_kind {
            logf!("UI: Chart → {}", chart.kind);
            rerun = true;
        }

        if ui
            .checkbox(&mut chart.allow_substitution, "Substitute missing chart types")
            .on_hover_text("Draw the closest available chart when a backend lacks the type")
            .changed()
        {
            logf!("UI: allow_substitution → {}", chart.allow_substitution);
            rerun = true;
        }
    }

    ui.separator();

    // --- Minimum frequency, bounded by the current table ---
    ui.strong("Minimum frequency");
    match app.bounds {
        Some(b) => {
            let mut v = b.clamp(app.state.gui.min_count);
            if ui.add(Slider::new(&mut v, b.range())).changed() {
                logd!("UI: min_count → {}", v);
                app.state.gui.min_count = v;
                rerun = true;
            }
        }
        None => {
            let mut v = 1u32;
            ui.add_enabled(false, Slider::new(&mut v, 1..=1));
        }
    }

    ui.separator();

    // --- Output actions ---
    let has_output = app.output.is_some();
    ui.horizontal(|ui| {
        if ui.add_enabled(has_output, egui::Button::new("Open chart")).clicked() {
            open = true;
        }
        if ui.add_enabled(has_output, egui::Button::new("Copy table")).clicked() {
            copy = true;
        }
    });
    ui.checkbox(&mut app.state.gui.show_document, "Show chart document");

    if analyze {
        actions::analyze(app);
    } else if rerun {
        actions::rerun(app);
    }
    if open {
        actions::open_chart(app);
    }
    if copy {
        actions::copy(app, ui.ctx());
    }
}
