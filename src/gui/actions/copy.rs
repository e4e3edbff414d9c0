// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(out) = app.output.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let o = &app.state.options.output;
    let txt = export::table_to_string(&out.filtered, o.table_format, o.include_headers);
    logf!("Copy: rows={}, format={:?}", out.filtered.len(), o.table_format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
