// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{FrequencyTable, ThresholdBounds},
    config::{self, state::AppState},
    pipeline::{Pipeline, PipelineOutput},
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Word Chart",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings_path: PathBuf,

    // built on first Analyze; owns the page/table cache
    pub pipeline: Option<Pipeline>,
    /// URL of the cached page; control changes re-run against this, not the text field
    pub last_url: Option<String>,

    // what the panels show
    pub table: Option<FrequencyTable>,
    pub bounds: Option<ThresholdBounds>,
    pub output: Option<PipelineOutput>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: backend={} chart={} segmenter={}",
            state.options.chart.backend,
            state.options.chart.kind,
            state.options.analysis.segmenter
        );
        Self {
            state,
            settings_path: config::file::default_path(),
            pipeline: None,
            last_url: None,
            table: None,
            bounds: None,
            output: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn save_settings(&self) {
        match config::file::save(&self.settings_path, &self.state) {
            Ok(()) => logd!("Settings: saved → {}", self.settings_path.display()),
            Err(e) => loge!("Settings: save failed {}: {}", self.settings_path.display(), e),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(r) = ctx.input(|i| i.viewport().inner_rect) {
            self.state.gui.window_w = r.width() as u32;
            self.state.gui.window_h = r.height() as u32;
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                components::controls::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::chart_panel::draw(ui, self);
            ui.separator();
            components::freq_table::draw(ui, self);
        });
    }
}
