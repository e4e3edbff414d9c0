// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use wordchart::{config, gui, log};

fn main() {
    log::init(false);
    let state = config::file::load(&config::file::default_path());

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
