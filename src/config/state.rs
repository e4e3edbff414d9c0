// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the URL field (not yet submitted)
    pub url_text: String,

    /// Slider value; clamped to the current table's bounds on every run
    pub min_count: u32,

    pub window_w: u32,
    pub window_h: u32,

    /// Show the backend JSON document under the table
    pub show_document: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            min_count: 1,
            window_w: 1100,
            window_h: 700,
            show_document: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
