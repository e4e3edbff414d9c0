// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    failed: bool,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, failed: false }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        self.failed = false;
        self.set_status(format!("Analyzing {url}"));
    }
    fn stage(&mut self, stage: Stage) {
        self.set_status(stage.label());
    }
    fn log(&mut self, msg: &str) {
        // only errors reach here; keep them visible after finish()
        self.failed = true;
        self.set_status(s!(msg));
    }
    fn finish(&mut self) {
        if !self.failed {
            self.set_status("Done");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_survives_finish() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin("https://example.com");
        p.stage(Stage::Fetch);
        assert_eq!(*status.lock().unwrap(), "Fetching page");
        p.log("Could not load the page");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Could not load the page");

        p.begin("https://example.com");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Done");
    }
}
