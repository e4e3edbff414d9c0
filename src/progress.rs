// src/progress.rs
use std::fmt;

/// Pipeline stages in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Clean,
    Count,
    Filter,
    Render,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetch => "Fetching page",
            Stage::Extract => "Extracting text",
            Stage::Clean => "Cleaning text",
            Stage::Count => "Counting words",
            Stage::Filter => "Applying minimum frequency",
            Stage::Render => "Building chart",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once per run with the URL being processed.
    fn begin(&mut self, _url: &str) {}

    /// A stage is starting. Cached runs skip straight to `Filter`.
    fn stage(&mut self, _stage: Stage) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
