// src/error.rs
//! Error taxonomy for the fetch → chart pipeline.
//!
//! Every stage returns `PipelineError`; front ends turn it into an inline
//! message with [`PipelineError::user_message`] and never show a backtrace.

use thiserror::Error;

use crate::chart::{Backend, ChartKind};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No URL given")]
    MissingUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("No readable text found at {url}")]
    EmptyText { url: String },

    #[error("No words qualified for counting")]
    EmptyFrequencyTable,

    #[error("Nothing to chart: no word reaches the minimum frequency")]
    EmptyData,

    #[error("{kind} is not available as a native {backend} chart (closest: {substitute})")]
    UnsupportedCombination {
        kind: ChartKind,
        backend: Backend,
        substitute: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Warnings are user-fixable input problems; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingUrl
                | PipelineError::EmptyData
                | PipelineError::UnsupportedCombination { .. }
        )
    }

    /// One line suitable for a status bar or stderr.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::MissingUrl => s!("Please enter an article URL"),
            PipelineError::Fetch { .. } | PipelineError::InvalidUrl { .. } => {
                format!("Could not load the page, check the URL. ({self})")
            }
            other => other.to_string(),
        }
    }
}
