// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod gui;
pub mod pipeline;
pub mod present;
pub mod progress;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineOutput, PipelineRequest};
