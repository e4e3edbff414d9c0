// src/analysis/mod.rs
//! Cleaned text → ranked word counts → threshold cut.

pub mod frequency;
pub mod segment;
pub mod threshold;

pub use frequency::{frequency, FrequencyEntry, FrequencyTable, TokenFilter};
pub use segment::{Segmenter, SegmenterKind};
pub use threshold::{filter, FilteredTable, ThresholdBounds};
