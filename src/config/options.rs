// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::analysis::segment::SegmenterKind;
use crate::chart::{Backend, ChartKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub analysis: AnalysisOptions,
    pub chart: ChartOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: FETCH_TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

/// Everything that changes the frequency table. Two requests with equal
/// `AnalysisOptions` and URL share one cached analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub top_n: usize,
    /// Minimum token length in chars.
    pub min_token_len: usize,
    /// Only Han ideographs, ASCII letters and digits.
    pub strict: bool,
    pub segmenter: SegmenterKind,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            strict: true,
            segmenter: SegmenterKind::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub backend: Backend,
    pub kind: ChartKind,
    /// When false, cells without a native primitive are reported instead of substituted.
    pub allow_substitution: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            backend: Backend::ECharts,
            kind: ChartKind::WordCloud,
            allow_substitution: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn ext(&self) -> &'static str {
        match self { TableFormat::Csv => "csv", TableFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { TableFormat::Csv => ',', TableFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(TableFormat::Csv),
            "tsv" => Some(TableFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Where the chart page is written.
    pub page_path: PathBuf,
    pub table_format: TableFormat,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            page_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_PAGE_FILE),
            table_format: TableFormat::Csv,
            include_headers: true,
        }
    }
}
