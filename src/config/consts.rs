// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("wordchart/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// Local store (logs, settings)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "wordchart.cfg";
pub const DEFAULT_LOG_FILTER: &str = "wordchart=info";

// Analysis
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_PAGE_FILE: &str = "chart.html";
pub const CHART_HEIGHT_PX: u32 = 600;
