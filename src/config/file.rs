// src/config/file.rs
//
// `key=value` settings file shared by the GUI and the CLI.
// Unknown keys are ignored; bad values keep the default.

use std::{fs, io, path::{Path, PathBuf}};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::TableFormat;
use super::state::AppState;
use crate::analysis::segment::SegmenterKind;
use crate::chart::{Backend, ChartKind};

/// Smaller saved sizes are treated as garbage and ignored.
const MIN_WINDOW_PX: u32 = 200;

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

pub fn load(path: &Path) -> AppState {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(_) => AppState::default(),
    }
}

pub fn parse(text: &str) -> AppState {
    let mut st = AppState::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        apply(&mut st, key, val);
    }
    st
}

fn flag(val: &str) -> Option<bool> {
    match val {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn apply(st: &mut AppState, key: &str, val: &str) {
    let opts = &mut st.options;
    match key {
        "url" => st.gui.url_text = s!(val),
        "backend" => if let Some(b) = Backend::parse(val) { opts.chart.backend = b },
        "chart" => if let Some(k) = ChartKind::parse(val) { opts.chart.kind = k },
        "allow_substitution" => if let Some(b) = flag(val) { opts.chart.allow_substitution = b },
        "top_n" => if let Ok(n) = val.parse::<usize>() { if n > 0 { opts.analysis.top_n = n } },
        "min_token_len" => if let Ok(n) = val.parse::<usize>() { if n > 0 { opts.analysis.min_token_len = n } },
        "strict" => if let Some(b) = flag(val) { opts.analysis.strict = b },
        "segmenter" => if let Some(s) = SegmenterKind::parse(val) { opts.analysis.segmenter = s },
        "timeout_secs" => if let Ok(n) = val.parse::<u64>() { if n > 0 { opts.fetch.timeout_secs = n } },
        "page_path" => if !val.is_empty() { opts.output.page_path = PathBuf::from(val) },
        "table_format" => if let Some(f) = TableFormat::parse(val) { opts.output.table_format = f },
        "include_headers" => if let Some(b) = flag(val) { opts.output.include_headers = b },
        "min_count" => if let Ok(n) = val.parse::<u32>() { st.gui.min_count = n.max(1) },
        "show_document" => if let Some(b) = flag(val) { st.gui.show_document = b },
        "window_w" => if let Ok(n) = val.parse::<u32>() { if n >= MIN_WINDOW_PX { st.gui.window_w = n } },
        "window_h" => if let Ok(n) = val.parse::<u32>() { if n >= MIN_WINDOW_PX { st.gui.window_h = n } },
        _ => logd!("Settings: ignoring unknown key '{}'", key),
    }
}

pub fn to_string(st: &AppState) -> String {
    let o = &st.options;
    let b = |v: bool| if v { 1 } else { 0 };
    let mut s = s!();
    s.push_str(&format!("url={}\n", st.gui.url_text));
    s.push_str(&format!("backend={}\n", o.chart.backend.key()));
    s.push_str(&format!("chart={}\n", o.chart.kind.key()));
    s.push_str(&format!("allow_substitution={}\n", b(o.chart.allow_substitution)));
    s.push_str(&format!("top_n={}\n", o.analysis.top_n));
    s.push_str(&format!("min_token_len={}\n", o.analysis.min_token_len));
    s.push_str(&format!("strict={}\n", b(o.analysis.strict)));
    s.push_str(&format!("segmenter={}\n", o.analysis.segmenter.key()));
    s.push_str(&format!("timeout_secs={}\n", o.fetch.timeout_secs));
    s.push_str(&format!("page_path={}\n", o.output.page_path.display()));
    s.push_str(&format!("table_format={}\n", o.output.table_format.ext()));
    s.push_str(&format!("include_headers={}\n", b(o.output.include_headers)));
    s.push_str(&format!("min_count={}\n", st.gui.min_count));
    s.push_str(&format!("show_document={}\n", b(st.gui.show_document)));
    s.push_str(&format!("window_w={}\n", st.gui.window_w));
    s.push_str(&format!("window_h={}\n", st.gui.window_h));
    s
}

pub fn save(path: &Path, st: &AppState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_string(st))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_known_keys_and_skips_noise() {
        let st = parse(
            "# saved by wordchart\n\
             url = https://example.com/a\n\
             backend=plotly\n\
             chart=radar\n\
             strict=0\n\
             top_n=abc\n\
             mystery=42\n",
        );
        assert_eq!(st.gui.url_text, "https://example.com/a");
        assert_eq!(st.options.chart.backend, Backend::Plotly);
        assert_eq!(st.options.chart.kind, ChartKind::Radar);
        assert!(!st.options.analysis.strict);
        // invalid value keeps default
        assert_eq!(st.options.analysis.top_n, 20);
    }

    #[test]
    fn zero_values_are_rejected() {
        let st = parse("top_n=0\nmin_count=0\ntimeout_secs=0\n");
        assert_eq!(st.options.analysis.top_n, 20);
        assert_eq!(st.gui.min_count, 1);
        assert_eq!(st.options.fetch.timeout_secs, 15);
    }

    #[test]
    fn written_settings_load_back() {
        let mut st = AppState::default();
        st.gui.url_text = s!("https://example.org/");
        st.options.chart.backend = Backend::VegaLite;
        st.options.chart.kind = ChartKind::Funnel;
        st.options.output.table_format = TableFormat::Tsv;
        st.gui.min_count = 3;
        st.gui.window_w = 1400;
        st.gui.window_h = 900;

        let back = parse(&to_string(&st));
        assert_eq!(back.gui.url_text, st.gui.url_text);
        assert_eq!(back.options, st.options);
        assert_eq!(back.gui.min_count, 3);
        assert_eq!((back.gui.window_w, back.gui.window_h), (1400, 900));
    }

    #[test]
    fn tiny_window_sizes_keep_the_default() {
        let st = parse("window_w=0\nwindow_h=12\n");
        let d = AppState::default();
        assert_eq!((st.gui.window_w, st.gui.window_h), (d.gui.window_w, d.gui.window_h));
    }
}
