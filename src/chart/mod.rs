// src/chart/mod.rs
//! # Chart adapter
//!
//! Turns a [`FilteredTable`] into a backend-native chart document.
//!
//! ## Shape
//! - [`ChartKind`] × [`Backend`] is a closed 7 × 3 matrix. [`cell`] maps every
//!   pair to a builder function and a [`Support`] tag; the `match` is
//!   exhaustive, so adding a kind or backend fails to compile until every
//!   cell is filled in.
//! - Builders never see an empty dataset: [`render`] goes through
//!   [`ChartDataset::from_table`], which returns `EmptyData` first.
//! - Output is a boxed [`ChartArtifact`]; callers (CLI, GUI, `present`) only
//!   use the trait and never the backend structs.
//!
//! ## Substitutions
//! Where a backend has no direct primitive the cell is tagged
//! `Support::Substituted` with the primitive used instead:
//!
//! | kind | ECharts | Plotly | Vega-Lite |
//! |---|---|---|---|
//! | word-cloud | `wordCloud` | sized text scatter | sized text marks |
//! | funnel | `funnel` | `funnel` | horizontal bar, descending |
//! | radar | `radar` | `scatterpolar` | radial arcs |
//!
//! All other cells are native. With `allow_substitution == false` a
//! substituted cell is reported as `UnsupportedCombination` instead.

use std::fmt;

use serde_json::Value;

use crate::analysis::FilteredTable;
use crate::error::PipelineError;

pub mod data;
pub mod echarts;
pub mod plotly;
pub mod vegalite;

pub use data::{ChartDataset, ChartPoint, RadarAxis};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    WordCloud,
    Bar,
    Pie,
    Line,
    Scatter,
    Funnel,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Funnel,
        ChartKind::Radar,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "word-cloud",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Funnel => "funnel",
            ChartKind::Radar => "radar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word cloud",
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
            ChartKind::Funnel => "Funnel",
            ChartKind::Radar => "Radar",
        }
    }

    /// Accepts keys and labels, case-insensitive; `wordcloud` / `word_cloud` too.
    pub fn parse(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.key().replace('-', "") == norm)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    ECharts,
    Plotly,
    VegaLite,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::ECharts, Backend::Plotly, Backend::VegaLite];

    pub fn key(&self) -> &'static str {
        match self {
            Backend::ECharts => "echarts",
            Backend::Plotly => "plotly",
            Backend::VegaLite => "vegalite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Backend::ECharts => "ECharts",
            Backend::Plotly => "Plotly",
            Backend::VegaLite => "Vega-Lite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().replace(['-', '_', ' '], "").to_ascii_lowercase();
        match norm.as_str() {
            "echarts" | "pyecharts" => Some(Backend::ECharts),
            "plotly" => Some(Backend::Plotly),
            "vegalite" | "vega" | "altair" => Some(Backend::VegaLite),
            _ => None,
        }
    }

    /// How the presentation side should host this backend's output.
    pub fn render_path(&self) -> RenderPath {
        match self {
            Backend::ECharts => RenderPath::InlineMarkup,
            Backend::Plotly | Backend::VegaLite => RenderPath::NativeWidget,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which presentation path the bridge uses for an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPath {
    /// Embed `render_embed()` markup as-is.
    InlineMarkup,
    /// Hand `document()` to the backend's widget runtime.
    NativeWidget,
}

/// Primitive used for one matrix cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Native(&'static str),
    Substituted(&'static str),
}

impl Support {
    pub fn primitive(&self) -> &'static str {
        match *self { Support::Native(p) | Support::Substituted(p) => p }
    }
    pub fn is_native(&self) -> bool {
        matches!(self, Support::Native(_))
    }
}

/// Script tags + a JS statement mounting `spec` (parsed document) into `el`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetRuntime {
    pub scripts: Vec<&'static str>,
    pub mount: &'static str,
}

/// What every backend output can do, regardless of backend.
pub trait ChartArtifact: Send + Sync + fmt::Debug {
    fn backend(&self) -> Backend;
    fn kind(&self) -> ChartKind;
    fn support(&self) -> Support;

    /// Backend-native JSON (ECharts option, Plotly figure, Vega-Lite spec).
    fn document(&self) -> &Value;

    /// Self-contained HTML fragment: host element, loader scripts, init call.
    fn render_embed(&self, element_id: &str) -> String;

    /// Loader + mount call for hosting `document()` as a widget.
    fn widget_runtime(&self) -> WidgetRuntime;

    fn render_path(&self) -> RenderPath {
        self.backend().render_path()
    }

    fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self.document()).unwrap_or_else(|_| s!("{}"))
    }
}

type Build = fn(&ChartDataset) -> Value;

#[derive(Clone, Copy)]
pub struct Cell {
    pub support: Support,
    pub build: Build,
}

impl Cell {
    const fn native(primitive: &'static str, build: Build) -> Self {
        Self { support: Support::Native(primitive), build }
    }
    const fn substituted(primitive: &'static str, build: Build) -> Self {
        Self { support: Support::Substituted(primitive), build }
    }
}

/// The 21-cell dispatch table.
pub fn cell(kind: ChartKind, backend: Backend) -> Cell {
    use Backend::*;
    use ChartKind::*;
    match (backend, kind) {
        (ECharts, WordCloud) => Cell::native("wordCloud", echarts::word_cloud),
        (ECharts, Bar) => Cell::native("bar", echarts::bar),
        (ECharts, Pie) => Cell::native("pie", echarts::pie),
        (ECharts, Line) => Cell::native("line", echarts::line),
        (ECharts, Scatter) => Cell::native("scatter", echarts::scatter),
        (ECharts, Funnel) => Cell::native("funnel", echarts::funnel),
        (ECharts, Radar) => Cell::native("radar", echarts::radar),

        (Plotly, WordCloud) => Cell::substituted("scatter (sized text markers)", plotly::word_cloud),
        (Plotly, Bar) => Cell::native("bar", plotly::bar),
        (Plotly, Pie) => Cell::native("pie", plotly::pie),
        (Plotly, Line) => Cell::native("scatter (lines)", plotly::line),
        (Plotly, Scatter) => Cell::native("scatter (markers)", plotly::scatter),
        (Plotly, Funnel) => Cell::native("funnel", plotly::funnel),
        (Plotly, Radar) => Cell::native("scatterpolar", plotly::radar),

        (VegaLite, WordCloud) => Cell::substituted("text marks sized by count", vegalite::word_cloud),
        (VegaLite, Bar) => Cell::native("bar", vegalite::bar),
        (VegaLite, Pie) => Cell::native("arc", vegalite::pie),
        (VegaLite, Line) => Cell::native("line", vegalite::line),
        (VegaLite, Scatter) => Cell::native("point", vegalite::scatter),
        (VegaLite, Funnel) => Cell::substituted("horizontal bar, descending", vegalite::funnel),
        (VegaLite, Radar) => Cell::substituted("radial arcs", vegalite::radar),
    }
}

/// Every cell with its support tag, row-major by kind.
pub fn matrix() -> Vec<(ChartKind, Backend, Support)> {
    ChartKind::ALL
        .into_iter()
        .flat_map(|k| Backend::ALL.into_iter().map(move |b| (k, b, cell(k, b).support)))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub allow_substitution: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { title: s!("Word frequency"), allow_substitution: true }
    }
}

pub fn render(
    kind: ChartKind,
    table: &FilteredTable,
    backend: Backend,
    opts: &RenderOptions,
) -> Result<Box<dyn ChartArtifact>, PipelineError> {
    let data = ChartDataset::from_table(table, &opts.title)?;
    let cell = cell(kind, backend);

    if let Support::Substituted(primitive) = cell.support {
        if !opts.allow_substitution {
            return Err(PipelineError::UnsupportedCombination { kind, backend, substitute: primitive });
        }
        logd!("Chart: {} on {} drawn as {}", kind, backend, primitive);
    }

    let doc = (cell.build)(&data);
    let support = cell.support;
    Ok(match backend {
        Backend::ECharts => Box::new(echarts::EChartsChart::new(kind, support, doc)),
        Backend::Plotly => Box::new(plotly::PlotlyFigure::new(kind, support, doc)),
        Backend::VegaLite => Box::new(vegalite::VegaLiteSpec::new(kind, support, doc)),
    })
}

/// JSON safe to place inside a `<script>` element.
pub(crate) fn script_json(doc: &Value) -> String {
    serde_json::to_string(doc)
        .unwrap_or_else(|_| s!("{}"))
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_backends_parse_from_keys_and_labels() {
        for k in ChartKind::ALL {
            assert_eq!(ChartKind::parse(k.key()), Some(k));
            assert_eq!(ChartKind::parse(k.label()), Some(k));
        }
        assert_eq!(ChartKind::parse("wordcloud"), Some(ChartKind::WordCloud));
        assert_eq!(ChartKind::parse("histogram"), None);

        for b in Backend::ALL {
            assert_eq!(Backend::parse(b.key()), Some(b));
            assert_eq!(Backend::parse(b.label()), Some(b));
        }
        assert_eq!(Backend::parse("Altair"), Some(Backend::VegaLite));
        assert_eq!(Backend::parse("bokeh"), None);
    }

    #[test]
    fn matrix_has_all_cells() {
        let m = matrix();
        assert_eq!(m.len(), 21);
        let substituted: Vec<_> = m
            .iter()
            .filter(|(_, _, s)| !s.is_native())
            .map(|(k, b, _)| (*k, *b))
            .collect();
        assert_eq!(substituted, vec![
            (ChartKind::WordCloud, Backend::Plotly),
            (ChartKind::WordCloud, Backend::VegaLite),
            (ChartKind::Funnel, Backend::VegaLite),
            (ChartKind::Radar, Backend::VegaLite),
        ]);
    }

    #[test]
    fn script_json_escapes_closing_tags() {
        let v = serde_json::json!({ "t": "</script><b>" });
        assert!(!script_json(&v).contains("</script>"));
    }
}
