// src/pipeline.rs
//
// URL → RawDocument → visible text → cleaned text → FrequencyTable
//     → FilteredTable → ChartArtifact
//
// Each run takes one immutable `PipelineRequest`. A changed control means a
// new request; nothing is mutated in place. The `Pipeline` keeps the last
// page (keyed by URL) and the last table (keyed by AnalysisOptions) so that
// moving the threshold slider or switching chart type does not refetch.

use crate::{
    analysis::{self, segment, FilteredTable, FrequencyTable, Segmenter, ThresholdBounds, TokenFilter},
    chart::{self, Backend, ChartArtifact, ChartKind, RenderOptions},
    config::options::{AnalysisOptions, AppOptions, ChartOptions, FetchOptions},
    core::{html, net::{Fetcher, HttpFetcher, RawDocument}, sanitize},
    error::PipelineError,
    progress::{Progress, Stage},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineRequest {
    pub url: String,
    pub analysis: AnalysisOptions,
    pub chart: ChartOptions,
    /// `None` = slider default (1). Clamped into the table's bounds.
    pub min_count: Option<u32>,
}

impl PipelineRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            analysis: AnalysisOptions::default(),
            chart: ChartOptions::default(),
            min_count: None,
        }
    }

    pub fn from_options(url: impl Into<String>, opts: &AppOptions, min_count: Option<u32>) -> Self {
        Self {
            url: url.into(),
            analysis: opts.analysis.clone(),
            chart: opts.chart.clone(),
            min_count,
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.chart.backend = backend;
        self
    }

    pub fn with_chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart.kind = kind;
        self
    }

    pub fn with_min_count(mut self, min_count: u32) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn with_analysis(mut self, analysis: AnalysisOptions) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_substitution(mut self, allow: bool) -> Self {
        self.chart.allow_substitution = allow;
        self
    }

    fn key(&self) -> &str {
        self.url.trim()
    }
}

/// Result of one successful run.
#[derive(Debug)]
pub struct PipelineOutput {
    pub url: String,
    pub page_title: Option<String>,
    pub table: FrequencyTable,
    pub bounds: ThresholdBounds,
    /// Threshold actually applied (after clamping).
    pub min_count: u32,
    pub filtered: FilteredTable,
    pub chart: Box<dyn ChartArtifact>,
    /// Fetch/extract/count were skipped.
    pub from_cache: bool,
}

/// Cleaned text of one page.
#[derive(Clone, Debug)]
pub struct PreparedPage {
    pub url: String,
    pub title: Option<String>,
    pub text: String,
}

struct CachedTable {
    options: AnalysisOptions,
    table: FrequencyTable,
}

pub struct Pipeline {
    fetcher: Box<dyn Fetcher>,
    segmenter: Option<Box<dyn Segmenter>>,
    page: Option<PreparedPage>,
    table: Option<CachedTable>,
}

/// Extract + clean. `EmptyText` when nothing readable is left.
pub fn prepare_document(doc: &RawDocument) -> Result<PreparedPage, PipelineError> {
    let visible = html::extract_text(&doc.body);
    let text = sanitize::clean(&visible);
    ensure_nonempty!(text, PipelineError::EmptyText { url: doc.url.clone() });
    Ok(PreparedPage { url: doc.url.clone(), title: html::page_title(&doc.body), text })
}

/// Count + rank. `EmptyFrequencyTable` when no token qualifies.
pub fn analyze_text(
    text: &str,
    opts: &AnalysisOptions,
    segmenter: &dyn Segmenter,
) -> Result<FrequencyTable, PipelineError> {
    let table = analysis::frequency(text, segmenter, TokenFilter::from(opts), opts.top_n);
    ensure_nonempty!(table, PipelineError::EmptyFrequencyTable);
    Ok(table)
}

impl Pipeline {
    pub fn new(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher, segmenter: None, page: None, table: None }
    }

    pub fn http(opts: &FetchOptions) -> Result<Self, PipelineError> {
        Ok(Self::new(Box::new(HttpFetcher::new(opts)?)))
    }

    /// Drop cached page and table.
    pub fn invalidate(&mut self) {
        self.page = None;
        self.table = None;
    }

    /// True when `run(req)` would not touch the network.
    pub fn is_cached(&self, req: &PipelineRequest) -> bool {
        self.page.as_ref().is_some_and(|p| p.url == req.key())
    }

    /// Last successfully counted table, if it still belongs to the cached page.
    pub fn cached_table(&self) -> Option<&FrequencyTable> {
        self.table.as_ref().map(|t| &t.table)
    }

    pub fn cached_page(&self) -> Option<&PreparedPage> {
        self.page.as_ref()
    }

    fn segmenter_for(&mut self, opts: &AnalysisOptions) -> &dyn Segmenter {
        let seg = self
            .segmenter
            .take()
            .filter(|s| s.kind() == opts.segmenter)
            .unwrap_or_else(|| {
                logd!("Pipeline: building {} segmenter", opts.segmenter);
                segment::build(opts.segmenter)
            });
        &**self.segmenter.insert(seg)
    }

    /// Stages 1-4, served from cache where possible.
    fn analyze(
        &mut self,
        req: &PipelineRequest,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<bool, PipelineError> {
        let url = req.key().to_string();
        ensure_nonempty!(url, PipelineError::MissingUrl);

        let mut from_cache = true;

        if !self.is_cached(req) {
            self.invalidate();
            from_cache = false;

            if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Fetch); }
            let doc = self.fetcher.fetch(&url)?;
            logf!("Pipeline: fetched {} (status {}, {} bytes)", doc.url, doc.status, doc.body.len());

            if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Extract); }
            let mut page = prepare_document(&doc)?;
            if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Clean); }
            page.url = url.clone();
            logd!("Pipeline: {} chars of cleaned text", page.text.chars().count());
            self.page = Some(page);
        }

        let table_fresh = self.table.as_ref().is_some_and(|t| t.options == req.analysis);
        if !table_fresh {
            from_cache = false;
            if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Count); }

            let text = match &self.page {
                Some(p) => p.text.clone(),
                None => return Err(PipelineError::EmptyText { url }),
            };
            self.table = None;
            let segmenter = self.segmenter_for(&req.analysis);
            let table = analyze_text(&text, &req.analysis, segmenter)?;
            logf!("Pipeline: {} distinct words kept (top {})", table.len(), req.analysis.top_n);
            self.table = Some(CachedTable { options: req.analysis.clone(), table });
        }

        Ok(from_cache)
    }

    pub fn run(
        &mut self,
        req: &PipelineRequest,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<PipelineOutput, PipelineError> {
        if let Some(p) = progress.as_deref_mut() { p.begin(req.key()); }
        let res = self.run_inner(req, progress.as_deref_mut());
        if let Err(e) = &res {
            if e.is_warning() { logw!("Pipeline: {}", e) } else { loge!("Pipeline: {}", e) }
            if let Some(p) = progress.as_deref_mut() { p.log(&e.user_message()); }
        }
        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        res
    }

    fn run_inner(
        &mut self,
        req: &PipelineRequest,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<PipelineOutput, PipelineError> {
        let from_cache = self.analyze(req, progress.as_deref_mut())?;

        let table = self.cached_table().cloned().ok_or(PipelineError::EmptyFrequencyTable)?;
        let bounds = ThresholdBounds::for_table(&table).ok_or(PipelineError::EmptyFrequencyTable)?;

        let requested = req.min_count.unwrap_or(1);
        let min_count = bounds.clamp(requested);
        if min_count != requested {
            logd!("Pipeline: min_count {} clamped to {}", requested, min_count);
        }

        if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Filter); }
        let filtered = analysis::filter(&table, min_count);

        if let Some(p) = progress.as_deref_mut() { p.stage(Stage::Render); }
        let page_title = self.page.as_ref().and_then(|p| p.title.clone());
        let opts = RenderOptions {
            title: chart_title(page_title.as_deref(), req.key()),
            allow_substitution: req.chart.allow_substitution,
        };
        let chart = chart::render(req.chart.kind, &filtered, req.chart.backend, &opts)?;

        Ok(PipelineOutput {
            url: s!(req.key()),
            page_title,
            table,
            bounds,
            min_count,
            filtered,
            chart,
            from_cache,
        })
    }
}

fn chart_title(page_title: Option<&str>, url: &str) -> String {
    let source = page_title
        .map(str::to_string)
        .or_else(|| reqwest::Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)))
        .unwrap_or_else(|| s!(url));
    format!("Word frequency: {source}")
}
