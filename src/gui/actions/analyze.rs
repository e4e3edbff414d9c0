// src/gui/actions/analyze.rs
use crate::{
    analysis::ThresholdBounds,
    gui::{app::App, progress::GuiProgress},
    pipeline::{Pipeline, PipelineRequest},
};

/// Analyze button / Enter in the URL field. May fetch.
pub fn analyze(app: &mut App) {
    let url = app.state.gui.url_text.trim().to_string();
    let req = PipelineRequest::from_options(url, &app.state.options, Some(app.state.gui.min_count));
    logf!("Analyze: Begin url={} backend={} chart={}", req.url, req.chart.backend, req.chart.kind);
    run(app, &req);
    app.save_settings();
}

/// A chart control changed. Re-runs only when the page is cached; never fetches.
pub fn rerun(app: &mut App) {
    let Some(url) = app.last_url.clone() else {
        logd!("Rerun: nothing analyzed yet");
        return;
    };
    let req = PipelineRequest::from_options(url, &app.state.options, Some(app.state.gui.min_count));
    if !app.pipeline.as_ref().is_some_and(|p| p.is_cached(&req)) {
        app.status("Press Analyze to load the page again");
        return;
    }
    run(app, &req);
}

fn run(app: &mut App, req: &PipelineRequest) {
    if app.pipeline.is_none() {
        match Pipeline::http(&app.state.options.fetch) {
            Ok(p) => app.pipeline = Some(p),
            Err(e) => {
                loge!("Analyze: cannot build HTTP client: {}", e);
                app.status(e.user_message());
                return;
            }
        }
    }
    let Some(pipeline) = app.pipeline.as_mut() else { return };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the pipeline runs ←
    let res = pipeline.run(req, Some(&mut prog));

    // Whatever survived in the cache is what the table shows, even when the
    // chart stage failed.
    app.table = pipeline.cached_table().cloned();
    app.bounds = app.table.as_ref().and_then(ThresholdBounds::for_table);
    app.last_url = pipeline.cached_page().map(|p| p.url.clone());

    match res {
        Ok(out) => {
            app.state.gui.min_count = out.min_count;
            let mut msg = format!(
                "{} of {} words ≥ {} · {} on {}",
                out.filtered.len(),
                out.table.len(),
                out.min_count,
                out.chart.kind(),
                out.chart.backend(),
            );
            if !out.chart.support().is_native() {
                msg.push_str(&format!(" (drawn as {})", out.chart.support().primitive()));
            }
            if out.from_cache {
                msg.push_str(" · cached");
            }
            logf!("Analyze: OK {}", msg);
            app.status(msg);
            app.output = Some(out);
        }
        Err(e) => {
            // logged by the pipeline; GuiProgress already shows the message
            app.output = None;
            app.status(e.user_message());
        }
    }
}
