// src/chart/plotly.rs
//
// Plotly figures (`{ data, layout }`). No word-cloud trace exists, so that
// cell is a text scatter with marker size proportional to count, spread over
// three lanes so neighbouring labels do not overlap.

use serde_json::{json, Value};

use super::{script_json, Backend, ChartArtifact, ChartDataset, ChartKind, Support, WidgetRuntime};
use crate::config::consts::CHART_HEIGHT_PX;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const WORD_LANES: u32 = 3;

fn layout(data: &ChartDataset, extra: Value) -> Value {
    let mut l = json!({ "title": { "text": data.title() }, "height": CHART_HEIGHT_PX });
    if let (Some(m), Value::Object(e)) = (l.as_object_mut(), extra) {
        m.extend(e);
    }
    l
}

fn figure(traces: Vec<Value>, layout: Value) -> Value {
    json!({ "data": traces, "layout": layout })
}

pub fn word_cloud(data: &ChartDataset) -> Value {
    let sizes: Vec<f64> = data.values().into_iter().map(|v| data.scaled(v, 12.0, 60.0)).collect();
    let lanes: Vec<u32> = data.ranks().into_iter().map(|r| r % WORD_LANES).collect();
    let hidden = json!({ "visible": false });
    figure(
        vec![json!({
            "type": "scatter",
            "mode": "markers+text",
            "x": data.ranks(),
            "y": lanes,
            "text": data.labels(),
            "textfont": { "size": sizes },
            "marker": { "size": sizes, "opacity": 0.25, "sizemode": "diameter" },
            "customdata": data.values(),
            "hovertemplate": "%{text}: %{customdata}<extra></extra>",
        })],
        layout(data, json!({ "xaxis": hidden, "yaxis": hidden, "showlegend": false })),
    )
}

pub fn bar(data: &ChartDataset) -> Value {
    figure(
        vec![json!({ "type": "bar", "name": "count", "x": data.labels(), "y": data.values() })],
        layout(data, json!({ "xaxis": { "type": "category" } })),
    )
}

pub fn pie(data: &ChartDataset) -> Value {
    figure(
        vec![json!({ "type": "pie", "labels": data.labels(), "values": data.values(), "sort": false })],
        layout(data, json!({})),
    )
}

fn ranked(data: &ChartDataset, mode: &str) -> Value {
    figure(
        vec![json!({
            "type": "scatter",
            "mode": mode,
            "name": "count",
            "x": data.ranks(),
            "y": data.values(),
            "text": data.labels(),
        })],
        layout(data, json!({
            "xaxis": { "title": { "text": "rank" }, "dtick": 1 },
            "yaxis": { "title": { "text": "count" } },
        })),
    )
}

pub fn line(data: &ChartDataset) -> Value {
    ranked(data, "lines+markers")
}

pub fn scatter(data: &ChartDataset) -> Value {
    ranked(data, "markers")
}

pub fn funnel(data: &ChartDataset) -> Value {
    let desc = data.descending();
    let labels: Vec<&str> = desc.iter().map(|p| p.label.as_str()).collect();
    let values: Vec<u32> = desc.iter().map(|p| p.value).collect();
    figure(
        vec![json!({ "type": "funnel", "y": labels, "x": values })],
        layout(data, json!({})),
    )
}

pub fn radar(data: &ChartDataset) -> Value {
    let axes = data.radar_axes();
    let mut theta: Vec<&str> = axes.iter().map(|a| a.name.as_str()).collect();
    let mut r: Vec<u32> = axes.iter().map(|a| a.value).collect();
    // close the polygon
    if let (Some(&t0), Some(&r0)) = (theta.first(), r.first()) {
        theta.push(t0);
        r.push(r0);
    }
    figure(
        vec![json!({
            "type": "scatterpolar",
            "name": "frequency",
            "r": r,
            "theta": theta,
            "fill": "toself",
        })],
        layout(data, json!({
            "polar": { "radialaxis": { "visible": true, "range": [0, data.max()] } },
            "showlegend": false,
        })),
    )
}

#[derive(Debug)]
pub struct PlotlyFigure {
    kind: ChartKind,
    support: Support,
    figure: Value,
}

impl PlotlyFigure {
    pub fn new(kind: ChartKind, support: Support, figure: Value) -> Self {
        Self { kind, support, figure }
    }
}

impl ChartArtifact for PlotlyFigure {
    fn backend(&self) -> Backend { Backend::Plotly }
    fn kind(&self) -> ChartKind { self.kind }
    fn support(&self) -> Support { self.support }
    fn document(&self) -> &Value { &self.figure }

    fn render_embed(&self, element_id: &str) -> String {
        format!(
            "<div id=\"{element_id}\" style=\"width:100%;height:{CHART_HEIGHT_PX}px;\"></div>\n\
             <script src=\"{PLOTLY_JS}\"></script>\n\
             <script>\n(function () {{ var fig = {}; Plotly.newPlot(\"{element_id}\", fig.data, fig.layout, {{ responsive: true }}); }})();\n</script>\n",
            script_json(&self.figure)
        )
    }

    fn widget_runtime(&self) -> WidgetRuntime {
        WidgetRuntime {
            scripts: vec![PLOTLY_JS],
            mount: "Plotly.newPlot(el, spec.data, spec.layout, { responsive: true });",
        }
    }
}
