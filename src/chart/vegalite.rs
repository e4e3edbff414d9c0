// src/chart/vegalite.rs
//
// Vega-Lite v5 specs with inline data rows `{ rank, token, count }`.
// Vega-Lite has no funnel, radar or word-cloud mark; those cells use a
// descending horizontal bar, radial arcs and size-encoded text marks.

use serde::Serialize;
use serde_json::{json, Value};

use super::{script_json, Backend, ChartArtifact, ChartDataset, ChartKind, Support, WidgetRuntime};
use crate::config::consts::CHART_HEIGHT_PX;

const VEGA_JS: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_JS: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_JS: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";
const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Serialize)]
struct Row<'a> {
    rank: u32,
    token: &'a str,
    count: u32,
}

fn rows(data: &ChartDataset) -> Value {
    let rows: Vec<Row<'_>> = data
        .points()
        .iter()
        .map(|p| Row { rank: p.rank, token: &p.label, count: p.value })
        .collect();
    serde_json::to_value(rows).unwrap_or_else(|_| json!([]))
}

fn spec(data: &ChartDataset, mark: Value, encoding: Value) -> Value {
    json!({
        "$schema": SCHEMA,
        "title": data.title(),
        "width": "container",
        "height": CHART_HEIGHT_PX - 100,
        "data": { "values": rows(data) },
        "mark": mark,
        "encoding": encoding,
    })
}

fn token_field() -> Value {
    // `sort: null` keeps table (rank) order instead of alphabetical
    json!({ "field": "token", "type": "nominal", "sort": null })
}

fn count_field() -> Value {
    json!({ "field": "count", "type": "quantitative" })
}

pub fn word_cloud(data: &ChartDataset) -> Value {
    let mut s = spec(
        data,
        json!({ "type": "text", "baseline": "middle" }),
        json!({
            "x": { "field": "rank", "type": "ordinal", "axis": null },
            "y": { "field": "lane", "type": "ordinal", "axis": null },
            "text": { "field": "token" },
            "size": { "field": "count", "type": "quantitative", "scale": { "range": [12, 60] }, "legend": null },
            "color": { "field": "token", "type": "nominal", "legend": null },
        }),
    );
    s["transform"] = json!([{ "calculate": "datum.rank % 3", "as": "lane" }]);
    s
}

pub fn bar(data: &ChartDataset) -> Value {
    spec(data, json!("bar"), json!({ "x": token_field(), "y": count_field() }))
}

pub fn pie(data: &ChartDataset) -> Value {
    spec(
        data,
        json!("arc"),
        json!({
            "theta": count_field(),
            "color": token_field(),
            "order": { "field": "rank", "type": "quantitative" },
        }),
    )
}

pub fn line(data: &ChartDataset) -> Value {
    spec(
        data,
        json!({ "type": "line", "point": true }),
        json!({
            "x": { "field": "rank", "type": "quantitative", "axis": { "tickMinStep": 1 } },
            "y": count_field(),
            "tooltip": [{ "field": "token" }, count_field()],
        }),
    )
}

pub fn scatter(data: &ChartDataset) -> Value {
    spec(
        data,
        json!("point"),
        json!({
            "x": { "field": "rank", "type": "quantitative", "axis": { "tickMinStep": 1 } },
            "y": count_field(),
            "tooltip": [{ "field": "token" }, count_field()],
        }),
    )
}

pub fn funnel(data: &ChartDataset) -> Value {
    spec(
        data,
        json!("bar"),
        json!({
            "y": { "field": "token", "type": "nominal", "sort": "-x" },
            "x": count_field(),
        }),
    )
}

pub fn radar(data: &ChartDataset) -> Value {
    let mut s = spec(
        data,
        json!({ "type": "arc", "stroke": "#fff" }),
        json!({
            "theta": { "field": "slot", "type": "quantitative", "stack": true },
            "radius": {
                "field": "count",
                "type": "quantitative",
                "scale": { "type": "linear", "domain": [0, data.max()], "zero": true },
            },
            "color": token_field(),
            "order": { "field": "rank", "type": "quantitative" },
        }),
    );
    // equal angular slot per token
    s["transform"] = json!([{ "calculate": "1", "as": "slot" }]);
    s
}

#[derive(Debug)]
pub struct VegaLiteSpec {
    kind: ChartKind,
    support: Support,
    spec: Value,
}

impl VegaLiteSpec {
    pub fn new(kind: ChartKind, support: Support, spec: Value) -> Self {
        Self { kind, support, spec }
    }
}

impl ChartArtifact for VegaLiteSpec {
    fn backend(&self) -> Backend { Backend::VegaLite }
    fn kind(&self) -> ChartKind { self.kind }
    fn support(&self) -> Support { self.support }
    fn document(&self) -> &Value { &self.spec }

    fn render_embed(&self, element_id: &str) -> String {
        let mut out = format!("<div id=\"{element_id}\" style=\"width:100%;\"></div>\n");
        for src in [VEGA_JS, VEGA_LITE_JS, VEGA_EMBED_JS] {
            out.push_str(&format!("<script src=\"{src}\"></script>\n"));
        }
        out.push_str(&format!(
            "<script>\nvegaEmbed(\"#{element_id}\", {});\n</script>\n",
            script_json(&self.spec)
        ));
        out
    }

    fn widget_runtime(&self) -> WidgetRuntime {
        WidgetRuntime {
            scripts: vec![VEGA_JS, VEGA_LITE_JS, VEGA_EMBED_JS],
            mount: "vegaEmbed(el, spec);",
        }
    }
}
