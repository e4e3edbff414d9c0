// src/chart/echarts.rs
//
// ECharts option documents. Every kind is native here; the word cloud needs
// the echarts-wordcloud extension script next to echarts itself.

use serde_json::{json, Value};

use super::{script_json, ChartArtifact, ChartDataset, ChartKind, Support, WidgetRuntime};
use super::Backend;
use crate::config::consts::CHART_HEIGHT_PX;

const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";
const WORDCLOUD_JS: &str =
    "https://cdn.jsdelivr.net/npm/echarts-wordcloud@2/dist/echarts-wordcloud.min.js";

fn named(data: &ChartDataset) -> Vec<Value> {
    data.points().iter().map(|p| json!({ "name": p.label, "value": p.value })).collect()
}

fn base(data: &ChartDataset) -> Value {
    json!({
        "title": { "text": data.title() },
        "tooltip": {},
    })
}

fn with(mut base: Value, extra: Value) -> Value {
    if let (Some(b), Value::Object(e)) = (base.as_object_mut(), extra) {
        b.extend(e);
    }
    base
}

pub fn word_cloud(data: &ChartDataset) -> Value {
    with(base(data), json!({
        "series": [{
            "type": "wordCloud",
            "shape": "circle",
            "sizeRange": [12, 60],
            "rotationRange": [0, 0],
            "data": named(data),
        }]
    }))
}

pub fn bar(data: &ChartDataset) -> Value {
    with(base(data), json!({
        "xAxis": { "type": "category", "data": data.labels() },
        "yAxis": { "type": "value" },
        "series": [{ "type": "bar", "name": "count", "data": data.values() }],
    }))
}

pub fn pie(data: &ChartDataset) -> Value {
    with(base(data), json!({
        "legend": { "type": "scroll", "orient": "vertical", "left": "left" },
        "series": [{ "type": "pie", "radius": "60%", "data": named(data) }],
    }))
}

pub fn line(data: &ChartDataset) -> Value {
    with(base(data), json!({
        "tooltip": { "trigger": "item", "formatter": "{b}: {c}" },
        "xAxis": { "type": "category", "name": "rank", "data": data.ranks() },
        "yAxis": { "type": "value", "name": "count" },
        "series": [{ "type": "line", "name": "count", "data": named(data) }],
    }))
}

pub fn scatter(data: &ChartDataset) -> Value {
    let pts: Vec<Value> = data
        .points()
        .iter()
        .map(|p| json!({ "name": p.label, "value": [p.rank, p.value] }))
        .collect();
    with(base(data), json!({
        "xAxis": { "type": "value", "name": "rank", "min": 0, "minInterval": 1 },
        "yAxis": { "type": "value", "name": "count" },
        "series": [{ "type": "scatter", "name": "count", "data": pts }],
    }))
}

pub fn funnel(data: &ChartDataset) -> Value {
    let stages: Vec<Value> = data
        .descending()
        .into_iter()
        .map(|p| json!({ "name": p.label, "value": p.value }))
        .collect();
    with(base(data), json!({
        "series": [{
            "type": "funnel",
            "sort": "descending",
            "min": 0,
            "max": data.max(),
            "data": stages,
        }]
    }))
}

pub fn radar(data: &ChartDataset) -> Value {
    let axes = data.radar_axes();
    let indicator: Vec<Value> = axes.iter().map(|a| json!({ "name": a.name, "max": a.max })).collect();
    let values: Vec<u32> = axes.iter().map(|a| a.value).collect();
    with(base(data), json!({
        "radar": { "indicator": indicator },
        "series": [{
            "type": "radar",
            "data": [{ "name": "frequency", "value": values }],
        }]
    }))
}

#[derive(Debug)]
pub struct EChartsChart {
    kind: ChartKind,
    support: Support,
    option: Value,
}

impl EChartsChart {
    pub fn new(kind: ChartKind, support: Support, option: Value) -> Self {
        Self { kind, support, option }
    }

    fn scripts(&self) -> Vec<&'static str> {
        match self.kind {
            ChartKind::WordCloud => vec![ECHARTS_JS, WORDCLOUD_JS],
            _ => vec![ECHARTS_JS],
        }
    }
}

impl ChartArtifact for EChartsChart {
    fn backend(&self) -> Backend { Backend::ECharts }
    fn kind(&self) -> ChartKind { self.kind }
    fn support(&self) -> Support { self.support }
    fn document(&self) -> &Value { &self.option }

    fn render_embed(&self, element_id: &str) -> String {
        let mut out = format!(
            "<div id=\"{element_id}\" style=\"width:100%;height:{CHART_HEIGHT_PX}px;\"></div>\n"
        );
        for src in self.scripts() {
            out.push_str(&format!("<script src=\"{src}\"></script>\n"));
        }
        out.push_str(&format!(
            "<script>\necharts.init(document.getElementById(\"{element_id}\")).setOption({});\n</script>\n",
            script_json(&self.option)
        ));
        out
    }

    fn widget_runtime(&self) -> WidgetRuntime {
        WidgetRuntime {
            scripts: self.scripts(),
            mount: "echarts.init(el).setOption(spec);",
        }
    }
}
