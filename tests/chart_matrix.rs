// tests/chart_matrix.rs
use serde_json::Value;

use wordchart::{
    analysis::{filter, FilteredTable, FrequencyTable},
    chart::{self, Backend, ChartKind, RenderOptions, RenderPath},
    present, PipelineError,
};

fn table(pairs: &[(&str, u32)]) -> FilteredTable {
    let t = FrequencyTable::from_ranked(pairs.iter().map(|&(w, c)| (w, c)), 20);
    filter(&t, 1)
}

fn render(kind: ChartKind, backend: Backend, pairs: &[(&str, u32)]) -> Box<dyn chart::ChartArtifact> {
    chart::render(kind, &table(pairs), backend, &RenderOptions::default()).unwrap()
}

fn strs(v: &Value) -> Vec<&str> {
    v.as_array().unwrap().iter().map(|x| x.as_str().unwrap()).collect()
}

fn nums(v: &Value) -> Vec<u64> {
    v.as_array().unwrap().iter().map(|x| x.as_u64().unwrap()).collect()
}

#[test]
fn every_cell_renders_and_pages() {
    let data = [("x", 5), ("y", 3), ("z", 1)];
    for kind in ChartKind::ALL {
        for backend in Backend::ALL {
            let a = render(kind, backend, &data);
            assert_eq!((a.kind(), a.backend()), (kind, backend));
            assert_eq!(a.support(), chart::cell(kind, backend).support);
            assert_eq!(a.render_path(), backend.render_path());
            assert!(a.document().is_object(), "{kind} / {backend}");

            let page = present::html_page(a.as_ref(), "t");
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.contains("\"x\""), "{kind} / {backend} lost its data");
        }
    }
}

#[test]
fn render_paths_per_backend() {
    assert_eq!(Backend::ECharts.render_path(), RenderPath::InlineMarkup);
    assert_eq!(Backend::Plotly.render_path(), RenderPath::NativeWidget);
    assert_eq!(Backend::VegaLite.render_path(), RenderPath::NativeWidget);
}

#[test]
fn bar_keeps_categories_and_heights_in_order() {
    let data = [("x", 5), ("y", 3)];

    let e = render(ChartKind::Bar, Backend::ECharts, &data);
    let d = e.document();
    assert_eq!(strs(&d["xAxis"]["data"]), vec!["x", "y"]);
    assert_eq!(nums(&d["series"][0]["data"]), vec![5, 3]);

    let p = render(ChartKind::Bar, Backend::Plotly, &data);
    let d = p.document();
    assert_eq!(strs(&d["data"][0]["x"]), vec!["x", "y"]);
    assert_eq!(nums(&d["data"][0]["y"]), vec![5, 3]);

    let v = render(ChartKind::Bar, Backend::VegaLite, &data);
    let rows = v.document()["data"]["values"].as_array().unwrap().clone();
    let got: Vec<(&str, u64)> = rows
        .iter()
        .map(|r| (r["token"].as_str().unwrap(), r["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(got, vec![("x", 5), ("y", 3)]);
    assert_eq!(v.document()["mark"], "bar");
}

#[test]
fn radar_has_one_axis_per_token_scaled_to_global_max() {
    let data = [("a", 4), ("b", 2)];

    let e = render(ChartKind::Radar, Backend::ECharts, &data);
    let ind = e.document()["radar"]["indicator"].as_array().unwrap().clone();
    let axes: Vec<(&str, u64)> = ind
        .iter()
        .map(|i| (i["name"].as_str().unwrap(), i["max"].as_u64().unwrap()))
        .collect();
    assert_eq!(axes, vec![("a", 4), ("b", 4)]);
    assert_eq!(nums(&e.document()["series"][0]["data"][0]["value"]), vec![4, 2]);

    let p = render(ChartKind::Radar, Backend::Plotly, &data);
    let trace = &p.document()["data"][0];
    assert_eq!(strs(&trace["theta"]), vec!["a", "b", "a"]);
    assert_eq!(nums(&trace["r"]), vec![4, 2, 4]);
    assert_eq!(nums(&p.document()["layout"]["polar"]["radialaxis"]["range"]), vec![0, 4]);

    let v = render(ChartKind::Radar, Backend::VegaLite, &data);
    let domain = &v.document()["encoding"]["radius"]["scale"]["domain"];
    assert_eq!(nums(domain), vec![0, 4]);
}

#[test]
fn line_points_name_their_words() {
    let data = [("x", 5), ("y", 3)];

    let e = render(ChartKind::Line, Backend::ECharts, &data);
    let pts: Vec<(&str, u64)> = e.document()["series"][0]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["name"].as_str().unwrap(), p["value"].as_u64().unwrap()))
        .collect();
    assert_eq!(pts, vec![("x", 5), ("y", 3)]);
    assert_eq!(nums(&e.document()["xAxis"]["data"]), vec![1, 2]);
}

#[test]
fn funnel_is_descending_everywhere() {
    // threshold view of an already ranked table is descending; check the
    // builders keep it that way
    let data = [("a", 9), ("b", 4), ("c", 4), ("d", 1)];

    let e = render(ChartKind::Funnel, Backend::ECharts, &data);
    let vals: Vec<u64> = e.document()["series"][0]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["value"].as_u64().unwrap())
        .collect();
    assert_eq!(vals, vec![9, 4, 4, 1]);

    let p = render(ChartKind::Funnel, Backend::Plotly, &data);
    assert_eq!(strs(&p.document()["data"][0]["y"]), vec!["a", "b", "c", "d"]);

    let v = render(ChartKind::Funnel, Backend::VegaLite, &data);
    assert_eq!(v.document()["encoding"]["y"]["sort"], "-x");
}

#[test]
fn empty_data_is_an_error_for_every_cell() {
    let empty = table(&[]);
    for kind in ChartKind::ALL {
        for backend in Backend::ALL {
            let res = chart::render(kind, &empty, backend, &RenderOptions::default());
            assert!(matches!(res, Err(PipelineError::EmptyData)), "{kind} / {backend}");
        }
    }
}

#[test]
fn substitution_can_be_refused() {
    let strict = RenderOptions { allow_substitution: false, ..RenderOptions::default() };
    let data = table(&[("x", 2)]);

    for (kind, backend, support) in chart::matrix() {
        let res = chart::render(kind, &data, backend, &strict);
        if support.is_native() {
            assert!(res.is_ok(), "{kind} / {backend}");
        } else {
            match res {
                Err(PipelineError::UnsupportedCombination { kind: k, backend: b, substitute }) => {
                    assert_eq!((k, b), (kind, backend));
                    assert_eq!(substitute, support.primitive());
                }
                other => panic!("{kind} / {backend}: {other:?}"),
            }
        }
    }
}

#[test]
fn embed_markup_is_script_safe() {
    let a = render(ChartKind::Bar, Backend::ECharts, &[("</script>x", 2)]);
    let html = a.render_embed("c1");
    assert!(html.contains("id=\"c1\""));
    assert_eq!(html.matches("</script>").count(), html.matches("<script").count());
}
