// src/present.rs
//
// Turns a ChartArtifact into something a user can look at: a standalone HTML
// page, written to disk and optionally opened with the system browser.
// InlineMarkup artifacts are pasted in as-is; NativeWidget artifacts are
// hosted as a JSON data island plus their widget loader.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    chart::{script_json, ChartArtifact, RenderPath},
    error::PipelineError,
};

const CHART_ELEMENT_ID: &str = "chart";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Chart body for the widget path: loader scripts, mount point, data island
/// and the backend's mount call.
fn widget_body(artifact: &dyn ChartArtifact, id: &str) -> String {
    let runtime = artifact.widget_runtime();
    let mut out = String::new();
    for src in &runtime.scripts {
        out.push_str(&format!("<script src=\"{src}\"></script>\n"));
    }
    out.push_str(&format!("<div id=\"{id}\" style=\"width:100%;\"></div>\n"));
    out.push_str(&format!(
        "<script type=\"application/json\" id=\"{id}-spec\">{}</script>\n",
        script_json(artifact.document())
    ));
    out.push_str(&format!(
        "<script>\n(function () {{\n  var spec = JSON.parse(document.getElementById(\"{id}-spec\").textContent);\n  var el = document.getElementById(\"{id}\");\n  {}\n}})();\n</script>\n",
        runtime.mount
    ));
    out
}

/// Full standalone page for `artifact`.
pub fn html_page(artifact: &dyn ChartArtifact, title: &str) -> String {
    let body = match artifact.render_path() {
        RenderPath::InlineMarkup => artifact.render_embed(CHART_ELEMENT_ID),
        RenderPath::NativeWidget => widget_body(artifact, CHART_ELEMENT_ID),
    };

    let note = if artifact.support().is_native() {
        s!()
    } else {
        format!(
            "<p class=\"note\">{} is not available in {}; drawn as {}.</p>\n",
            artifact.kind().label(),
            artifact.backend().label(),
            escape_html(artifact.support().primitive()),
        )
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>body {{ font-family: sans-serif; margin: 1.5em; }} .note {{ color: #a60; }}</style>\n\
         </head>\n<body>\n{note}{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Write the page, creating parent directories. Returns the path written.
pub fn write_page(artifact: &dyn ChartArtifact, title: &str, path: &Path) -> Result<PathBuf, PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html_page(artifact, title))?;
    logf!(
        "Present: {} / {} ({:?}) → {}",
        artifact.backend(),
        artifact.kind(),
        artifact.render_path(),
        path.display()
    );
    Ok(path.to_path_buf())
}

/// Open `path` with the system's default application (the browser for .html).
pub fn open_in_browser(path: &Path) -> Result<(), String> {
    let abs = fs::canonicalize(path).map_err(|e| format!("Cannot resolve {}: {}", path.display(), e))?;
    spawn_opener(&abs)?;
    logf!("Present: opened {}", abs.display());
    Ok(())
}

/// Cross-platform "open with default application".
fn spawn_opener(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        Err(format!("Opening {} is not supported on this platform", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{filter, FrequencyTable},
        chart::{render, Backend, ChartKind, RenderOptions},
    };

    fn artifact(kind: ChartKind, backend: Backend) -> Box<dyn ChartArtifact> {
        let table = FrequencyTable::from_ranked(vec![(s!("x"), 5), (s!("y"), 3)], 20);
        let filtered = filter(&table, 1);
        render(kind, &filtered, backend, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn inline_markup_page_embeds_fragment() {
        let a = artifact(ChartKind::Bar, Backend::ECharts);
        let page = html_page(a.as_ref(), "t");
        assert!(page.contains("echarts.init"));
        assert!(page.contains("echarts.min.js"));
        assert!(!page.contains("application/json"));
    }

    #[test]
    fn native_widget_page_hosts_data_island() {
        let a = artifact(ChartKind::Bar, Backend::Plotly);
        let page = html_page(a.as_ref(), "t");
        assert!(page.contains("type=\"application/json\" id=\"chart-spec\""));
        assert!(page.contains("Plotly.newPlot(el"));

        let v = artifact(ChartKind::Pie, Backend::VegaLite);
        assert!(html_page(v.as_ref(), "t").contains("vegaEmbed(el, spec)"));
    }

    #[test]
    fn substituted_cells_carry_a_note() {
        let a = artifact(ChartKind::Radar, Backend::VegaLite);
        assert!(html_page(a.as_ref(), "t").contains("class=\"note\""));
        let b = artifact(ChartKind::Radar, Backend::ECharts);
        assert!(!html_page(b.as_ref(), "t").contains("class=\"note\""));
    }

    #[test]
    fn title_is_escaped() {
        let a = artifact(ChartKind::Bar, Backend::ECharts);
        let page = html_page(a.as_ref(), "<b>&");
        assert!(page.contains("<title>&lt;b&gt;&amp;</title>"));
    }
}
