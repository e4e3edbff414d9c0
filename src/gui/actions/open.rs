// src/gui/actions/open.rs
use crate::{gui::app::App, present};

/// Write the chart page and hand it to the system browser.
pub fn open_chart(app: &mut App) {
    let Some(out) = app.output.as_ref() else {
        app.status("Nothing to open yet");
        return;
    };

    let path = app.state.options.output.page_path.clone();
    let title = match &out.page_title {
        Some(t) => format!("{} · {}", out.chart.kind().label(), t),
        None => format!("{} · {}", out.chart.kind().label(), out.url),
    };

    let written = match present::write_page(out.chart.as_ref(), &title, &path) {
        Ok(p) => p,
        Err(e) => {
            loge!("Open: write failed {}: {}", path.display(), e);
            app.status(e.user_message());
            return;
        }
    };

    match present::open_in_browser(&written) {
        Ok(()) => app.status(format!("Opened {}", written.display())),
        Err(e) => {
            loge!("Open: {}", e);
            app.status(format!("Chart saved to {} ({e})", written.display()));
        }
    }
}
