// src/core/net.rs
//
// Fetcher boundary: URL in, raw document out. Two implementations:
// `HttpFetcher` (blocking HTTP with a bounded timeout) and `FileFetcher`
// (local HTML file, offline use).

use std::{fs, path::Path, time::Duration};

use reqwest::Url;

use crate::config::consts::CONNECT_TIMEOUT_SECS;
use crate::config::options::FetchOptions;
use crate::error::PipelineError;

/// Raw payload of one fetch. Consumed by the extractor, then dropped.
#[derive(Clone, Debug)]
pub struct RawDocument {
    pub url: String,
    pub status: u16,
    pub body: String,
}

pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<RawDocument, PipelineError>;
}

/// Validate user input as an http(s) URL.
/// Input without a scheme gets `https://` prepended.
pub fn validate_url(raw: &str) -> Result<Url, PipelineError> {
    let trimmed = raw.trim();
    ensure_nonempty!(trimmed, PipelineError::MissingUrl);

    let candidate = if trimmed.contains("://") {
        s!(trimmed)
    } else {
        join!("https://", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| PipelineError::InvalidUrl {
        url: s!(trimmed),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(PipelineError::InvalidUrl {
                url: s!(trimmed),
                reason: format!("unsupported scheme '{other}'"),
            });
        }
    }
    if url.host_str().is_none_or(|h| h.is_empty()) {
        return Err(PipelineError::InvalidUrl { url: s!(trimmed), reason: s!("missing host") });
    }
    Ok(url)
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, PipelineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(opts.timeout_secs)))
            .user_agent(opts.user_agent.clone())
            .build()
            .map_err(|e| PipelineError::Fetch { url: s!(), reason: format!("HTTP client setup: {e}") })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawDocument, PipelineError> {
        let parsed = validate_url(url)?;
        let shown = parsed.to_string();
        let fail = |reason: String| PipelineError::Fetch { url: shown.clone(), reason };

        logd!("Fetch: GET {}", shown);
        let resp = self.client.get(parsed).send().map_err(|e| fail(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }

        // `text()` decodes with the response charset, UTF-8 lossy otherwise.
        let body = resp.text().map_err(|e| fail(e.to_string()))?;
        logd!("Fetch: {} → {} bytes", shown, body.len());

        Ok(RawDocument { url: shown, status: status.as_u16(), body })
    }
}

/// Reads a saved page from disk. Accepts plain paths and `file://` URLs.
#[derive(Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, url: &str) -> Result<RawDocument, PipelineError> {
        let path_str = url.trim();
        let path_str = path_str.strip_prefix("file://").unwrap_or(path_str);
        ensure_nonempty!(path_str, PipelineError::MissingUrl);

        let bytes = fs::read(Path::new(path_str)).map_err(|e| PipelineError::Fetch {
            url: s!(path_str),
            reason: e.to_string(),
        })?;
        Ok(RawDocument {
            url: s!(path_str),
            status: 200,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
        time::Instant,
    };

    /// One-shot local server. `reply` is written after the request head is
    /// read; `None` keeps the connection open without answering.
    fn serve_once(reply: Option<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else { return };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            match reply {
                Some(r) => {
                    let _ = stream.write_all(r.as_bytes());
                }
                None => thread::sleep(Duration::from_secs(5)),
            }
        });
        format!("http://{addr}/page")
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetchOptions { timeout_secs: 1, ..FetchOptions::default() }).unwrap()
    }

    #[test]
    fn http_fetcher_returns_body_on_success() {
        let url = serve_once(Some(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 11\r\nConnection: close\r\n\r\n<p>word</p>",
        ));
        let doc = fetcher().fetch(&url).unwrap();
        assert_eq!(doc.status, 200);
        assert_eq!(doc.body, "<p>word</p>");
    }

    #[test]
    fn http_fetcher_treats_non_success_status_as_fetch_error() {
        let url = serve_once(Some(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        ));
        match fetcher().fetch(&url) {
            Err(PipelineError::Fetch { reason, .. }) => assert!(reason.contains("404"), "{reason}"),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[test]
    fn http_fetcher_gives_up_on_a_silent_server() {
        let url = serve_once(None);
        let started = Instant::now();
        let res = fetcher().fetch(&url);
        assert!(matches!(res, Err(PipelineError::Fetch { .. })));
        assert!(started.elapsed() < Duration::from_secs(4), "took {:?}", started.elapsed());
    }

    #[test]
    fn validate_url_accepts_http_and_https() {
        assert_eq!(validate_url("https://example.com/a?b=1").unwrap().host_str(), Some("example.com"));
        assert_eq!(validate_url("  http://example.com  ").unwrap().scheme(), "http");
    }

    #[test]
    fn validate_url_adds_missing_scheme() {
        let u = validate_url("example.com/news").unwrap();
        assert_eq!(u.as_str(), "https://example.com/news");
    }

    #[test]
    fn validate_url_rejects_bad_input() {
        assert!(matches!(validate_url("   "), Err(PipelineError::MissingUrl)));
        assert!(matches!(validate_url("ftp://example.com"), Err(PipelineError::InvalidUrl { .. })));
        assert!(matches!(validate_url("http://"), Err(PipelineError::InvalidUrl { .. })));
    }

    #[test]
    fn file_fetcher_reports_missing_file_as_fetch_error() {
        let err = FileFetcher.fetch("file:///definitely/not/here.html").unwrap_err();
        assert!(matches!(err, PipelineError::Fetch { .. }));
    }
}
