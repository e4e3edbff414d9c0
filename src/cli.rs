// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    analysis::segment::SegmenterKind,
    chart::{Backend, ChartKind},
    config::{self, options::{AppOptions, TableFormat}},
    core::net::FileFetcher,
    export,
    pipeline::{Pipeline, PipelineOutput, PipelineRequest},
    present,
    progress::{Progress, Stage},
};

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub source: Option<Source>,
    pub options: AppOptions,
    pub min_count: Option<u32>,
    pub out: Option<PathBuf>,
    pub json: bool,
    pub table_out: Option<PathBuf>,
    pub open: bool,
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> CliResult<String> {
    args.next().ok_or_else(|| format!("Missing value for {flag}").into())
}

/// Parse flags on top of `base` (usually the saved settings).
pub fn parse_args<I>(args: I, base: AppOptions) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs {
        source: None,
        options: base,
        min_count: None,
        out: None,
        json: false,
        table_out: None,
        open: false,
        verbose: false,
    };
    let opts = &mut cli.options;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => cli.source = Some(Source::Url(value(&mut args, &a)?)),
            "-i" | "--input" => cli.source = Some(Source::File(PathBuf::from(value(&mut args, &a)?))),
            "-b" | "--backend" => {
                let v = value(&mut args, &a)?;
                opts.chart.backend = Backend::parse(&v).ok_or_else(|| format!("Unknown backend: {v}"))?;
            }
            "-c" | "--chart" => {
                let v = value(&mut args, &a)?;
                opts.chart.kind = ChartKind::parse(&v).ok_or_else(|| format!("Unknown chart type: {v}"))?;
            }
            "-m" | "--min-count" => cli.min_count = Some(value(&mut args, &a)?.parse()?),
            "--top-n" => {
                let n: usize = value(&mut args, &a)?.parse()?;
                if n == 0 { return Err("--top-n must be at least 1".into()); }
                opts.analysis.top_n = n;
            }
            "--min-len" => {
                let n: usize = value(&mut args, &a)?.parse()?;
                if n == 0 { return Err("--min-len must be at least 1".into()); }
                opts.analysis.min_token_len = n;
            }
            "--loose" => opts.analysis.strict = false,
            "--segmenter" => {
                let v = value(&mut args, &a)?;
                opts.analysis.segmenter =
                    SegmenterKind::parse(&v).ok_or_else(|| format!("Unknown segmenter: {v}"))?;
            }
            "--timeout" => {
                let n: u64 = value(&mut args, &a)?.parse()?;
                if n == 0 { return Err("--timeout must be at least 1 second".into()); }
                opts.fetch.timeout_secs = n;
            }
            "-o" | "--out" => cli.out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--json" => cli.json = true,
            "--table-out" => cli.table_out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--format" => {
                let v = value(&mut args, &a)?;
                opts.output.table_format = TableFormat::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--no-headers" => opts.output.include_headers = false,
            "--strict-backend" => opts.chart.allow_substitution = false,
            "--open" => cli.open = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            // bare argument = URL
            other if !other.starts_with('-') && cli.source.is_none() => {
                cli.source = Some(Source::Url(s!(other)));
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(Command::Run(cli))
}

/// Stage lines on stderr; stdout stays clean for the table / JSON.
/// Stage chatter for `--verbose`. Silent otherwise: a failed run's message
/// is reported once, by the caller, from the returned error.
pub struct CliProgress<W: Write> {
    verbose: bool,
    out: W,
}

impl<W: Write> Progress for CliProgress<W> {
    fn begin(&mut self, url: &str) {
        if self.verbose { let _ = writeln!(self.out, "Analyzing {url}"); }
    }
    fn stage(&mut self, stage: Stage) {
        if self.verbose { let _ = writeln!(self.out, "  {stage}…"); }
    }
    fn log(&mut self, msg: &str) {
        if self.verbose { let _ = writeln!(self.out, "{msg}"); }
    }
}

pub fn run() -> CliResult<()> {
    let settings = config::file::load(&config::file::default_path());
    let cli = match parse_args(env::args().skip(1), settings.options)? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(cli) => cli,
    };

    crate::log::init(cli.verbose);
    logf!("CLI: start {:?}", cli.source);

    let (mut pipeline, url) = match &cli.source {
        Some(Source::Url(u)) => (Pipeline::http(&cli.options.fetch)?, u.clone()),
        Some(Source::File(p)) => (Pipeline::new(Box::new(FileFetcher)), p.to_string_lossy().into_owned()),
        None => {
            eprintln!("{HELP}");
            return Err("Missing --url or --input".into());
        }
    };

    let req = PipelineRequest::from_options(url, &cli.options, cli.min_count);
    let mut prog = CliProgress { verbose: cli.verbose, out: io::stderr() };
    let out = pipeline.run(&req, Some(&mut prog)).map_err(|e| e.user_message())?;

    let stdout = io::stdout();
    print_table(stdout.lock(), &out)?;

    let page = cli.out.clone().unwrap_or_else(|| cli.options.output.page_path.clone());
    let title = format!("{} ({})", out.chart.kind().label(), out.chart.backend().label());
    let written = present::write_page(out.chart.as_ref(), &title, &page)?;
    eprintln!("Chart written to {}", written.display());

    if cli.json {
        println!("{}", out.chart.to_json_pretty());
    }

    if let Some(path) = &cli.table_out {
        let o = &cli.options.output;
        export::write_table(path, &out.filtered, o.table_format, o.include_headers)?;
        eprintln!("Table written to {}", path.display());
    }

    if cli.open {
        present::open_in_browser(&written)?;
    }

    Ok(())
}

fn print_table<W: Write>(mut w: W, out: &PipelineOutput) -> io::Result<()> {
    writeln!(
        w,
        "{} words ≥ {} (slider range {}..={}), {} counted",
        out.filtered.len(),
        out.min_count,
        out.bounds.min,
        out.bounds.max,
        out.table.total_tokens(),
    )?;
    let width = out.filtered.iter().map(|e| e.token.chars().count()).max().unwrap_or(4).max(4);
    for (i, e) in out.filtered.iter().enumerate() {
        writeln!(w, "{:>3}  {:<width$}  {}", i + 1, e.token, e.count)?;
    }
    if !out.chart.support().is_native() {
        writeln!(
            w,
            "note: {} on {} drawn as {}",
            out.chart.kind(),
            out.chart.backend(),
            out.chart.support().primitive()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    fn run_args(v: &[&str]) -> CliArgs {
        match parse_args(args(v), AppOptions::default()).unwrap() {
            Command::Run(c) => c,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn parses_full_flag_set() {
        let c = run_args(&[
            "--url", "https://example.com", "--backend", "plotly", "--chart", "radar",
            "--min-count", "3", "--top-n", "10", "--min-len", "1", "--loose",
            "--segmenter", "whitespace", "--timeout", "5", "--json", "--format", "tsv",
            "--strict-backend", "-v",
        ]);
        assert_eq!(c.source, Some(Source::Url(s!("https://example.com"))));
        assert_eq!(c.options.chart.backend, Backend::Plotly);
        assert_eq!(c.options.chart.kind, ChartKind::Radar);
        assert_eq!(c.min_count, Some(3));
        assert_eq!(c.options.analysis.top_n, 10);
        assert_eq!(c.options.analysis.min_token_len, 1);
        assert!(!c.options.analysis.strict);
        assert_eq!(c.options.analysis.segmenter, SegmenterKind::Whitespace);
        assert_eq!(c.options.fetch.timeout_secs, 5);
        assert_eq!(c.options.output.table_format, TableFormat::Tsv);
        assert!(!c.options.chart.allow_substitution);
        assert!(c.json && c.verbose);
    }

    #[test]
    fn bare_argument_is_url_and_help_short_circuits() {
        let c = run_args(&["example.com"]);
        assert_eq!(c.source, Some(Source::Url(s!("example.com"))));
        assert_eq!(parse_args(args(&["-h", "--bogus"]), AppOptions::default()).unwrap(), Command::Help);
    }

    #[test]
    fn rejects_bad_values() {
        for bad in [
            &["--backend", "matplotlib"][..],
            &["--chart", "sankey"],
            &["--top-n", "0"],
            &["--min-count"],
            &["--wat"],
        ] {
            assert!(parse_args(args(bad), AppOptions::default()).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn failed_run_is_not_reported_by_quiet_progress() {
        let mut pipeline = Pipeline::new(Box::new(FileFetcher));
        let req = PipelineRequest::new("/definitely/not/here.html");

        let mut quiet = CliProgress { verbose: false, out: Vec::new() };
        assert!(pipeline.run(&req, Some(&mut quiet)).is_err());
        assert!(quiet.out.is_empty());

        let mut loud = CliProgress { verbose: true, out: Vec::new() };
        let err = pipeline.run(&req, Some(&mut loud)).unwrap_err();
        let text = String::from_utf8(loud.out).unwrap();
        assert!(text.contains(&err.user_message()), "{text}");
    }
}
