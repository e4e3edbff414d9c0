// src/export.rs
//
// Frequency table → CSV/TSV text, for the clipboard and `--table-out`.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{analysis::FrequencyEntry, config::options::TableFormat};

pub const HEADERS: [&str; 3] = ["rank", "word", "count"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Ranked rows (1-based rank) of any entry slice, so both the full table
/// and a filtered view can be exported.
pub fn table_to_string<'a, I>(entries: I, format: TableFormat, include_headers: bool) -> String
where
    I: IntoIterator<Item = &'a FrequencyEntry>,
{
    let sep = format.delim();
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &HEADERS, sep);
    }
    for (i, e) in entries.into_iter().enumerate() {
        let row = [(i + 1).to_string(), e.token.clone(), e.count.to_string()];
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn write_table<'a, I>(path: &Path, entries: I, format: TableFormat, include_headers: bool) -> io::Result<()>
where
    I: IntoIterator<Item = &'a FrequencyEntry>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, table_to_string(entries, format, include_headers))?;
    logf!("Export: table → {}", path.display());
    Ok(())
}
