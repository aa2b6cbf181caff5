//! Result presentation: an ASCII table on stdout and a CSV export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::version::checker::StatusRecord;

const TABLE_HEADER: [&str; 3] = ["Kind", "Formula", "Status"];
const CSV_HEADER: [&str; 3] = ["kind", "formula", "status"];

fn cells(record: &StatusRecord) -> [&str; 3] {
    [
        record.kind.label(),
        record.package_name.as_str(),
        record.status.as_str(),
    ]
}

/// Print the records as a left-aligned table on stdout
pub fn render(records: &[StatusRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_table(records, &mut out)?;
    out.flush()
}

/// Write the records as a left-aligned, boxed table
pub fn render_table<W: Write>(records: &[StatusRecord], out: &mut W) -> io::Result<()> {
    let mut widths = TABLE_HEADER.map(|h| h.chars().count());
    for record in records {
        for (width, cell) in widths.iter_mut().zip(cells(record)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .chain(std::iter::once("+".to_string()))
        .collect();

    let write_row = |out: &mut W, row: [&str; 3]| -> io::Result<()> {
        for (cell, width) in row.iter().zip(widths) {
            let pad = width - cell.chars().count();
            write!(out, "| {}{} ", cell, " ".repeat(pad))?;
        }
        writeln!(out, "|")
    };

    writeln!(out, "{}", rule)?;
    write_row(out, TABLE_HEADER)?;
    writeln!(out, "{}", rule)?;
    if !records.is_empty() {
        for record in records {
            write_row(out, cells(record))?;
        }
        writeln!(out, "{}", rule)?;
    }

    Ok(())
}

/// Write the records to `path` as CSV with every field quoted
pub fn write_csv(records: &[StatusRecord], path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_csv_to(records, &mut out)?;
    out.flush()
}

/// Write the records as CSV: header `kind,formula,status`, CRLF line endings
pub fn write_csv_to<W: Write>(records: &[StatusRecord], out: &mut W) -> io::Result<()> {
    write_csv_row(out, CSV_HEADER)?;
    for record in records {
        write_csv_row(out, cells(record))?;
    }
    Ok(())
}

fn write_csv_row<W: Write>(out: &mut W, row: [&str; 3]) -> io::Result<()> {
    let line = row
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",");
    write!(out, "{}\r\n", line)
}
