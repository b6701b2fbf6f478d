//! Naive CSV table splitting for the sheet export.
//!
//! Rows split on newlines, cells on commas; quote characters and
//! surrounding whitespace are stripped from every cell. A quoted cell
//! containing a literal comma is mis-split into extra columns — the live
//! sheet data is curated to avoid embedded commas, and preserving the
//! split keeps parity with how that data has always been read.

/// Splits a raw CSV document into rows of cleaned cells.
///
/// Blank lines are skipped; the caller treats row 0 as headers.
#[must_use]
pub fn parse_table(raw: &str) -> Vec<Vec<String>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(clean_cell).collect())
        .collect()
}

fn clean_cell(cell: &str) -> String {
    cell.replace('"', "").trim().to_string()
}
