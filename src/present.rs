//! Presentation mapping: display columns, the saldo/unit merge, and
//! highlight markup.
//!
//! Output cells are HTML text nodes: cell text is escaped, and every
//! query occurrence is wrapped in the highlight marker. Matching runs on
//! the raw cell text, so a query containing `&` still finds `&` cells.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::models::{Dataset, Row};

/// Fixed display columns for the stok dataset. Anything else the feed
/// carries stays hidden.
const STOK_DISPLAY_HEADERS: [&str; 6] = [
    "Brand",
    "Material",
    "Dimensi Roll",
    "Saldo",
    "Keterangan",
    "Gudang",
];

/// Header names that mark the unit column sitting next to `Saldo`.
const UNIT_HEADERS: [&str; 6] = ["pcs", "m2", "m'", "m", "batang", "roll"];

const PLACEHOLDER: &str = "-";

const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Rendered table: headers plus per-row cells carrying highlight markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Map matched rows into display form for a dataset.
///
/// Pure function of its inputs: same rows, headers, dataset and query
/// always produce the same table.
pub fn present(rows: &[&Row], headers: &[String], dataset: Dataset, query: &str) -> DisplayTable {
    let pattern = highlight_pattern(query);
    let pattern = pattern.as_ref();

    match dataset {
        Dataset::Harga => DisplayTable {
            headers: headers.to_vec(),
            rows: rows
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .map(|header| cell(row.get(header), pattern))
                        .collect()
                })
                .collect(),
        },
        Dataset::Stok => {
            let unit_key = unit_column(headers);
            DisplayTable {
                headers: STOK_DISPLAY_HEADERS.iter().map(|h| h.to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| {
                        STOK_DISPLAY_HEADERS
                            .iter()
                            .map(|&header| {
                                if header == "Saldo" {
                                    saldo_cell(row, unit_key, pattern)
                                } else {
                                    cell(row.get(header), pattern)
                                }
                            })
                            .collect()
                    })
                    .collect(),
            }
        }
    }
}

/// The column holding the unit that belongs with `Saldo`: the sheet leaves
/// it unlabeled, or labels it with the bare unit token itself.
fn unit_column(headers: &[String]) -> Option<&String> {
    headers.iter().find(|header| {
        header.is_empty()
            || UNIT_HEADERS
                .iter()
                .any(|unit| unit.eq_ignore_ascii_case(header))
    })
}

/// `Saldo` merged with its sibling unit: `"5 pcs"` when a unit value is
/// present, the bare saldo otherwise.
fn saldo_cell(row: &Row, unit_key: Option<&String>, pattern: Option<&Regex>) -> String {
    let saldo = row.get("Saldo").map(String::as_str).unwrap_or("");
    let unit = unit_key
        .and_then(|key| row.get(key))
        .map(String::as_str)
        .unwrap_or("");

    let merged = if unit.is_empty() {
        saldo.to_string()
    } else {
        format!("{saldo} {unit}")
    };

    if merged.is_empty() {
        render(PLACEHOLDER, pattern)
    } else {
        render(&merged, pattern)
    }
}

fn cell(value: Option<&String>, pattern: Option<&Regex>) -> String {
    match value {
        Some(value) if !value.is_empty() => render(value, pattern),
        _ => render(PLACEHOLDER, pattern),
    }
}

fn highlight_pattern(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Escape `text` for HTML and wrap every query occurrence in the
/// highlight marker. Occurrences never nest: scanning resumes after each
/// matched span.
fn render(text: &str, pattern: Option<&Regex>) -> String {
    let Some(pattern) = pattern else {
        return escape_html(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[last..found.start()]));
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&escape_html(found.as_str()));
        out.push_str(HIGHLIGHT_CLOSE);
        last = found.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Wrap every case-insensitive occurrence of `query` in `text` in the
/// highlight marker, escaping the text for HTML.
pub fn highlight(text: &str, query: &str) -> String {
    render(text, highlight_pattern(query).as_ref())
}

/// Minimal HTML escaping for text nodes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_highlight_preserves_original_casing() {
        assert_eq!(
            highlight("SS30 Galvanized", "ss30"),
            r#"<span class="highlight">SS30</span> Galvanized"#
        );
    }

    #[test]
    fn test_highlight_wraps_every_occurrence_without_nesting() {
        assert_eq!(
            highlight("aaa", "a"),
            r#"<span class="highlight">a</span><span class="highlight">a</span><span class="highlight">a</span>"#
        );
        // Overlapping candidates: scan resumes after each match.
        assert_eq!(
            highlight("aaa", "aa"),
            r#"<span class="highlight">aa</span>a"#
        );
    }

    #[test]
    fn test_highlight_escapes_html() {
        assert_eq!(highlight("<b>5</b>", "x"), "&lt;b&gt;5&lt;/b&gt;");
        assert_eq!(
            highlight("a<b", "<b"),
            r#"a<span class="highlight">&lt;b</span>"#
        );
    }

    #[test]
    fn test_highlight_treats_query_as_literal() {
        assert_eq!(
            highlight("besi 4x4 (besar)", "(besar)"),
            r#"besi 4x4 <span class="highlight">(besar)</span>"#
        );
        assert_eq!(highlight("plain", ".*"), "plain");
    }

    #[test]
    fn test_harga_headers_verbatim_and_placeholder() {
        let hs = headers(&["Item", "Harga", "Gudang"]);
        let r = row(&[("Item", "SS30"), ("Harga", "")]);
        let rows = vec![&r];

        let table = present(&rows, &hs, Dataset::Harga, "ss30");
        assert_eq!(table.headers, hs);
        assert_eq!(
            table.rows[0],
            vec![
                r#"<span class="highlight">SS30</span>"#.to_string(),
                "-".to_string(), // empty value
                "-".to_string(), // absent column
            ]
        );
    }

    #[test]
    fn test_present_is_idempotent() {
        let hs = headers(&["Item"]);
        let r = row(&[("Item", "SS30 Galvanized")]);
        let rows = vec![&r];

        let first = present(&rows, &hs, Dataset::Harga, "ss30");
        let second = present(&rows, &hs, Dataset::Harga, "ss30");
        assert_eq!(first, second);
    }

    #[test]
    fn test_stok_fixed_headers_hide_extra_columns() {
        let hs = headers(&["Brand", "Material", "Internal Code", "Saldo"]);
        let r = row(&[
            ("Brand", "X"),
            ("Material", "Y"),
            ("Internal Code", "SECRET"),
            ("Saldo", "5"),
        ]);
        let rows = vec![&r];

        let table = present(&rows, &hs, Dataset::Stok, "x");
        assert_eq!(table.headers, headers(&STOK_DISPLAY_HEADERS));
        assert!(!table.rows[0].join("").contains("SECRET"));
        // Listed-but-absent columns render the placeholder.
        assert_eq!(table.rows[0][2], "-"); // Dimensi Roll
        assert_eq!(table.rows[0][4], "-"); // Keterangan
    }

    #[test]
    fn test_saldo_merges_unit_from_unlabeled_column() {
        let hs = headers(&["Brand", "Material", "Saldo", "", "Gudang"]);
        let r = row(&[
            ("Brand", "X"),
            ("Material", "Y"),
            ("Saldo", "5"),
            ("", "pcs"),
            ("Gudang", "Z"),
        ]);
        let rows = vec![&r];

        let table = present(&rows, &hs, Dataset::Stok, "x");
        assert_eq!(table.rows[0][3], "5 pcs");
    }

    #[test]
    fn test_saldo_merges_unit_from_token_labeled_column() {
        let hs = headers(&["Brand", "Saldo", "M2"]);
        let r = row(&[("Brand", "X"), ("Saldo", "12"), ("M2", "m2")]);
        let rows = vec![&r];

        let table = present(&rows, &hs, Dataset::Stok, "x");
        assert_eq!(table.rows[0][3], "12 m2");
    }

    #[test]
    fn test_saldo_alone_when_unit_empty_or_missing() {
        let hs = headers(&["Brand", "Saldo", ""]);
        let r = row(&[("Brand", "X"), ("Saldo", "7"), ("", "")]);
        let rows = vec![&r];
        let table = present(&rows, &hs, Dataset::Stok, "x");
        assert_eq!(table.rows[0][3], "7");

        let hs = headers(&["Brand", "Saldo"]);
        let r = row(&[("Brand", "X"), ("Saldo", "7")]);
        let rows = vec![&r];
        let table = present(&rows, &hs, Dataset::Stok, "x");
        assert_eq!(table.rows[0][3], "7");
    }

    #[test]
    fn test_saldo_highlighting_covers_merged_value() {
        let hs = headers(&["Brand", "Saldo", ""]);
        let r = row(&[("Brand", "X"), ("Saldo", "5"), ("", "pcs")]);
        let rows = vec![&r];

        let table = present(&rows, &hs, Dataset::Stok, "pcs");
        assert_eq!(table.rows[0][3], r#"5 <span class="highlight">pcs</span>"#);
    }

    #[test]
    fn test_unit_column_matches_whole_header_only() {
        let hs = headers(&["Brand", "Mm", "Roll"]);
        assert_eq!(unit_column(&hs).map(String::as_str), Some("Roll"));

        let hs = headers(&["Brand", "mm", "meter"]);
        assert_eq!(unit_column(&hs), None);
    }

    #[test]
    fn test_unit_column_prefers_first_candidate() {
        let hs = headers(&["", "pcs"]);
        assert_eq!(unit_column(&hs).map(String::as_str), Some(""));
    }
}
