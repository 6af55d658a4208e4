//! HTML table rendering.
//!
//! Wraps rows in `<table>`/`<thead>`/`<tbody>` markup, one `<tr>` line per
//! row, with standard entity escaping for `&`, `<`, `>` and `"`.

use super::{CheckedRows, Lines, TextRows};

pub(crate) fn render(headers: Vec<String>, rows: TextRows) -> crate::Result<Lines> {
    let expected = headers.len();

    let head = vec![
        "<table>".to_string(),
        "<thead>".to_string(),
        build_row(&headers, "th"),
        "</thead>".to_string(),
        "<tbody>".to_string(),
    ];

    let body = CheckedRows::new(rows, expected).map(|row| row.map(|row| build_row(&row, "td")));

    let tail = vec!["</tbody>".to_string(), "</table>".to_string()];

    Ok(Lines::new(
        head.into_iter()
            .map(Ok)
            .chain(body)
            .chain(tail.into_iter().map(Ok)),
    ))
}

fn build_row(cells: &[String], tag: &str) -> String {
    let mut out = String::from("<tr>");
    for cell in cells {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&escape_html(cell));
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out.push_str("</tr>");
    out
}

/// Escape HTML-special characters per standard entity rules.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
