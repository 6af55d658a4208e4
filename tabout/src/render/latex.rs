//! LaTeX tabular rendering (latex, latex_booktabs).
//!
//! Emits a fixed `\begin{tabular}` preamble keyed by column count, rule
//! lines (`\hline`, or booktabs rules), and one ` a & b \\` line per row.
//! Cell text is escaped character by character; the newline-escape
//! preprocessor runs first, so an embedded `\r` arrives here as a literal
//! backslash and leaves as `\textbackslash{}r`.

use super::{CheckedRows, Lines, TextRows};

pub(crate) fn render(booktabs: bool, headers: Vec<String>, rows: TextRows) -> crate::Result<Lines> {
    let expected = headers.len();
    let (top, mid, bottom) = if booktabs {
        ("\\toprule", "\\midrule", "\\bottomrule")
    } else {
        ("\\hline", "\\hline", "\\hline")
    };

    let head = vec![
        format!("\\begin{{tabular}}{{{}}}", "l".repeat(expected)),
        top.to_string(),
        build_row(&headers),
        mid.to_string(),
    ];

    let body = CheckedRows::new(rows, expected).map(|row| row.map(|row| build_row(&row)));

    let tail = vec![bottom.to_string(), "\\end{tabular}".to_string()];

    Ok(Lines::new(
        head.into_iter()
            .map(Ok)
            .chain(body)
            .chain(tail.into_iter().map(Ok)),
    ))
}

fn build_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|cell| escape_latex(cell)).collect();
    format!(" {} \\\\", escaped.join(" & "))
}

/// Escape LaTeX-special characters in cell text.
fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '^' => out.push_str("\\^{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            '<' => out.push_str("\\ensuremath{<}"),
            '>' => out.push_str("\\ensuremath{>}"),
            other => out.push(other),
        }
    }
    out
}
