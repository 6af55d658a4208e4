//! Lightweight markup rendering (jira, mediawiki, moinmoin, textile).
//!
//! Cells are emitted unpadded between fixed per-format delimiters; these
//! formats never align columns. Streams one row template per input row,
//! with optional fixed preamble/postamble lines and a lead line before each
//! row (mediawiki's `|-`).

use crate::format::{MarkupSpec, RowTemplate};

use super::{CheckedRows, Lines, TextRows};

pub(crate) fn render(
    spec: &'static MarkupSpec,
    headers: Vec<String>,
    rows: TextRows,
) -> crate::Result<Lines> {
    let expected = headers.len();

    let mut head: Vec<String> = spec.preamble.iter().map(|s| s.to_string()).collect();
    if let Some(lead) = spec.row_lead {
        head.push(lead.to_string());
    }
    head.push(build_row(&headers, &spec.header, false));

    let body = CheckedRows::new(rows, expected).flat_map(move |row| match row {
        Ok(row) => {
            let mut lines = Vec::with_capacity(2);
            if let Some(lead) = spec.row_lead {
                lines.push(Ok(lead.to_string()));
            }
            lines.push(Ok(build_row(&row, &spec.data, spec.widen_first_data_cell)));
            lines
        }
        Err(err) => vec![Err(err)],
    });

    let tail = spec.postamble.iter().map(|s| Ok(s.to_string()));

    Ok(Lines::new(head.into_iter().map(Ok).chain(body).chain(tail)))
}

fn build_row(cells: &[String], template: &RowTemplate, widen_first: bool) -> String {
    let mut out = String::from(template.begin);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(template.sep);
        }
        out.push_str(cell);
        if i == 0 && widen_first {
            out.push(' ');
        }
    }
    out.push_str(template.end);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_row_jira() {
        let template = RowTemplate {
            begin: "|| ",
            sep: " || ",
            end: " ||",
        };
        assert_eq!(
            build_row(&cells(&["a", "b"]), &template, false),
            "|| a || b ||"
        );
    }

    #[test]
    fn test_build_row_textile_widens_first_cell() {
        let template = RowTemplate {
            begin: "| ",
            sep: " | ",
            end: " |",
        };
        assert_eq!(
            build_row(&cells(&["1", "abc"]), &template, true),
            "| 1  | abc |"
        );
    }
}
