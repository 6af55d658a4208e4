//! Vertical key-value rendering.
//!
//! Ignores column widths entirely: each row becomes a numbered block — a
//! starred divider followed by one `header | value` line per column, with
//! headers left-justified to the widest header label. Values pass through
//! raw; this format neither escapes nor rounds.

use crate::options::Alignment;
use crate::width::{display_width, pad};

use super::{CheckedRows, Lines, TextRows};

const DIVIDER_STARS: usize = 27;

pub(crate) fn render(headers: Vec<String>, rows: TextRows) -> crate::Result<Lines> {
    let expected = headers.len();
    let label_width = headers.iter().map(|h| display_width(h)).max().unwrap_or(0);
    let labels: Vec<String> = headers
        .iter()
        .map(|h| pad(h, label_width, Alignment::Left))
        .collect();

    let body = CheckedRows::new(rows, expected)
        .enumerate()
        .flat_map(move |(index, row)| match row {
            Ok(row) => {
                let mut block = Vec::with_capacity(row.len() + 1);
                block.push(Ok(divider(index + 1)));
                for (label, value) in labels.iter().zip(&row) {
                    block.push(Ok(format!("{} | {}", label, value)));
                }
                block
            }
            Err(err) => vec![Err(err)],
        });

    Ok(Lines::new(body))
}

fn divider(row: usize) -> String {
    let stars = "*".repeat(DIVIDER_STARS);
    format!("{stars}[ {row}. row ]{stars}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(rows: Vec<Vec<&'static str>>) -> TextRows {
        Box::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect::<Vec<_>>()),
        )
    }

    #[test]
    fn test_divider() {
        assert_eq!(
            divider(1),
            "***************************[ 1. row ]***************************"
        );
    }

    #[test]
    fn test_blocks_align_headers() {
        let headers = vec!["id".to_string(), "name".to_string()];
        let lines = render(headers, text_rows(vec![vec!["1", "Sam"]])).unwrap();
        let lines: crate::Result<Vec<_>> = lines.collect();
        assert_eq!(
            lines.unwrap()[1..],
            ["id   | 1".to_string(), "name | Sam".to_string()]
        );
    }

    #[test]
    fn test_empty_rows_produce_no_blocks() {
        let lines = render(vec!["h".to_string()], text_rows(vec![])).unwrap();
        assert_eq!(lines.count(), 0);
    }
}
