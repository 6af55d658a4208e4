//! Width-aligned grid rendering.
//!
//! One algorithm covers every bordered or whitespace-aligned format; the
//! [`GridSpec`] descriptor supplies the glyphs and separator policy. Column
//! widths depend on every row, so this renderer materializes its input up
//! front — the documented exception to the streaming pipeline — and
//! structural errors surface before the first line.

use crate::error::TaboutError;
use crate::format::{GridLine, GridSpec};
use crate::options::{Alignment, BorderStyle};
use crate::width::{display_width, fraction_width, pad, split_cell_lines};

use super::{Lines, TextRows};

/// Cells of one row, each split into display lines.
type RowBlock = Vec<Vec<String>>;

pub(crate) fn render(
    spec: &'static GridSpec,
    headers: Vec<String>,
    rows: TextRows,
    alignments: Vec<Alignment>,
    border: Option<BorderStyle>,
) -> crate::Result<Lines> {
    let expected = headers.len();

    let mut table: Vec<RowBlock> = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.len() != expected {
            return Err(TaboutError::ColumnMismatch {
                row: index + 1,
                expected,
                found: row.len(),
            });
        }
        table.push(
            row.iter()
                .map(|cell| {
                    split_cell_lines(cell)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .collect(),
        );
    }

    // Decimal columns line their points up before widths are measured, so
    // a whole number wider than its fractional neighbours still fits.
    for (c, align) in alignments.iter().enumerate() {
        if *align != Alignment::Decimal {
            continue;
        }
        let max_frac = table
            .iter()
            .flat_map(|row| row[c].iter())
            .filter_map(|line| fraction_width(line))
            .max();
        let Some(max_frac) = max_frac else { continue };
        for row in &mut table {
            for line in &mut row[c] {
                if let Some(frac) = fraction_width(line) {
                    let extra = (max_frac - frac) as usize;
                    if extra > 0 {
                        line.push_str(&" ".repeat(extra));
                    }
                }
            }
        }
    }

    let widths: Vec<usize> = (0..expected)
        .map(|c| {
            let cell_width = table
                .iter()
                .flat_map(|row| row[c].iter())
                .map(|line| display_width(line))
                .max()
                .unwrap_or(0);
            display_width(&headers[c]).max(cell_width)
        })
        .collect();

    let b = border.as_ref();
    let mut lines: Vec<String> = Vec::new();

    if let Some(line) = &spec.line_above {
        lines.push(border_line(line, &widths, spec.padding, b));
    }

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&alignments)
        .zip(&widths)
        .map(|((header, align), width)| pad(header, *width, *align))
        .collect();
    lines.push(data_line(&header_cells, spec, b));

    if spec.colon_separator {
        lines.push(colon_line(&widths, &alignments, spec, b));
    } else if let Some(line) = &spec.line_below_header {
        lines.push(border_line(line, &widths, spec.padding, b));
    }

    for (r, row) in table.iter().enumerate() {
        if r > 0 {
            if let Some(line) = &spec.line_between_rows {
                lines.push(border_line(line, &widths, spec.padding, b));
            }
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for i in 0..height {
            let cells: Vec<String> = (0..expected)
                .map(|c| {
                    let text = row[c].get(i).map(String::as_str).unwrap_or("");
                    pad(text, widths[c], alignments[c])
                })
                .collect();
            lines.push(data_line(&cells, spec, b));
        }
    }

    if let Some(line) = &spec.line_below {
        lines.push(border_line(line, &widths, spec.padding, b));
    }

    Ok(Lines::from_lines(lines))
}

/// Style a border glyph; whitespace separators pass through unstyled.
fn paint(border: Option<&BorderStyle>, glyph: &str) -> String {
    if glyph.trim().is_empty() {
        return glyph.to_string();
    }
    match border {
        Some(style) => style.paint(glyph),
        None => glyph.to_string(),
    }
}

fn border_line(
    line: &GridLine,
    widths: &[usize],
    padding: usize,
    border: Option<&BorderStyle>,
) -> String {
    let fill = paint(border, line.fill);
    let mut out = paint(border, line.begin);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str(&paint(border, line.sep));
        }
        out.push_str(&fill.repeat(width + 2 * padding));
    }
    out.push_str(&paint(border, line.end));
    out
}

fn data_line(cells: &[String], spec: &GridSpec, border: Option<&BorderStyle>) -> String {
    let padding = " ".repeat(spec.padding);
    let mut out = paint(border, spec.row.begin);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(&paint(border, spec.row.sep));
        }
        out.push_str(&padding);
        out.push_str(cell);
        out.push_str(&padding);
    }
    out.push_str(&paint(border, spec.row.end));
    if spec.trim_trailing {
        out.truncate(out.trim_end_matches(' ').len());
    }
    out
}

/// Alignment indicator row for pipe tables: `---:` right, `:---` left.
fn colon_line(
    widths: &[usize],
    alignments: &[Alignment],
    spec: &GridSpec,
    border: Option<&BorderStyle>,
) -> String {
    let dash = paint(border, "-");
    let colon = paint(border, ":");
    let mut out = paint(border, spec.row.begin);
    for (i, (width, align)) in widths.iter().zip(alignments).enumerate() {
        if i > 0 {
            out.push_str(&paint(border, spec.row.sep));
        }
        let total = width + 2 * spec.padding;
        match align {
            Alignment::Right | Alignment::Decimal => {
                out.push_str(&dash.repeat(total - 1));
                out.push_str(&colon);
            }
            Alignment::Left => {
                out.push_str(&colon);
                out.push_str(&dash.repeat(total - 1));
            }
        }
    }
    out.push_str(&paint(border, spec.row.end));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;

    fn text_rows(rows: Vec<Vec<&'static str>>) -> TextRows {
        Box::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect::<Vec<_>>()),
        )
    }

    fn grid_spec(format: Format) -> &'static GridSpec {
        match format.spec().family {
            crate::format::Family::Grid(spec) => spec,
            _ => panic!("not a grid format"),
        }
    }

    fn render_to_vec(
        format: Format,
        headers: &[&str],
        rows: Vec<Vec<&'static str>>,
        alignments: Vec<Alignment>,
    ) -> Vec<String> {
        let headers = headers.iter().map(|h| h.to_string()).collect();
        let lines = render(
            grid_spec(format),
            headers,
            text_rows(rows),
            alignments,
            None,
        )
        .unwrap();
        lines.collect::<crate::Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_ascii_left_alignment() {
        let lines = render_to_vec(
            Format::Ascii,
            &["letters", "number"],
            vec![vec!["abc", "1"], vec!["d", "456"]],
            vec![Alignment::Left, Alignment::Left],
        );
        assert_eq!(
            lines,
            vec![
                "+---------+--------+",
                "| letters | number |",
                "+---------+--------+",
                "| abc     | 1      |",
                "| d       | 456    |",
                "+---------+--------+",
            ]
        );
    }

    #[test]
    fn test_decimal_alignment_pads_fractions() {
        let lines = render_to_vec(
            Format::Psql,
            &["n"],
            vec![vec!["1"], vec!["11.1"], vec!["1234.57"]],
            vec![Alignment::Decimal],
        );
        assert_eq!(
            lines,
            vec![
                "+---------+",
                "|       n |",
                "|---------|",
                "|    1    |",
                "|   11.1  |",
                "| 1234.57 |",
                "+---------+",
            ]
        );
    }

    #[test]
    fn test_multiline_cells_expand_to_row_block() {
        let lines = render_to_vec(
            Format::Grid,
            &["a", "b"],
            vec![vec!["x\ny", "z"]],
            vec![Alignment::Left, Alignment::Left],
        );
        assert_eq!(
            lines,
            vec![
                "+---+---+",
                "| a | b |",
                "+===+===+",
                "| x | z |",
                "| y |   |",
                "+---+---+",
            ]
        );
    }

    #[test]
    fn test_wide_glyph_widens_column() {
        let lines = render_to_vec(
            Format::Psql,
            &["h"],
            vec![vec!["魚"]],
            vec![Alignment::Left],
        );
        assert_eq!(
            lines,
            vec!["+----+", "| h  |", "|----|", "| 魚 |", "+----+"]
        );
    }

    #[test]
    fn test_mismatch_fails_before_output() {
        let result = render(
            grid_spec(Format::Ascii),
            vec!["a".to_string(), "b".to_string()],
            text_rows(vec![vec!["1", "2", "3"]]),
            vec![Alignment::Left, Alignment::Left],
            None,
        );
        assert!(matches!(
            result,
            Err(TaboutError::ColumnMismatch {
                row: 1,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_trim_trailing_on_borderless_rows() {
        let lines = render_to_vec(
            Format::Simple,
            &["col", "x"],
            vec![vec!["a", "b"]],
            vec![Alignment::Left, Alignment::Left],
        );
        assert_eq!(lines, vec!["col  x", "---  -", "a    b"]);
    }
}
