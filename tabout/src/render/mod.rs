//! Per-family rendering engines.
//!
//! Each renderer consumes normalized text rows and produces a lazy
//! sequence of output lines. The delimited, markup, LaTeX, HTML and
//! vertical families stream one output chunk per input row; the grid
//! family must materialize its input to compute column widths and fails
//! eagerly instead (see [`grid`]).

pub(crate) mod delimited;
pub(crate) mod grid;
pub(crate) mod html;
pub(crate) mod latex;
pub(crate) mod markup;
pub(crate) mod vertical;

use std::fmt;

use crate::error::TaboutError;
use crate::format::{Family, Format};
use crate::options::{Alignment, BorderStyle};

/// Normalized rows of display text, one `Vec<String>` per row.
pub(crate) type TextRows = Box<dyn Iterator<Item = Vec<String>>>;

/// Lazy sequence of rendered output lines.
///
/// Lines carry no trailing terminator; join with your platform separator.
/// Streaming formats surface a header/row width mismatch as an `Err` item
/// at the offending row, after which the sequence ends — nothing is
/// yielded past the first error.
pub struct Lines {
    inner: Box<dyn Iterator<Item = crate::Result<String>>>,
    failed: bool,
}

impl Lines {
    pub(crate) fn new(inner: impl Iterator<Item = crate::Result<String>> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            failed: false,
        }
    }

    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self::new(lines.into_iter().map(Ok))
    }

    /// Collect the remaining lines into one newline-joined string.
    pub fn into_text(self) -> crate::Result<String> {
        let lines: Vec<String> = self.collect::<crate::Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

impl Iterator for Lines {
    type Item = crate::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.inner.next();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl fmt::Debug for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lines").finish_non_exhaustive()
    }
}

/// Streaming adapter that checks each row's width against the header.
///
/// Yields `Err(ColumnMismatch)` for the first offending row and nothing
/// afterwards.
pub(crate) struct CheckedRows {
    rows: TextRows,
    expected: usize,
    index: usize,
    done: bool,
}

impl CheckedRows {
    pub(crate) fn new(rows: TextRows, expected: usize) -> Self {
        Self {
            rows,
            expected,
            index: 0,
            done: false,
        }
    }
}

impl Iterator for CheckedRows {
    type Item = crate::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row = self.rows.next()?;
        self.index += 1;
        if row.len() != self.expected {
            self.done = true;
            return Some(Err(TaboutError::ColumnMismatch {
                row: self.index,
                expected: self.expected,
                found: row.len(),
            }));
        }
        Some(Ok(row))
    }
}

/// Dispatch to the family renderer selected by the format descriptor.
pub(crate) fn render(
    format: Format,
    headers: Vec<String>,
    rows: TextRows,
    alignments: Vec<Alignment>,
    border: Option<BorderStyle>,
) -> crate::Result<Lines> {
    match format.spec().family {
        Family::Grid(spec) => grid::render(spec, headers, rows, alignments, border),
        Family::Delimited(spec) => delimited::render(spec, headers, rows),
        Family::Markup(spec) => markup::render(spec, headers, rows),
        Family::Latex { booktabs } => latex::render(booktabs, headers, rows),
        Family::Html => html::render(headers, rows),
        Family::Vertical => vertical::render(headers, rows),
    }
}
