//! # tabout
//!
//! Renders row/column tabular data into two dozen textual output formats —
//! box-drawing grids, CSV/TSV, wiki and Markdown-style markup, LaTeX,
//! HTML, and a vertical key-value layout — from a single abstract data
//! source.
//!
//! ## Overview
//!
//! One pipeline serves every format: cell values are classified by their
//! runtime variant (no declared schema), a preprocessing chain normalizes
//! rows and headers (missing-value markers, float display rounding,
//! control-character escaping), and a per-format renderer computes column
//! widths, alignment, borders and escaping. Output is a lazy sequence of
//! text lines; formats that can stream do (one line per input row), while
//! box-drawing grids materialize their input because column widths depend
//! on every row.
//!
//! - **Structural typing**: numeric columns right-align on the decimal
//!   point, text left-aligns; explicit types and alignments can override
//! - **Exact format geometry**: border glyphs, separator rows, quoting and
//!   escaping rules are fixed per format, from `psql` grids to `textile`
//! - **Display-width aware**: wide CJK glyphs count as two columns, ANSI
//!   escapes as zero
//! - **Pure pipeline**: no shared state, reentrant, caller-owned data
//!
//! ## Example
//!
//! ```rust
//! use tabout::{format_output, FormatOptions, Value};
//!
//! let headers = ["id", "name"];
//! let rows = vec![
//!     vec![Value::Int(1), Value::Text("Sam".into())],
//!     vec![Value::Int(2), Value::Null],
//! ];
//!
//! let lines = format_output(rows, headers, "ascii", FormatOptions::new()).unwrap();
//! let text = lines.into_text().unwrap();
//! assert_eq!(text, "\
//! +----+--------+
//! | id | name   |
//! +----+--------+
//! | 1  | Sam    |
//! | 2  | <null> |
//! +----+--------+");
//! ```

pub mod error;
pub mod format;
pub mod formatter;
pub mod options;
pub mod preprocess;
pub mod render;
pub mod value;
pub mod width;

pub use error::TaboutError;
pub use format::Format;
pub use formatter::{format_output, TableFormatter};
pub use options::{Alignment, BorderStyle, FormatOptions, DEFAULT_FLOAT_PRECISION};
pub use preprocess::{RowTransform, Rows, TransformContext};
pub use render::Lines;
pub use value::{ColumnType, Value};
pub use width::display_width;

/// Result type for tabout operations
pub type Result<T> = std::result::Result<T, TaboutError>;
