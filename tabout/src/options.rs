//! Configuration for a formatting run.
//!
//! All options are optional; [`FormatOptions::default`] reproduces the
//! behavior of a bare `format_output` call. Builder methods consume and
//! return the options so call sites read as one chain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::preprocess::RowTransform;
use crate::value::ColumnType;

/// Display precision for floats when the caller does not set one.
pub const DEFAULT_FLOAT_PRECISION: usize = 2;

/// Horizontal alignment of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Flush left (default for text columns)
    #[default]
    Left,
    /// Flush right
    Right,
    /// Right-flushed with decimal points lined up (default for numeric
    /// columns in width-aligned formats)
    Decimal,
}

/// Opaque styling capability applied to border and separator glyphs.
///
/// Wraps a [`console::Style`]; the renderer applies it to every border
/// glyph it emits and never to cell content. Styling is forced on so the
/// capability behaves the same whether or not output goes to a terminal.
#[derive(Clone)]
pub struct BorderStyle {
    style: console::Style,
}

impl BorderStyle {
    /// Wrap a console style as a border styling capability.
    pub fn new(style: console::Style) -> Self {
        Self {
            style: style.force_styling(true),
        }
    }

    /// Apply the style to a single border glyph.
    pub(crate) fn paint(&self, glyph: &str) -> String {
        if glyph.is_empty() {
            return String::new();
        }
        self.style.apply_to(glyph).to_string()
    }
}

impl fmt::Debug for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderStyle").finish_non_exhaustive()
    }
}

/// Options accepted by the formatter facade.
pub struct FormatOptions {
    pub(crate) missing_value: Option<String>,
    pub(crate) float_precision: usize,
    pub(crate) column_types: Option<Vec<ColumnType>>,
    pub(crate) alignments: Option<Vec<Alignment>>,
    pub(crate) transforms: Vec<Box<dyn RowTransform>>,
    pub(crate) border_style: Option<BorderStyle>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            missing_value: None,
            float_precision: DEFAULT_FLOAT_PRECISION,
            column_types: None,
            alignments: None,
            transforms: Vec::new(),
            border_style: None,
        }
    }
}

impl FormatOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker substituted for null cells.
    ///
    /// Without this, grid/markup/vertical formats use `<null>` and the
    /// delimited formats use an empty field.
    pub fn with_missing_value(mut self, marker: impl Into<String>) -> Self {
        self.missing_value = Some(marker.into());
        self
    }

    /// Display precision for float cells in formats that round.
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    /// Explicit per-column types, bypassing the classifier.
    pub fn with_column_types(mut self, types: Vec<ColumnType>) -> Self {
        self.column_types = Some(types);
        self
    }

    /// Explicit per-column alignment, overriding the type-driven default.
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = Some(alignments);
        self
    }

    /// Append a custom transform, run after the baseline preprocessing
    /// chain in the order added.
    pub fn with_transform(mut self, transform: Box<dyn RowTransform>) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Styling capability for border glyphs.
    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }
}

impl fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("missing_value", &self.missing_value)
            .field("float_precision", &self.float_precision)
            .field("column_types", &self.column_types)
            .field("alignments", &self.alignments)
            .field("transforms", &self.transforms.len())
            .field("border_style", &self.border_style)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FormatOptions::default();
        assert!(opts.missing_value.is_none());
        assert_eq!(opts.float_precision, 2);
        assert!(opts.column_types.is_none());
        assert!(opts.alignments.is_none());
        assert!(opts.transforms.is_empty());
        assert!(opts.border_style.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let opts = FormatOptions::new()
            .with_missing_value("N/A")
            .with_float_precision(4)
            .with_column_types(vec![ColumnType::Int, ColumnType::Text]);
        assert_eq!(opts.missing_value.as_deref(), Some("N/A"));
        assert_eq!(opts.float_precision, 4);
        assert_eq!(
            opts.column_types,
            Some(vec![ColumnType::Int, ColumnType::Text])
        );
    }

    #[test]
    fn test_border_style_paints_glyphs() {
        let style = BorderStyle::new(console::Style::new().red());
        assert_eq!(style.paint("+"), "\u{1b}[31m+\u{1b}[0m");
        assert_eq!(style.paint(""), "");
    }
}
