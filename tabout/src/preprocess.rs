//! Preprocessing chain run over rows and headers before rendering.
//!
//! Every step is a pure transformation from one lazy row stream to another;
//! the caller's rows are consumed, never mutated in place. The baseline
//! chain runs in a fixed order — missing-value substitution, float display
//! rounding, conversion to text, control-character escaping — and then any
//! caller-supplied [`RowTransform`]s, so custom steps always observe
//! normalized text rows. Reordering is visible in output: rounding after
//! escaping would corrupt escaped text.

use crate::format::{Format, FormatSpec};
use crate::value::{ColumnType, Value};

/// A lazy stream of rows flowing through the preprocessing chain.
pub type Rows = Box<dyn Iterator<Item = Vec<Value>>>;

/// Read-only context handed to every transform step.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// Target output format
    pub format: Format,
    /// Inferred or caller-supplied per-column types
    pub column_types: Vec<ColumnType>,
    /// Resolved missing-value marker
    pub missing_value: String,
    /// Display precision for float rounding
    pub float_precision: usize,
}

/// A caller-supplied transform step appended after the baseline chain.
///
/// Implemented for any
/// `Fn(Rows, Vec<String>, &TransformContext) -> (Rows, Vec<String>)`, so a
/// plain function or closure works:
///
/// ```
/// use tabout::{Rows, TransformContext};
///
/// fn upper_headers(
///     rows: Rows,
///     headers: Vec<String>,
///     _ctx: &TransformContext,
/// ) -> (Rows, Vec<String>) {
///     let headers = headers.iter().map(|h| h.to_uppercase()).collect();
///     (rows, headers)
/// }
/// ```
pub trait RowTransform {
    /// Transform the row stream and headers, returning new ones.
    fn apply(
        &self,
        rows: Rows,
        headers: Vec<String>,
        ctx: &TransformContext,
    ) -> (Rows, Vec<String>);
}

impl<F> RowTransform for F
where
    F: Fn(Rows, Vec<String>, &TransformContext) -> (Rows, Vec<String>),
{
    fn apply(
        &self,
        rows: Rows,
        headers: Vec<String>,
        ctx: &TransformContext,
    ) -> (Rows, Vec<String>) {
        self(rows, headers, ctx)
    }
}

/// Replace null cells with the marker text.
///
/// Terminal for null handling: later steps never see `Value::Null`.
pub(crate) fn substitute_missing(rows: Rows, marker: &str) -> Rows {
    let marker = marker.to_string();
    Box::new(rows.map(move |row| {
        row.into_iter()
            .map(|value| {
                if value.is_null() {
                    Value::Text(marker.clone())
                } else {
                    value
                }
            })
            .collect()
    }))
}

/// Round float cells to their display precision.
///
/// Ints and decimals pass through untouched; they always render in full
/// precision.
pub(crate) fn round_floats(rows: Rows, precision: usize) -> Rows {
    Box::new(rows.map(move |row| {
        row.into_iter()
            .map(|value| match value {
                Value::Float(f) => Value::Text(format_float(f, precision)),
                other => other,
            })
            .collect()
    }))
}

/// Convert every remaining cell to its text form.
pub(crate) fn into_text(rows: Rows) -> Rows {
    Box::new(rows.map(|row| {
        row.into_iter()
            .map(|value| match value {
                text @ Value::Text(_) => text,
                other => Value::Text(other.raw_text()),
            })
            .collect()
    }))
}

/// Escape embedded carriage returns and newlines to visible sequences.
pub(crate) fn escape_newlines(rows: Rows) -> Rows {
    Box::new(rows.map(|row| {
        row.into_iter()
            .map(|value| match value {
                Value::Text(s) if s.contains(['\r', '\n']) => {
                    Value::Text(s.replace('\r', "\\r").replace('\n', "\\n"))
                }
                other => other,
            })
            .collect()
    }))
}

/// Run the baseline chain for `spec` over `rows`.
pub(crate) fn baseline(rows: Rows, spec: &FormatSpec, ctx: &TransformContext) -> Rows {
    let mut rows = substitute_missing(rows, &ctx.missing_value);
    if spec.round_floats {
        rows = round_floats(rows, ctx.float_precision);
    }
    rows = into_text(rows);
    if spec.escape_newlines {
        rows = escape_newlines(rows);
    }
    rows
}

/// Format a float at `precision` fractional digits, trimming trailing
/// fractional zeros: `1234.567` → `1234.57`, `11.1` → `11.1`, `2.0` → `2`.
pub(crate) fn format_float(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').len());
        text.truncate(text.trim_end_matches('.').len());
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(rows: Vec<Vec<Value>>) -> Rows {
        Box::new(rows.into_iter())
    }

    fn collect(rows: Rows) -> Vec<Vec<Value>> {
        rows.collect()
    }

    #[test]
    fn test_substitute_missing() {
        let rows = rows_of(vec![vec![Value::Null, Value::Int(1)]]);
        let out = collect(substitute_missing(rows, "<null>"));
        assert_eq!(
            out,
            vec![vec![Value::Text("<null>".to_string()), Value::Int(1)]]
        );
    }

    #[test]
    fn test_round_floats_leaves_ints_and_decimals() {
        let rows = rows_of(vec![vec![
            Value::Float(1234.567),
            Value::Int(0),
            Value::Decimal("11.1".to_string()),
        ]]);
        let out = collect(round_floats(rows, 2));
        assert_eq!(
            out,
            vec![vec![
                Value::Text("1234.57".to_string()),
                Value::Int(0),
                Value::Decimal("11.1".to_string()),
            ]]
        );
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1234.567, 2), "1234.57");
        assert_eq!(format_float(11.1, 2), "11.1");
        assert_eq!(format_float(1.1, 2), "1.1");
        assert_eq!(format_float(2.0, 2), "2");
        assert_eq!(format_float(-0.001, 2), "0");
        assert_eq!(format_float(0.125, 2), "0.12");
    }

    #[test]
    fn test_into_text() {
        let rows = rows_of(vec![vec![
            Value::Int(7),
            Value::Binary(b"bin".to_vec()),
            Value::Decimal("1.50".to_string()),
        ]]);
        let out = collect(into_text(rows));
        assert_eq!(
            out,
            vec![vec![
                Value::Text("7".to_string()),
                Value::Text("bin".to_string()),
                Value::Text("1.50".to_string()),
            ]]
        );
    }

    #[test]
    fn test_escape_newlines() {
        let rows = rows_of(vec![vec![Value::Text("Pablo\rß\n".to_string())]]);
        let out = collect(escape_newlines(rows));
        assert_eq!(out, vec![vec![Value::Text("Pablo\\rß\\n".to_string())]]);
    }

    #[test]
    fn test_baseline_order_for_ascii() {
        let ctx = TransformContext {
            format: Format::Ascii,
            column_types: vec![ColumnType::Float, ColumnType::Text],
            missing_value: "<null>".to_string(),
            float_precision: 2,
        };
        let rows = rows_of(vec![vec![Value::Float(11.1), Value::Null]]);
        let out = collect(baseline(rows, Format::Ascii.spec(), &ctx));
        assert_eq!(
            out,
            vec![vec![
                Value::Text("11.1".to_string()),
                Value::Text("<null>".to_string()),
            ]]
        );
    }

    #[test]
    fn test_baseline_keeps_full_precision_for_csv() {
        let ctx = TransformContext {
            format: Format::Csv,
            column_types: vec![ColumnType::Float],
            missing_value: String::new(),
            float_precision: 2,
        };
        let rows = rows_of(vec![vec![Value::Float(1234.567), Value::Null]]);
        let out = collect(baseline(rows, Format::Csv.spec(), &ctx));
        assert_eq!(
            out,
            vec![vec![
                Value::Text("1234.567".to_string()),
                Value::Text(String::new()),
            ]]
        );
    }
}
