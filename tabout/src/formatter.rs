//! Formatter facade: classifier → preprocessing chain → renderer.
//!
//! [`format_output`] is the single entry point; [`TableFormatter`] wraps it
//! as a reusable object whose format name is validated on assignment, so an
//! unknown name fails before any data is touched.

use crate::format::{AlignPolicy, Format};
use crate::options::{Alignment, FormatOptions};
use crate::preprocess::{self, Rows, TransformContext};
use crate::render::{self, Lines, TextRows};
use crate::value::{ColumnType, Value};
use crate::TaboutError;

/// Format `rows` under `headers` as `format_name`.
///
/// Rows are any single-pass sequence of equal-length cell vectors; they are
/// consumed once and never require random access. The result is a lazy
/// sequence of text lines without trailing terminators; join with your
/// platform line separator. The format name and configuration are
/// validated before the first row is touched.
///
/// ```
/// use tabout::{format_output, FormatOptions, Value};
///
/// let rows = vec![
///     vec![Value::Int(1), Value::Text("Sam".into())],
///     vec![Value::Int(2), Value::Null],
/// ];
/// let lines = format_output(rows, ["id", "name"], "psql", FormatOptions::new()).unwrap();
/// assert!(lines.into_text().unwrap().contains("<null>"));
/// ```
pub fn format_output<R, H>(
    rows: R,
    headers: H,
    format_name: &str,
    options: FormatOptions,
) -> crate::Result<Lines>
where
    R: IntoIterator<Item = Vec<Value>>,
    R::IntoIter: 'static,
    H: IntoIterator,
    H::Item: Into<String>,
{
    let format = Format::from_name(format_name)?;
    run(Box::new(rows.into_iter()), collect_headers(headers), format, &options)
}

/// Reusable formatter with a validated, swappable format name.
#[derive(Debug)]
pub struct TableFormatter {
    format: Format,
    options: FormatOptions,
}

impl TableFormatter {
    /// Formatter for `format` with default options.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            options: FormatOptions::default(),
        }
    }

    /// Formatter resolved from a format name.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        Ok(Self::new(Format::from_name(name)?))
    }

    /// Builder: replace the options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// The current format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The current format's name.
    pub fn format_name(&self) -> &'static str {
        self.format.as_str()
    }

    /// Switch formats; fails immediately on an unknown name, leaving the
    /// current format unchanged.
    pub fn set_format_name(&mut self, name: &str) -> crate::Result<()> {
        self.format = Format::from_name(name)?;
        Ok(())
    }

    /// Names of every supported format.
    pub fn supported_formats() -> impl Iterator<Item = &'static str> {
        Format::all().iter().map(Format::as_str)
    }

    /// Format `rows` under `headers` with the stored format and options.
    pub fn format_output<R, H>(&self, rows: R, headers: H) -> crate::Result<Lines>
    where
        R: IntoIterator<Item = Vec<Value>>,
        R::IntoIter: 'static,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        run(
            Box::new(rows.into_iter()),
            collect_headers(headers),
            self.format,
            &self.options,
        )
    }
}

fn collect_headers<H>(headers: H) -> Vec<String>
where
    H: IntoIterator,
    H::Item: Into<String>,
{
    headers.into_iter().map(Into::into).collect()
}

fn run(
    rows: Rows,
    headers: Vec<String>,
    format: Format,
    options: &FormatOptions,
) -> crate::Result<Lines> {
    let spec = format.spec();
    let columns = headers.len();

    let (column_types, rows) = match &options.column_types {
        Some(types) => {
            if types.len() != columns {
                return Err(TaboutError::InvalidConfig(format!(
                    "{} column types supplied for {} columns",
                    types.len(),
                    columns
                )));
            }
            (types.clone(), rows)
        }
        None => infer_column_types(rows, columns),
    };

    let alignments = resolve_alignments(
        spec.align,
        &column_types,
        options.alignments.as_deref(),
        columns,
    )?;

    let ctx = TransformContext {
        format,
        column_types,
        missing_value: options
            .missing_value
            .clone()
            .unwrap_or_else(|| spec.default_missing.to_string()),
        float_precision: options.float_precision,
    };

    let mut rows = preprocess::baseline(rows, spec, &ctx);
    let mut headers = headers;
    for transform in &options.transforms {
        let (next_rows, next_headers) = transform.apply(rows, headers, &ctx);
        rows = next_rows;
        headers = next_headers;
    }

    let text_rows: TextRows =
        Box::new(rows.map(|row| row.into_iter().map(|value| value.raw_text()).collect()));

    render::render(
        format,
        headers,
        text_rows,
        alignments,
        options.border_style.clone(),
    )
}

/// Derive column types from the first non-null value observed per column.
///
/// Buffers only as many rows as the decision needs and re-chains them ahead
/// of the untouched remainder, so the stream stays single-pass.
fn infer_column_types(mut rows: Rows, columns: usize) -> (Vec<ColumnType>, Rows) {
    let mut types: Vec<Option<ColumnType>> = vec![None; columns];
    let mut buffered: Vec<Vec<Value>> = Vec::new();

    while types.iter().any(Option::is_none) {
        let Some(row) = rows.next() else { break };
        for (slot, value) in types.iter_mut().zip(&row) {
            if slot.is_none() && !value.is_null() {
                *slot = Some(value.column_type());
            }
        }
        buffered.push(row);
    }

    let types = types
        .into_iter()
        .map(|t| t.unwrap_or(ColumnType::Null))
        .collect();
    (types, Box::new(buffered.into_iter().chain(rows)))
}

/// Resolve per-column alignment from format policy, column types, and any
/// explicit override.
fn resolve_alignments(
    policy: AlignPolicy,
    column_types: &[ColumnType],
    explicit: Option<&[Alignment]>,
    columns: usize,
) -> crate::Result<Vec<Alignment>> {
    if let Some(explicit) = explicit {
        if explicit.len() != columns {
            return Err(TaboutError::InvalidConfig(format!(
                "{} alignments supplied for {} columns",
                explicit.len(),
                columns
            )));
        }
        // markup and delimited formats emit unpadded cells; alignment
        // overrides only apply where the format aligns at all
        if policy != AlignPolicy::Unaligned {
            return Ok(explicit.to_vec());
        }
    }
    Ok(match policy {
        AlignPolicy::PerType => column_types
            .iter()
            .map(|t| {
                if t.is_numeric() {
                    Alignment::Decimal
                } else {
                    Alignment::Left
                }
            })
            .collect(),
        AlignPolicy::ForceLeft | AlignPolicy::Unaligned => vec![Alignment::Left; columns],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(rows: Vec<Vec<Value>>) -> Rows {
        Box::new(rows.into_iter())
    }

    #[test]
    fn test_infer_from_first_non_null() {
        let rows = rows_of(vec![
            vec![Value::Null, Value::Text("abc".into())],
            vec![Value::Float(1.5), Value::Text("def".into())],
        ]);
        let (types, rest) = infer_column_types(rows, 2);
        assert_eq!(types, vec![ColumnType::Float, ColumnType::Text]);
        // buffered rows are re-chained; nothing is lost
        assert_eq!(rest.count(), 2);
    }

    #[test]
    fn test_infer_all_null_column() {
        let rows = rows_of(vec![vec![Value::Null, Value::Int(1)]]);
        let (types, rest) = infer_column_types(rows, 2);
        assert_eq!(types, vec![ColumnType::Null, ColumnType::Int]);
        assert_eq!(rest.count(), 1);
    }

    #[test]
    fn test_infer_stops_once_resolved() {
        let stream = (0..100).map(|i| vec![Value::Int(i)]);
        let (types, rest) = infer_column_types(Box::new(stream), 1);
        assert_eq!(types, vec![ColumnType::Int]);
        // only the sampled row was buffered; the rest stays lazy
        assert_eq!(rest.count(), 100);
    }

    #[test]
    fn test_resolve_alignments_per_type() {
        let alignments = resolve_alignments(
            AlignPolicy::PerType,
            &[ColumnType::Decimal, ColumnType::Text, ColumnType::Null],
            None,
            3,
        )
        .unwrap();
        assert_eq!(
            alignments,
            vec![Alignment::Decimal, Alignment::Left, Alignment::Left]
        );
    }

    #[test]
    fn test_resolve_alignments_explicit_override() {
        let alignments = resolve_alignments(
            AlignPolicy::PerType,
            &[ColumnType::Int],
            Some(&[Alignment::Left]),
            1,
        )
        .unwrap();
        assert_eq!(alignments, vec![Alignment::Left]);
    }

    #[test]
    fn test_resolve_alignments_length_checked() {
        let result = resolve_alignments(
            AlignPolicy::PerType,
            &[ColumnType::Int],
            Some(&[Alignment::Left, Alignment::Right]),
            1,
        );
        assert!(matches!(result, Err(TaboutError::InvalidConfig(_))));
    }

    #[test]
    fn test_markup_ignores_explicit_alignment() {
        let alignments = resolve_alignments(
            AlignPolicy::Unaligned,
            &[ColumnType::Int],
            Some(&[Alignment::Right]),
            1,
        )
        .unwrap();
        assert_eq!(alignments, vec![Alignment::Left]);
    }

    #[test]
    fn test_set_format_name_validates() {
        let mut formatter = TableFormatter::new(Format::Plain);
        assert_eq!(formatter.format_name(), "plain");
        formatter.set_format_name("simple").unwrap();
        assert_eq!(formatter.format_name(), "simple");
        assert!(matches!(
            formatter.set_format_name("foobar"),
            Err(TaboutError::InvalidFormat(_))
        ));
        // failed assignment leaves the previous format in place
        assert_eq!(formatter.format_name(), "simple");
    }

    #[test]
    fn test_column_types_length_checked() {
        let result = format_output(
            vec![vec![Value::Int(1)]],
            ["a"],
            "csv",
            FormatOptions::new().with_column_types(vec![ColumnType::Int, ColumnType::Text]),
        );
        assert!(matches!(result, Err(TaboutError::InvalidConfig(_))));
    }

    #[test]
    fn test_supported_formats_exposed() {
        let names: Vec<&str> = TableFormatter::supported_formats().collect();
        assert_eq!(names.len(), 23);
        assert!(names.contains(&"vertical"));
    }
}
