//! Delimiter-separated rendering (csv, csv-tab, tsv).
//!
//! Streams one output line per input row with no width padding. Quoting is
//! delegated to the `csv` writer: a field is quoted only when it contains
//! the delimiter, a quote character, or a line terminator, with embedded
//! quotes doubled. The tsv variant never quotes.

use csv::{QuoteStyle, WriterBuilder};

use crate::format::DelimitedSpec;

use super::{CheckedRows, Lines, TextRows};

pub(crate) fn render(
    spec: DelimitedSpec,
    headers: Vec<String>,
    rows: TextRows,
) -> crate::Result<Lines> {
    let expected = headers.len();
    let header_line = write_record(&headers, &spec)?;

    let body = CheckedRows::new(rows, expected)
        .map(move |row| row.and_then(|row| write_record(&row, &spec)));

    Ok(Lines::new(std::iter::once(Ok(header_line)).chain(body)))
}

/// Render one record to a single line using the csv writer.
fn write_record(fields: &[String], spec: &DelimitedSpec) -> crate::Result<String> {
    let quote_style = if spec.quoted {
        QuoteStyle::Necessary
    } else {
        QuoteStyle::Never
    };
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .delimiter(spec.delimiter)
            .quote_style(quote_style)
            .from_writer(&mut buffer);
        writer.write_record(fields)?;
        writer.flush()?;
    }
    let mut line = String::from_utf8_lossy(&buffer).into_owned();
    line.truncate(line.trim_end_matches(['\r', '\n']).len());
    Ok(line)
}
