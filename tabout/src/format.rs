//! Format registry: the closed set of output format names and the static
//! descriptor each resolves to.
//!
//! A descriptor is pure data — border glyph sets, separator policy, row
//! templates, escaping and alignment policy. One generic renderer per
//! family consumes them (see [`crate::render`]), so near-identical formats
//! share an algorithm and differ only in their descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaboutError;

/// A supported output format name.
///
/// The set is fixed and case-sensitive; [`Format::from_name`] rejects
/// anything else before any data is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Ascii,
    Csv,
    #[serde(rename = "csv-tab")]
    CsvTab,
    Double,
    FancyGrid,
    Github,
    Grid,
    Html,
    Jira,
    Latex,
    LatexBooktabs,
    Mediawiki,
    Moinmoin,
    Orgtbl,
    Pipe,
    Plain,
    Psql,
    PsqlUnicode,
    Rst,
    Simple,
    Textile,
    Tsv,
    Vertical,
}

/// Every supported format, in name order.
static ALL_FORMATS: [Format; 23] = [
    Format::Ascii,
    Format::Csv,
    Format::CsvTab,
    Format::Double,
    Format::FancyGrid,
    Format::Github,
    Format::Grid,
    Format::Html,
    Format::Jira,
    Format::Latex,
    Format::LatexBooktabs,
    Format::Mediawiki,
    Format::Moinmoin,
    Format::Orgtbl,
    Format::Pipe,
    Format::Plain,
    Format::Psql,
    Format::PsqlUnicode,
    Format::Rst,
    Format::Simple,
    Format::Textile,
    Format::Tsv,
    Format::Vertical,
];

impl Format {
    /// All supported formats, in name order.
    pub fn all() -> &'static [Format] {
        &ALL_FORMATS
    }

    /// The format's registered name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Ascii => "ascii",
            Format::Csv => "csv",
            Format::CsvTab => "csv-tab",
            Format::Double => "double",
            Format::FancyGrid => "fancy_grid",
            Format::Github => "github",
            Format::Grid => "grid",
            Format::Html => "html",
            Format::Jira => "jira",
            Format::Latex => "latex",
            Format::LatexBooktabs => "latex_booktabs",
            Format::Mediawiki => "mediawiki",
            Format::Moinmoin => "moinmoin",
            Format::Orgtbl => "orgtbl",
            Format::Pipe => "pipe",
            Format::Plain => "plain",
            Format::Psql => "psql",
            Format::PsqlUnicode => "psql_unicode",
            Format::Rst => "rst",
            Format::Simple => "simple",
            Format::Textile => "textile",
            Format::Tsv => "tsv",
            Format::Vertical => "vertical",
        }
    }

    /// Resolve a format name, case-sensitively.
    pub fn from_name(name: &str) -> crate::Result<Format> {
        ALL_FORMATS
            .iter()
            .find(|f| f.as_str() == name)
            .copied()
            .ok_or_else(|| TaboutError::InvalidFormat(name.to_string()))
    }

    /// The static rendering descriptor for this format.
    pub(crate) fn spec(&self) -> &'static FormatSpec {
        match self {
            Format::Ascii => &ASCII,
            Format::Csv => &CSV,
            Format::CsvTab => &CSV_TAB,
            Format::Double => &DOUBLE,
            Format::FancyGrid => &FANCY_GRID,
            Format::Github => &GITHUB,
            Format::Grid => &GRID,
            Format::Html => &HTML,
            Format::Jira => &JIRA,
            Format::Latex => &LATEX,
            Format::LatexBooktabs => &LATEX_BOOKTABS,
            Format::Mediawiki => &MEDIAWIKI,
            Format::Moinmoin => &MOINMOIN,
            Format::Orgtbl => &ORGTBL,
            Format::Pipe => &PIPE,
            Format::Plain => &PLAIN,
            Format::Psql => &PSQL,
            Format::PsqlUnicode => &PSQL_UNICODE,
            Format::Rst => &RST,
            Format::Simple => &SIMPLE,
            Format::Textile => &TEXTILE,
            Format::Tsv => &TSV,
            Format::Vertical => &VERTICAL,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TaboutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s)
    }
}

/// How a format resolves per-column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlignPolicy {
    /// Numeric columns align on the decimal point, everything else left
    PerType,
    /// Every column left-aligned regardless of type
    ForceLeft,
    /// Cells are emitted unpadded; alignment does not apply
    Unaligned,
}

/// One horizontal border line of a grid format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridLine {
    pub begin: &'static str,
    pub fill: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

impl GridLine {
    const fn new(
        begin: &'static str,
        fill: &'static str,
        sep: &'static str,
        end: &'static str,
    ) -> Self {
        Self {
            begin,
            fill,
            sep,
            end,
        }
    }
}

/// Cell delimiters of a grid header/data row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridRow {
    pub begin: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

impl GridRow {
    const fn new(begin: &'static str, sep: &'static str, end: &'static str) -> Self {
        Self { begin, sep, end }
    }
}

/// Layout of a width-aligned grid format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridSpec {
    pub line_above: Option<GridLine>,
    pub line_below_header: Option<GridLine>,
    pub line_between_rows: Option<GridLine>,
    pub line_below: Option<GridLine>,
    /// Header and data rows share delimiters in every supported format
    pub row: GridRow,
    /// Spaces around each cell, inside the delimiters
    pub padding: usize,
    /// Emit a `:---`/`---:` alignment row below the header (pipe)
    pub colon_separator: bool,
    /// Strip trailing spaces from header/data lines (borderless formats)
    pub trim_trailing: bool,
}

/// Cell delimiters of a markup row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowTemplate {
    pub begin: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

impl RowTemplate {
    const fn new(begin: &'static str, sep: &'static str, end: &'static str) -> Self {
        Self { begin, sep, end }
    }
}

/// Layout of a lightweight markup format (no width padding).
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkupSpec {
    /// Fixed lines emitted before the header
    pub preamble: &'static [&'static str],
    /// Line emitted before the header row and before every data row
    pub row_lead: Option<&'static str>,
    pub header: RowTemplate,
    pub data: RowTemplate,
    /// The first data cell carries one extra trailing space (textile)
    pub widen_first_data_cell: bool,
    /// Fixed lines emitted after the last row
    pub postamble: &'static [&'static str],
}

/// Delimiter and quoting policy of a delimiter-separated format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DelimitedSpec {
    pub delimiter: u8,
    /// Quote fields containing the delimiter, the quote char, or a line
    /// terminator, doubling embedded quotes; `false` emits fields verbatim
    pub quoted: bool,
}

/// Render family plus per-family layout data.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Family {
    Grid(&'static GridSpec),
    Delimited(DelimitedSpec),
    Markup(&'static MarkupSpec),
    Latex { booktabs: bool },
    Html,
    Vertical,
}

/// Complete static descriptor of one format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormatSpec {
    pub family: Family,
    /// Escape embedded `\r`/`\n` to visible backslash sequences
    pub escape_newlines: bool,
    /// Round floats to the configured display precision
    pub round_floats: bool,
    /// Missing-value marker used when the caller does not set one
    pub default_missing: &'static str,
    pub align: AlignPolicy,
}

static ASCII_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("+", "-", "+", "+")),
    line_below_header: Some(GridLine::new("+", "-", "+", "+")),
    line_between_rows: None,
    line_below: Some(GridLine::new("+", "-", "+", "+")),
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static DOUBLE_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("╔", "═", "╦", "╗")),
    line_below_header: Some(GridLine::new("╠", "═", "╬", "╣")),
    line_between_rows: None,
    line_below: Some(GridLine::new("╚", "═", "╩", "╝")),
    row: GridRow::new("║", "║", "║"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static FANCY_GRID_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("╒", "═", "╤", "╕")),
    line_below_header: Some(GridLine::new("╞", "═", "╪", "╡")),
    line_between_rows: Some(GridLine::new("├", "─", "┼", "┤")),
    line_below: Some(GridLine::new("╘", "═", "╧", "╛")),
    row: GridRow::new("│", "│", "│"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static GITHUB_GRID: GridSpec = GridSpec {
    line_above: None,
    line_below_header: Some(GridLine::new("|", "-", "|", "|")),
    line_between_rows: None,
    line_below: None,
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static GRID_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("+", "-", "+", "+")),
    line_below_header: Some(GridLine::new("+", "=", "+", "+")),
    line_between_rows: Some(GridLine::new("+", "-", "+", "+")),
    line_below: Some(GridLine::new("+", "-", "+", "+")),
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static ORGTBL_GRID: GridSpec = GridSpec {
    line_above: None,
    line_below_header: Some(GridLine::new("|", "-", "+", "|")),
    line_between_rows: None,
    line_below: None,
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static PIPE_GRID: GridSpec = GridSpec {
    line_above: None,
    line_below_header: None,
    line_between_rows: None,
    line_below: None,
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: true,
    trim_trailing: false,
};

static PLAIN_GRID: GridSpec = GridSpec {
    line_above: None,
    line_below_header: None,
    line_between_rows: None,
    line_below: None,
    row: GridRow::new("", "  ", ""),
    padding: 0,
    colon_separator: false,
    trim_trailing: true,
};

static PSQL_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("+", "-", "+", "+")),
    line_below_header: Some(GridLine::new("|", "-", "+", "|")),
    line_between_rows: None,
    line_below: Some(GridLine::new("+", "-", "+", "+")),
    row: GridRow::new("|", "|", "|"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static PSQL_UNICODE_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("┌", "─", "┬", "┐")),
    line_below_header: Some(GridLine::new("├", "─", "┼", "┤")),
    line_between_rows: None,
    line_below: Some(GridLine::new("└", "─", "┴", "┘")),
    row: GridRow::new("│", "│", "│"),
    padding: 1,
    colon_separator: false,
    trim_trailing: false,
};

static RST_GRID: GridSpec = GridSpec {
    line_above: Some(GridLine::new("", "=", "  ", "")),
    line_below_header: Some(GridLine::new("", "=", "  ", "")),
    line_between_rows: None,
    line_below: Some(GridLine::new("", "=", "  ", "")),
    row: GridRow::new("", "  ", ""),
    padding: 0,
    colon_separator: false,
    trim_trailing: true,
};

static SIMPLE_GRID: GridSpec = GridSpec {
    line_above: None,
    line_below_header: Some(GridLine::new("", "-", "  ", "")),
    line_between_rows: None,
    line_below: None,
    row: GridRow::new("", "  ", ""),
    padding: 0,
    colon_separator: false,
    trim_trailing: true,
};

static JIRA_MARKUP: MarkupSpec = MarkupSpec {
    preamble: &[],
    row_lead: None,
    header: RowTemplate::new("|| ", " || ", " ||"),
    data: RowTemplate::new("| ", " | ", " |"),
    widen_first_data_cell: false,
    postamble: &[],
};

static MEDIAWIKI_MARKUP: MarkupSpec = MarkupSpec {
    preamble: &[
        "{| class=\"wikitable\" style=\"text-align: left;\"",
        "|+ <!-- caption -->",
    ],
    row_lead: Some("|-"),
    header: RowTemplate::new("! ", " !! ", ""),
    data: RowTemplate::new("| ", " || ", ""),
    widen_first_data_cell: false,
    postamble: &["|}"],
};

static MOINMOIN_MARKUP: MarkupSpec = MarkupSpec {
    preamble: &[],
    row_lead: None,
    header: RowTemplate::new("|| ''' ", " ''' || ''' ", " ''' ||"),
    data: RowTemplate::new("||  ", "  ||  ", "  ||"),
    widen_first_data_cell: false,
    postamble: &[],
};

static TEXTILE_MARKUP: MarkupSpec = MarkupSpec {
    preamble: &[],
    row_lead: None,
    header: RowTemplate::new("|_.  ", " |_. ", " |"),
    data: RowTemplate::new("| ", " | ", " |"),
    widen_first_data_cell: true,
    postamble: &[],
};

static ASCII: FormatSpec = FormatSpec {
    family: Family::Grid(&ASCII_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::ForceLeft,
};

static CSV: FormatSpec = FormatSpec {
    family: Family::Delimited(DelimitedSpec {
        delimiter: b',',
        quoted: true,
    }),
    escape_newlines: true,
    round_floats: false,
    default_missing: "",
    align: AlignPolicy::Unaligned,
};

static CSV_TAB: FormatSpec = FormatSpec {
    family: Family::Delimited(DelimitedSpec {
        delimiter: b'\t',
        quoted: true,
    }),
    escape_newlines: true,
    round_floats: false,
    default_missing: "",
    align: AlignPolicy::Unaligned,
};

static TSV: FormatSpec = FormatSpec {
    family: Family::Delimited(DelimitedSpec {
        delimiter: b'\t',
        quoted: false,
    }),
    escape_newlines: true,
    round_floats: false,
    default_missing: "",
    align: AlignPolicy::Unaligned,
};

static DOUBLE: FormatSpec = FormatSpec {
    family: Family::Grid(&DOUBLE_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static FANCY_GRID: FormatSpec = FormatSpec {
    family: Family::Grid(&FANCY_GRID_GRID),
    escape_newlines: false,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static GITHUB: FormatSpec = FormatSpec {
    family: Family::Grid(&GITHUB_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static GRID: FormatSpec = FormatSpec {
    family: Family::Grid(&GRID_GRID),
    escape_newlines: false,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static HTML: FormatSpec = FormatSpec {
    family: Family::Html,
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static JIRA: FormatSpec = FormatSpec {
    family: Family::Markup(&JIRA_MARKUP),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static LATEX: FormatSpec = FormatSpec {
    family: Family::Latex { booktabs: false },
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static LATEX_BOOKTABS: FormatSpec = FormatSpec {
    family: Family::Latex { booktabs: true },
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static MEDIAWIKI: FormatSpec = FormatSpec {
    family: Family::Markup(&MEDIAWIKI_MARKUP),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static MOINMOIN: FormatSpec = FormatSpec {
    family: Family::Markup(&MOINMOIN_MARKUP),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static ORGTBL: FormatSpec = FormatSpec {
    family: Family::Grid(&ORGTBL_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static PIPE: FormatSpec = FormatSpec {
    family: Family::Grid(&PIPE_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static PLAIN: FormatSpec = FormatSpec {
    family: Family::Grid(&PLAIN_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static PSQL: FormatSpec = FormatSpec {
    family: Family::Grid(&PSQL_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static PSQL_UNICODE: FormatSpec = FormatSpec {
    family: Family::Grid(&PSQL_UNICODE_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static RST: FormatSpec = FormatSpec {
    family: Family::Grid(&RST_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static SIMPLE: FormatSpec = FormatSpec {
    family: Family::Grid(&SIMPLE_GRID),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::PerType,
};

static TEXTILE: FormatSpec = FormatSpec {
    family: Family::Markup(&TEXTILE_MARKUP),
    escape_newlines: true,
    round_floats: true,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

static VERTICAL: FormatSpec = FormatSpec {
    family: Family::Vertical,
    escape_newlines: false,
    round_floats: false,
    default_missing: "<null>",
    align: AlignPolicy::Unaligned,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats_count() {
        assert_eq!(Format::all().len(), 23);
    }

    #[test]
    fn test_name_round_trip() {
        for format in Format::all() {
            assert_eq!(Format::from_name(format.as_str()).unwrap(), *format);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(matches!(
            Format::from_name("foobar"),
            Err(TaboutError::InvalidFormat(name)) if name == "foobar"
        ));
        // case-sensitive
        assert!(Format::from_name("CSV").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("csv-tab".parse::<Format>().unwrap(), Format::CsvTab);
        assert_eq!("fancy_grid".parse::<Format>().unwrap(), Format::FancyGrid);
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Format::PsqlUnicode.to_string(), "psql_unicode");
        assert_eq!(Format::LatexBooktabs.to_string(), "latex_booktabs");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Format::CsvTab).unwrap(), "\"csv-tab\"");
        assert_eq!(
            serde_json::from_str::<Format>("\"fancy_grid\"").unwrap(),
            Format::FancyGrid
        );
    }

    #[test]
    fn test_delimited_specs() {
        match Format::Csv.spec().family {
            Family::Delimited(d) => {
                assert_eq!(d.delimiter, b',');
                assert!(d.quoted);
            }
            _ => panic!("csv is delimited"),
        }
        match Format::Tsv.spec().family {
            Family::Delimited(d) => {
                assert_eq!(d.delimiter, b'\t');
                assert!(!d.quoted);
            }
            _ => panic!("tsv is delimited"),
        }
    }

    #[test]
    fn test_family_flags() {
        // grid and fancy_grid keep raw newlines for multi-line rendering
        assert!(!Format::Grid.spec().escape_newlines);
        assert!(!Format::FancyGrid.spec().escape_newlines);
        assert!(Format::Psql.spec().escape_newlines);
        // delimited and vertical formats keep full float precision
        assert!(!Format::Csv.spec().round_floats);
        assert!(!Format::Vertical.spec().round_floats);
        assert!(Format::Ascii.spec().round_floats);
        // delimited formats default to an empty missing marker
        assert_eq!(Format::Csv.spec().default_missing, "");
        assert_eq!(Format::Ascii.spec().default_missing, "<null>");
    }
}
