//! Cell values and structural type classification.
//!
//! A [`Value`] is one cell of input data. The pipeline never asks callers to
//! declare types: [`Value::column_type`] classifies a value from its runtime
//! variant, and the first non-null value observed in a column decides the
//! column's type (see the formatter facade). Classification only drives
//! default alignment and float-rounding eligibility — it never alters data.

use serde::{Deserialize, Serialize};

/// A single cell value supplied by the data source.
///
/// `Decimal` carries the display text of an arbitrary-precision number and
/// is rendered verbatim; it is never reformatted or rounded. Anything a
/// caller cannot express with these variants should be converted to `Text`
/// up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Machine integer
    Int(i64),
    /// Floating-point number; subject to display rounding
    Float(f64),
    /// Arbitrary-precision number, kept as its exact display text
    Decimal(String),
    /// Binary blob; rendered as lossy UTF-8
    Binary(Vec<u8>),
    /// Plain text
    Text(String),
    /// Missing value; rendered as the configured marker
    Null,
}

/// Semantic type of a column, derived from its first non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Int,
    Float,
    Decimal,
    Binary,
    Text,
    /// No non-null value was observed in the column
    Null,
}

impl ColumnType {
    /// Numeric columns default to decimal-point alignment.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float | ColumnType::Decimal)
    }
}

impl Value {
    /// Classify this value. Pure; used for default alignment decisions.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) => ColumnType::Int,
            Value::Float(_) => ColumnType::Float,
            Value::Decimal(_) => ColumnType::Decimal,
            Value::Binary(_) => ColumnType::Binary,
            Value::Text(_) => ColumnType::Text,
            Value::Null => ColumnType::Null,
        }
    }

    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The unformatted display text of this value.
    ///
    /// Floats use the shortest round-trip representation; display rounding
    /// is a separate preprocessing step. Null renders as the empty string
    /// here because marker substitution happens before any rendering.
    pub fn raw_text(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Decimal(s) => s.clone(),
            Value::Binary(b) => String::from_utf8_lossy(b).into_owned(),
            Value::Text(s) => s.clone(),
            Value::Null => String::new(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
