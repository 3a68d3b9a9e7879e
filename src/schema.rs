//! Column type lookup for typed SQL literal rendering
//!
//! The filter translator interpolates values coming straight from the grid's
//! filter model. For display output the values stay untouched, but anything
//! spliced into an executable statement must be quoted according to the
//! column's type. [`TableSchema`] carries that column-to-type lookup and
//! [`ColumnType`] renders individual literals.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

/// SQL type classification of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Integer and floating point columns; literals stay unquoted
    Numeric,
    /// Character columns; literals are single-quoted with `''` doubling
    Text,
    /// Boolean columns; literals render as `TRUE` / `FALSE`
    Boolean,
    /// Date columns; literals render as `DATE '...'` when they parse
    Date,
    /// Timestamp columns; literals render as `TIMESTAMP '...'` when they parse
    Timestamp,
}

impl ColumnType {
    /// Render a filter value as a SQL literal for a column of this type.
    ///
    /// Values that do not fit the declared type fall back to a quoted text
    /// literal rather than failing, matching the translator's policy of
    /// degrading instead of blocking the page.
    pub fn render_literal(&self, value: &Value) -> String {
        if value.is_null() {
            return "NULL".to_string();
        }

        match self {
            ColumnType::Numeric => match value {
                Value::Number(n) => n.to_string(),
                Value::String(s) if s.parse::<f64>().is_ok() => s.clone(),
                other => quote_text(&scalar_text(other)),
            },
            ColumnType::Text => quote_text(&scalar_text(value)),
            ColumnType::Boolean => match value {
                Value::Bool(true) => "TRUE".to_string(),
                Value::Bool(false) => "FALSE".to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("true") => "TRUE".to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("false") => "FALSE".to_string(),
                other => quote_text(&scalar_text(other)),
            },
            ColumnType::Date => match value {
                Value::String(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => {
                    format!("DATE '{}'", s)
                }
                other => quote_text(&scalar_text(other)),
            },
            ColumnType::Timestamp => match value {
                Value::String(s)
                    if NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok() =>
                {
                    format!("TIMESTAMP '{}'", s)
                }
                Value::String(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => {
                    format!("TIMESTAMP '{}'", s)
                }
                other => quote_text(&scalar_text(other)),
            },
        }
    }
}

/// Column-to-type lookup for a single logical table
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    columns: HashMap<String, ColumnType>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Register a column type
    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.columns.insert(name.into(), column_type);
        self
    }

    /// Look up the declared type of a column
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.get(name).copied()
    }

    /// Render a filter value as a SQL literal for the named column.
    ///
    /// Columns absent from the schema use a conservative rule: strings are
    /// quoted, numbers and booleans stay raw, null renders as `NULL`.
    pub fn render_literal(&self, column: &str, value: &Value) -> String {
        match self.column_type(column) {
            Some(column_type) => column_type.render_literal(value),
            None => match value {
                Value::Null => "NULL".to_string(),
                Value::Number(n) => n.to_string(),
                Value::Bool(true) => "TRUE".to_string(),
                Value::Bool(false) => "FALSE".to_string(),
                other => quote_text(&scalar_text(other)),
            },
        }
    }
}

/// Single-quote a text literal, doubling embedded quotes
pub(crate) fn quote_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Plain-text form of a scalar value (strings unwrapped, not JSON-encoded)
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
