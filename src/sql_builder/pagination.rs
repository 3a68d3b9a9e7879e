//! Pagination clause builder
//!
//! Turns the requested row window into a `LIMIT/OFFSET` fragment. One extra
//! row is always requested: when it comes back, the caller knows more rows
//! exist past the window without running a second `COUNT(*)` query, and
//! discards it.

use serde::Deserialize;

/// Window start used when the grid omits `startRow`
pub const DEFAULT_START_ROW: i64 = 0;
/// Window end used when the grid omits `endRow`
pub const DEFAULT_END_ROW: i64 = 100;

/// The contiguous range of result rows the grid currently wants rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowWindow {
    pub start_row: Option<i64>,
    pub end_row: Option<i64>,
}

impl RowWindow {
    pub fn new() -> Self {
        Self {
            start_row: None,
            end_row: None,
        }
    }

    pub fn with_start_row(mut self, start_row: i64) -> Self {
        self.start_row = Some(start_row);
        self
    }

    pub fn with_end_row(mut self, end_row: i64) -> Self {
        self.end_row = Some(end_row);
        self
    }

    /// Effective window bounds with defaults applied
    pub fn bounds(&self) -> (i64, i64) {
        (
            self.start_row.unwrap_or(DEFAULT_START_ROW),
            self.end_row.unwrap_or(DEFAULT_END_ROW),
        )
    }

    /// Number of rows the window spans
    pub fn page_size(&self) -> i64 {
        let (start_row, end_row) = self.bounds();
        end_row - start_row
    }

    /// Build the `LIMIT/OFFSET` fragment, leading space included.
    ///
    /// The limit is `page_size + 1`; the extra row signals a further page.
    /// Non-negative bounds are the caller's precondition, not checked here.
    pub fn to_sql(&self) -> String {
        let (start_row, _) = self.bounds();
        format!(" LIMIT {} OFFSET {}", self.page_size() + 1, start_row)
    }
}
