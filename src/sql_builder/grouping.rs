//! Grouping clause builder
//!
//! The grid reveals row groups one level at a time: the columns it may group
//! by, plus the path of group values already expanded. The next level to
//! query is always the column immediately after the deepest expanded level,
//! so the clause names a single column per call.

use crate::errors::GridSqlError;
use crate::request::RowGroupCol;

/// Grouping configuration and expansion path for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingState {
    /// Full ordered list of grouping columns, outermost first
    pub row_group_cols: Vec<RowGroupCol>,
    /// Values already drilled into, one per expanded level
    pub group_keys: Vec<String>,
}

impl GroupingState {
    pub fn new(row_group_cols: Vec<RowGroupCol>, group_keys: Vec<String>) -> Self {
        Self {
            row_group_cols,
            group_keys,
        }
    }

    /// Whether any grouping columns are configured
    pub fn is_grouped(&self) -> bool {
        !self.row_group_cols.is_empty()
    }

    /// Whether the user has drilled down to leaf rows
    pub fn is_fully_expanded(&self) -> bool {
        !self.group_keys.is_empty() && self.group_keys.len() == self.row_group_cols.len()
    }

    /// Current drill-down depth
    pub fn depth(&self) -> usize {
        self.group_keys.len()
    }

    /// Build the `GROUP BY` fragment for the next grouping level.
    ///
    /// Returns an empty string when grouping is inactive or fully expanded.
    /// An expansion path deeper than the configured columns is an invalid
    /// grouping state and fails fast instead of indexing past the end.
    pub fn to_sql(&self) -> Result<String, GridSqlError> {
        if self.group_keys.len() > self.row_group_cols.len() {
            return Err(GridSqlError::InvalidGroupingState {
                group_keys: self.group_keys.len(),
                group_cols: self.row_group_cols.len(),
            });
        }

        if !self.is_grouped() || self.is_fully_expanded() {
            return Ok(String::new());
        }

        Ok(format!("GROUP BY {}", self.row_group_cols[self.depth()].field))
    }
}
