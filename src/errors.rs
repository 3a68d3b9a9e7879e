use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum GridSqlError {
    #[error(
        "Invalid grouping state: {group_keys} group keys for {group_cols} grouping columns"
    )]
    InvalidGroupingState { group_keys: usize, group_cols: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
