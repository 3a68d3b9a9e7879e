//! Convenience re-exports for common gridsql usage

// Request types
pub use crate::request::{GetRowsRequest, RowGroupCol};

// Filter model
pub use crate::filter_model::{FilterEntry, FilterModel};

// Clause builders and assembler
pub use crate::sql_builder::{
    build_order_clause, translate, translate_sql, GroupingState, RowWindow, SelectQuery,
    SortModelItem, SortOrder,
};

// Schema and typed literal rendering
pub use crate::schema::{ColumnType, TableSchema};

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Error type
pub use crate::errors::GridSqlError;

// Common external dependencies that are frequently used
pub use serde::Deserialize;
pub use serde_json::Value;
