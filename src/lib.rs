//! # gridsql
//!
//! Translation of a data grid's server-side row model requests into SQL
//! against a single logical table in an embedded analytical database.
//!
//! Each grid interaction (scroll, group expand, filter or sort change)
//! produces one immutable request snapshot. The clause builders turn that
//! snapshot into `LIMIT/OFFSET`, `GROUP BY`, `WHERE` and `ORDER BY`
//! fragments, and the assembler stitches them into one statement. The filter
//! translator doubles as the source of the human-readable predicate list
//! shown in the grid's status bar.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridsql::prelude::*;
//! use serde_json::json;
//!
//! let request: GetRowsRequest = serde_json::from_value(json!({
//!     "startRow": 0,
//!     "endRow": 50,
//!     "rowGroupCols": [{ "field": "region" }, { "field": "product" }],
//!     "groupKeys": ["EU"],
//!     "filterModel": {
//!         "age": { "filterType": "number", "type": "greaterThanOrEqual", "filter": 30 }
//!     }
//! }))?;
//!
//! let table = ValidatedTableName::new("bankdata")?;
//! let sql = SelectQuery::new(table).build(&request)?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM bankdata WHERE age >= 30 GROUP BY product LIMIT 51 OFFSET 0"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod filter_model;
pub mod prelude;
pub mod request;
pub mod schema;
pub mod sql_builder;
pub mod validation;

// Re-export the main public types for convenience
pub use errors::GridSqlError;
pub use filter_model::{
    CombineOperator, CombinedCondition, ConditionType, FilterEntry, FilterModel, MultiEntry,
    MultiFilter, SetFilter, SingleCondition,
};
pub use request::{GetRowsRequest, RowGroupCol};
pub use schema::{ColumnType, TableSchema};
pub use sql_builder::{
    build_order_clause, translate, translate_sql, GroupingState, RowWindow, SelectQuery,
    SortModelItem, SortOrder,
};
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};
