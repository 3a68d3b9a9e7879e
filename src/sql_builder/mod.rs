//! SQL clause builders
//!
//! One builder per clause of the assembled statement, plus the assembler
//! that stitches them together. Every builder is a pure function of its
//! request snapshot; nothing here touches a connection or caches state.

pub mod assembler;
pub mod filter;
pub mod grouping;
pub mod ordering;
pub mod pagination;


#[cfg(test)]
mod integration_tests;

pub use assembler::SelectQuery;
pub use filter::{translate, translate_sql};
pub use grouping::GroupingState;
pub use ordering::{build_order_clause, SortModelItem, SortOrder};
pub use pagination::RowWindow;
