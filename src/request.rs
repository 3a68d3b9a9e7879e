//! Server-side row model request types
//!
//! The grid sends one request object per interaction (scroll, group
//! expand/collapse, filter or sort change). Every field is optional on the
//! wire; absent fields default so a sparse request never fails to
//! deserialize. Requests are immutable snapshots, the translators hold no
//! state between calls.

use serde::Deserialize;

use crate::filter_model::FilterModel;
use crate::sql_builder::grouping::GroupingState;
use crate::sql_builder::ordering::SortModelItem;
use crate::sql_builder::pagination::RowWindow;

/// One column the data may be grouped by
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowGroupCol {
    pub field: String,
}

impl RowGroupCol {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Snapshot of the grid's server-side row model state for one "get rows" call
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRowsRequest {
    /// First row of the requested window (defaults to 0 when absent)
    pub start_row: Option<i64>,
    /// One past the last row of the requested window (defaults to 100)
    pub end_row: Option<i64>,
    /// Full ordered list of grouping columns, outermost first
    pub row_group_cols: Vec<RowGroupCol>,
    /// Values already drilled into, one per expanded grouping level
    pub group_keys: Vec<String>,
    /// Active per-column filters; tolerates JSON null
    pub filter_model: Option<FilterModel>,
    /// Requested sort order, highest priority first
    pub sort_model: Vec<SortModelItem>,
}

impl GetRowsRequest {
    /// The requested row window
    pub fn row_window(&self) -> RowWindow {
        RowWindow {
            start_row: self.start_row,
            end_row: self.end_row,
        }
    }

    /// The current grouping configuration and expansion path
    pub fn grouping_state(&self) -> GroupingState {
        GroupingState::new(self.row_group_cols.clone(), self.group_keys.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_request_defaults() {
        let request: GetRowsRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(request.start_row, None);
        assert_eq!(request.end_row, None);
        assert!(request.row_group_cols.is_empty());
        assert!(request.group_keys.is_empty());
        assert!(request.filter_model.is_none());
        assert!(request.sort_model.is_empty());
    }

    #[test]
    fn test_null_filter_model_tolerated() {
        let request: GetRowsRequest = serde_json::from_value(json!({
            "startRow": 0,
            "endRow": 50,
            "filterModel": null
        }))
        .unwrap();

        assert!(request.filter_model.is_none());
        assert_eq!(request.row_window().to_sql(), " LIMIT 51 OFFSET 0");
    }

    #[test]
    fn test_full_request_deserialization() {
        let request: GetRowsRequest = serde_json::from_value(json!({
            "startRow": 100,
            "endRow": 200,
            "rowGroupCols": [{ "field": "region" }, { "field": "product" }],
            "groupKeys": ["EU"],
            "sortModel": [{ "colId": "age", "sort": "desc" }]
        }))
        .unwrap();

        assert_eq!(request.row_group_cols.len(), 2);
        assert_eq!(request.group_keys, vec!["EU".to_string()]);
        assert_eq!(
            request.grouping_state().to_sql().unwrap(),
            "GROUP BY product"
        );
        assert_eq!(request.sort_model.len(), 1);
    }
}
