//! Request-to-statement scenarios

#[cfg(test)]
mod integration_tests {
    use crate::errors::GridSqlError;
    use crate::request::GetRowsRequest;
    use crate::schema::{ColumnType, TableSchema};
    use crate::sql_builder::assembler::SelectQuery;
    use crate::validation::ValidatedTableName;
    use serde_json::json;

    fn request(value: serde_json::Value) -> GetRowsRequest {
        serde_json::from_value(value).expect("request should deserialize")
    }

    fn query() -> SelectQuery {
        SelectQuery::new(ValidatedTableName::new("bankdata").unwrap())
    }

    #[test]
    fn test_plain_scroll_request() {
        let request = request(json!({ "startRow": 0, "endRow": 50 }));
        let sql = query().build(&request).unwrap();
        assert_eq!(sql, "SELECT * FROM bankdata LIMIT 51 OFFSET 0");
    }

    #[test]
    fn test_empty_request_uses_window_defaults() {
        let request = request(json!({}));
        let sql = query().build(&request).unwrap();
        assert_eq!(sql, "SELECT * FROM bankdata LIMIT 101 OFFSET 0");
    }

    #[test]
    fn test_grouped_request_queries_next_level() {
        let request = request(json!({
            "startRow": 0,
            "endRow": 100,
            "rowGroupCols": [{ "field": "region" }, { "field": "product" }],
            "groupKeys": ["EU"]
        }));
        let sql = query().build(&request).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM bankdata GROUP BY product LIMIT 101 OFFSET 0"
        );
    }

    #[test]
    fn test_fully_expanded_group_requests_leaf_rows() {
        let request = request(json!({
            "rowGroupCols": [{ "field": "region" }],
            "groupKeys": ["EU"]
        }));
        let sql = query().build(&request).unwrap();
        assert_eq!(sql, "SELECT * FROM bankdata LIMIT 101 OFFSET 0");
    }

    #[test]
    fn test_filtered_sorted_grouped_request() {
        let request = request(json!({
            "startRow": 0,
            "endRow": 50,
            "rowGroupCols": [{ "field": "region" }],
            "groupKeys": [],
            "filterModel": {
                "age": { "filterType": "number", "type": "greaterThanOrEqual", "filter": 30 }
            },
            "sortModel": [{ "colId": "age", "sort": "desc" }]
        }));
        let sql = query().build(&request).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM bankdata WHERE age >= 30 GROUP BY region ORDER BY age DESC LIMIT 51 OFFSET 0"
        );
    }

    #[test]
    fn test_multiple_filter_columns_joined_with_and() {
        let request = request(json!({
            "filterModel": {
                "age": { "filterType": "number", "type": "lessThan", "filter": 40 },
                "region": { "filterType": "set", "values": ["EU", "US"] }
            }
        }));
        let sql = query().build(&request).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM bankdata WHERE age < 40 AND region IN EU, US LIMIT 101 OFFSET 0"
        );
    }

    #[test]
    fn test_schema_backed_statement_is_quoted() {
        let schema = TableSchema::new()
            .with_column("age", ColumnType::Numeric)
            .with_column("region", ColumnType::Text);

        let request = request(json!({
            "filterModel": {
                "age": { "filterType": "number", "type": "lessThan", "filter": 40 },
                "region": { "filterType": "set", "values": ["EU", "US"] }
            }
        }));
        let sql = query().build_with_schema(&request, &schema).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM bankdata WHERE age < 40 AND region IN ('EU', 'US') LIMIT 101 OFFSET 0"
        );
    }

    #[test]
    fn test_projection_override() {
        let request = request(json!({
            "rowGroupCols": [{ "field": "region" }],
            "groupKeys": []
        }));
        let sql = query()
            .with_projection("region, count(*) AS child_count")
            .build(&request)
            .unwrap();
        assert_eq!(
            sql,
            "SELECT region, count(*) AS child_count FROM bankdata GROUP BY region LIMIT 101 OFFSET 0"
        );
    }

    #[test]
    fn test_invalid_grouping_state_propagates() {
        let request = request(json!({
            "rowGroupCols": [{ "field": "region" }],
            "groupKeys": ["EU", "stray"]
        }));
        let result = query().build(&request);
        assert!(matches!(
            result,
            Err(GridSqlError::InvalidGroupingState { .. })
        ));
    }

    #[test]
    fn test_concurrent_requests_are_independent() {
        // Builders hold no shared state; interleaved snapshots translate
        // identically no matter the call order.
        let first = request(json!({ "startRow": 0, "endRow": 50 }));
        let second = request(json!({
            "startRow": 50,
            "endRow": 100,
            "filterModel": {
                "age": { "filterType": "number", "type": "equals", "filter": 30 }
            }
        }));

        let query = query();
        let sql_second = query.build(&second).unwrap();
        let sql_first = query.build(&first).unwrap();

        assert_eq!(sql_first, "SELECT * FROM bankdata LIMIT 51 OFFSET 0");
        assert_eq!(
            sql_second,
            "SELECT * FROM bankdata WHERE age = 30 LIMIT 51 OFFSET 50"
        );
        assert_eq!(query.build(&first).unwrap(), sql_first);
    }
}
