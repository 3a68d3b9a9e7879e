//! Query assembler
//!
//! Stitches the clause builders into one executable `SELECT` statement per
//! request. Issuing the statement (and discarding the pagination probe row)
//! stays with the caller; the assembler only produces text.

use crate::debug_log;
use crate::errors::GridSqlError;
use crate::request::GetRowsRequest;
use crate::schema::TableSchema;
use crate::sql_builder::filter::{translate, translate_sql};
use crate::sql_builder::ordering::build_order_clause;
use crate::validation::ValidatedTableName;

/// Builds one `SELECT` statement from a server-side row model request
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: ValidatedTableName,
    projection: String,
}

impl SelectQuery {
    /// Create an assembler for the given table, selecting `*`
    pub fn new(table: ValidatedTableName) -> Self {
        Self {
            table,
            projection: "*".to_string(),
        }
    }

    /// Override the projected columns
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Assemble the statement with display-form predicates
    pub fn build(&self, request: &GetRowsRequest) -> Result<String, GridSqlError> {
        self.assemble(request, None)
    }

    /// Assemble the statement with typed literals from the table schema
    pub fn build_with_schema(
        &self,
        request: &GetRowsRequest,
        schema: &TableSchema,
    ) -> Result<String, GridSqlError> {
        self.assemble(request, Some(schema))
    }

    fn assemble(
        &self,
        request: &GetRowsRequest,
        schema: Option<&TableSchema>,
    ) -> Result<String, GridSqlError> {
        let predicates = match (&request.filter_model, schema) {
            (Some(model), Some(schema)) => translate_sql(model, schema),
            (Some(model), None) => translate(model),
            (None, _) => Vec::new(),
        };

        let mut sql = format!("SELECT {} FROM {}", self.projection, self.table);

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        let group_clause = request.grouping_state().to_sql()?;
        if !group_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&group_clause);
        }

        let order_clause = build_order_clause(&request.sort_model);
        if !order_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&order_clause);
        }

        // Pagination fragment carries its own leading space
        sql.push_str(&request.row_window().to_sql());

        debug_log!("[SELECT] Table: {}", self.table);
        debug_log!("[SELECT] SQL: {}", sql);
        debug_log!("[SELECT] Predicate count: {}", predicates.len());

        Ok(sql)
    }
}
