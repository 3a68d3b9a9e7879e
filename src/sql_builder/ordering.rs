//! ORDER BY clause builder

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One entry of the grid's sort model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortModelItem {
    pub col_id: String,
    pub sort: SortOrder,
}

impl SortModelItem {
    pub fn asc(col_id: impl Into<String>) -> Self {
        Self {
            col_id: col_id.into(),
            sort: SortOrder::Asc,
        }
    }

    pub fn desc(col_id: impl Into<String>) -> Self {
        Self {
            col_id: col_id.into(),
            sort: SortOrder::Desc,
        }
    }
}

/// Build the `ORDER BY` clause from the sort model, highest priority first
pub fn build_order_clause(sort_model: &[SortModelItem]) -> String {
    if sort_model.is_empty() {
        return String::new();
    }

    let order_items: Vec<String> = sort_model
        .iter()
        .map(|item| format!("{} {}", item.col_id, item.sort.to_sql()))
        .collect();

    format!("ORDER BY {}", order_items.join(", "))
}
