//! Filter model types
//!
//! The grid reports its active per-column filters as one JSON object keyed by
//! column name. Each entry is one of four shapes: a single condition, a
//! combined condition (two or more conditions joined by AND/OR), a set
//! filter, or a multi-filter wrapper holding sub-filters. The shapes are
//! modeled as an explicit union so translation dispatches by exhaustive
//! match instead of structural membership tests.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Comparison types the grid emits for text and number filters.
///
/// Anything outside the supported set deserializes to `Unsupported` and is
/// skipped during translation; unsupported filter types are ignored, not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ConditionType {
    Equals,
    GreaterThanOrEqual,
    LessThan,
    Contains,
    NotContains,
    Unsupported,
}

impl From<String> for ConditionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "equals" => ConditionType::Equals,
            "greaterThanOrEqual" => ConditionType::GreaterThanOrEqual,
            "lessThan" => ConditionType::LessThan,
            "contains" => ConditionType::Contains,
            "notContains" => ConditionType::NotContains,
            _ => ConditionType::Unsupported,
        }
    }
}

/// Logical operator joining the conditions of a combined filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CombineOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl CombineOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CombineOperator::And => "AND",
            CombineOperator::Or => "OR",
        }
    }
}

/// A single comparison against one column
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleCondition {
    /// Grid-reported value kind ("number", "text", ...)
    #[serde(default)]
    pub filter_type: Option<String>,
    #[serde(rename = "type")]
    pub condition: ConditionType,
    #[serde(default)]
    pub filter: Value,
}

/// Two or more conditions on one column joined by AND/OR
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCondition {
    #[serde(default)]
    pub filter_type: Option<String>,
    pub conditions: Vec<SingleCondition>,
    pub operator: CombineOperator,
}

/// Membership filter: selects rows whose column value is in `values`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFilter {
    #[serde(default)]
    pub filter_type: Option<String>,
    /// Allowed values; entries may be JSON null (blank cells)
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Multi-filter wrapper: an ordered list of optional sub-filters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFilter {
    pub filter_models: Vec<Option<MultiEntry>>,
}

/// One sub-filter inside a multi-filter wrapper
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MultiEntry {
    Condition(SingleCondition),
    Set(SetFilter),
    /// Shape not recognized as a condition or set filter; skipped during
    /// translation rather than failing the whole model
    Unrecognized(Value),
}

/// Filter specification for one column
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterEntry {
    Multi(MultiFilter),
    Combined(CombinedCondition),
    Condition(SingleCondition),
    Set(SetFilter),
}

/// All active per-column filters, in the grid's key order.
///
/// Key order is preserved through deserialization: translated predicates must
/// come out in a reproducible order for display, so the usual map types do
/// not fit here.
#[derive(Debug, Clone, Default)]
pub struct FilterModel {
    entries: Vec<(String, FilterEntry)>,
}

impl FilterModel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a filter entry for a column
    pub fn insert(&mut self, column: impl Into<String>, entry: FilterEntry) {
        self.entries.push((column.into(), entry));
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, column: impl Into<String>, entry: FilterEntry) -> Self {
        self.insert(column, entry);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in source key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterEntry)> {
        self.entries
            .iter()
            .map(|(column, entry)| (column.as_str(), entry))
    }
}

impl<'de> Deserialize<'de> for FilterModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FilterModelVisitor;

        impl<'de> Visitor<'de> for FilterModelVisitor {
            type Value = FilterModel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of column names to filter specifications")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((column, entry)) = map.next_entry::<String, FilterEntry>()? {
                    entries.push((column, entry));
                }
                Ok(FilterModel { entries })
            }
        }

        deserializer.deserialize_map(FilterModelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_type_parsing() {
        assert_eq!(ConditionType::from("equals".to_string()), ConditionType::Equals);
        assert_eq!(
            ConditionType::from("greaterThanOrEqual".to_string()),
            ConditionType::GreaterThanOrEqual
        );
        assert_eq!(
            ConditionType::from("startsWith".to_string()),
            ConditionType::Unsupported
        );
    }

    #[test]
    fn test_single_condition_deserialization() {
        let model: FilterModel = serde_json::from_value(json!({
            "age": { "filterType": "number", "type": "greaterThanOrEqual", "filter": 30 }
        }))
        .unwrap();

        assert_eq!(model.len(), 1);
        let (column, entry) = model.iter().next().unwrap();
        assert_eq!(column, "age");
        match entry {
            FilterEntry::Condition(condition) => {
                assert_eq!(condition.condition, ConditionType::GreaterThanOrEqual);
                assert_eq!(condition.filter, json!(30));
            }
            other => panic!("Expected single condition, got {:?}", other),
        }
    }

    #[test]
    fn test_combined_condition_deserialization() {
        let model: FilterModel = serde_json::from_value(json!({
            "amount": {
                "filterType": "number",
                "operator": "OR",
                "conditions": [
                    { "filterType": "number", "type": "lessThan", "filter": 10 },
                    { "filterType": "number", "type": "greaterThanOrEqual", "filter": 100 }
                ]
            }
        }))
        .unwrap();

        let (_, entry) = model.iter().next().unwrap();
        match entry {
            FilterEntry::Combined(combined) => {
                assert_eq!(combined.operator, CombineOperator::Or);
                assert_eq!(combined.conditions.len(), 2);
            }
            other => panic!("Expected combined condition, got {:?}", other),
        }
    }

    #[test]
    fn test_set_filter_deserialization() {
        let model: FilterModel = serde_json::from_value(json!({
            "region": { "filterType": "set", "values": ["EU", "US", null] }
        }))
        .unwrap();

        let (_, entry) = model.iter().next().unwrap();
        match entry {
            FilterEntry::Set(set) => {
                assert_eq!(set.values.len(), 3);
                assert!(set.values[2].is_null());
            }
            other => panic!("Expected set filter, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_filter_deserialization() {
        let model: FilterModel = serde_json::from_value(json!({
            "city": {
                "filterType": "multi",
                "filterModels": [
                    null,
                    { "filterType": "text", "type": "contains", "filter": "berg" },
                    { "filterType": "set", "values": ["Oslo"] }
                ]
            }
        }))
        .unwrap();

        let (_, entry) = model.iter().next().unwrap();
        match entry {
            FilterEntry::Multi(multi) => {
                assert_eq!(multi.filter_models.len(), 3);
                assert!(multi.filter_models[0].is_none());
                assert!(matches!(
                    multi.filter_models[1],
                    Some(MultiEntry::Condition(_))
                ));
                assert!(matches!(multi.filter_models[2], Some(MultiEntry::Set(_))));
            }
            other => panic!("Expected multi filter, got {:?}", other),
        }
    }

    #[test]
    fn test_key_order_preserved() {
        let model: FilterModel = serde_json::from_value(json!({
            "zeta": { "filterType": "number", "type": "equals", "filter": 1 },
            "alpha": { "filterType": "number", "type": "equals", "filter": 2 },
            "mid": { "filterType": "number", "type": "equals", "filter": 3 }
        }))
        .unwrap();

        let columns: Vec<&str> = model.iter().map(|(column, _)| column).collect();
        assert_eq!(columns, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_unknown_condition_type_tolerated() {
        let model: FilterModel = serde_json::from_value(json!({
            "name": { "filterType": "text", "type": "startsWith", "filter": "A" }
        }))
        .unwrap();

        let (_, entry) = model.iter().next().unwrap();
        match entry {
            FilterEntry::Condition(condition) => {
                assert_eq!(condition.condition, ConditionType::Unsupported);
            }
            other => panic!("Expected single condition, got {:?}", other),
        }
    }
}
