//! Filter model translator
//!
//! Flattens the grid's filter model into an ordered list of predicate
//! strings, one entry per filtered column (multi-filter wrappers contribute
//! one entry per sub-filter). The same list feeds the status bar display and
//! the assembled WHERE clause, so two renderings exist: [`translate`] keeps
//! values verbatim for display, [`translate_sql`] quotes literals through the
//! table schema.
//!
//! Translation never fails: unsupported condition types, malformed multi
//! entries and empty set filters are dropped rather than surfaced. A query
//! with fewer predicates beats a blocked page.

use serde_json::Value;

use crate::filter_model::{
    CombinedCondition, ConditionType, FilterEntry, FilterModel, MultiEntry, SetFilter,
    SingleCondition,
};
use crate::schema::{quote_text, scalar_text, TableSchema};

/// How literals are rendered into predicates
#[derive(Clone, Copy)]
enum LiteralMode<'a> {
    /// Values verbatim, for display output
    Display,
    /// Values quoted per column type, for executable SQL
    Typed(&'a TableSchema),
}

impl LiteralMode<'_> {
    fn render(&self, column: &str, value: &Value) -> String {
        match self {
            LiteralMode::Display => scalar_text(value),
            LiteralMode::Typed(schema) => schema.render_literal(column, value),
        }
    }

    fn render_like_pattern(&self, value: &Value) -> String {
        let text = scalar_text(value);
        match self {
            LiteralMode::Display => format!("%{}%", text),
            LiteralMode::Typed(_) => quote_text(&format!("%{}%", text)),
        }
    }
}

/// Translate a filter model into display-form predicates, in source key order
pub fn translate(model: &FilterModel) -> Vec<String> {
    collect_predicates(model, LiteralMode::Display)
}

/// Translate a filter model into SQL-form predicates with typed literals
pub fn translate_sql(model: &FilterModel, schema: &TableSchema) -> Vec<String> {
    collect_predicates(model, LiteralMode::Typed(schema))
}

fn collect_predicates(model: &FilterModel, mode: LiteralMode<'_>) -> Vec<String> {
    let mut predicates = Vec::new();

    for (column, entry) in model.iter() {
        match entry {
            FilterEntry::Condition(condition) => {
                predicates.extend(condition_predicate(column, condition, mode));
            }
            FilterEntry::Combined(combined) => {
                predicates.extend(combined_predicate(column, combined, mode));
            }
            FilterEntry::Set(set) => {
                predicates.extend(set_predicate(column, set, mode));
            }
            FilterEntry::Multi(multi) => {
                for sub_filter in multi.filter_models.iter().flatten() {
                    predicates.extend(multi_entry_predicate(column, sub_filter, mode));
                }
            }
        }
    }

    predicates
}

/// Predicate for a single condition; unsupported types yield nothing
fn condition_predicate(
    column: &str,
    condition: &SingleCondition,
    mode: LiteralMode<'_>,
) -> Option<String> {
    let comparison = match condition.condition {
        ConditionType::Equals => "=",
        ConditionType::GreaterThanOrEqual => ">=",
        ConditionType::LessThan => "<",
        ConditionType::Contains => {
            return Some(format!(
                "{} LIKE {}",
                column,
                mode.render_like_pattern(&condition.filter)
            ));
        }
        ConditionType::NotContains => {
            return Some(format!(
                "{} NOT LIKE {}",
                column,
                mode.render_like_pattern(&condition.filter)
            ));
        }
        ConditionType::Unsupported => return None,
    };

    Some(format!(
        "{} {} {}",
        column,
        comparison,
        mode.render(column, &condition.filter)
    ))
}

/// One joined predicate for a combined condition.
///
/// Sub-conditions outside {equals, greaterThanOrEqual, lessThan} fall back to
/// equality, so a combined group always contributes one term per condition.
fn combined_predicate(
    column: &str,
    combined: &CombinedCondition,
    mode: LiteralMode<'_>,
) -> Option<String> {
    if combined.conditions.is_empty() {
        return None;
    }

    let terms: Vec<String> = combined
        .conditions
        .iter()
        .map(|condition| {
            let comparison = match condition.condition {
                ConditionType::Equals => "=",
                ConditionType::GreaterThanOrEqual => ">=",
                ConditionType::LessThan => "<",
                _ => "=",
            };
            format!(
                "{} {} {}",
                column,
                comparison,
                mode.render(column, &condition.filter)
            )
        })
        .collect();

    Some(terms.join(&format!(" {} ", combined.operator.as_sql())))
}

/// Predicate for a set filter; empty value lists yield nothing
fn set_predicate(column: &str, set: &SetFilter, mode: LiteralMode<'_>) -> Option<String> {
    match set.values.as_slice() {
        [] => None,
        [value] => Some(format!("{} = {}", column, mode.render(column, value))),
        values => {
            let rendered: Vec<String> = values
                .iter()
                .map(|value| mode.render(column, value))
                .collect();
            let list = rendered.join(", ");
            match mode {
                LiteralMode::Display => Some(format!("{} IN {}", column, list)),
                LiteralMode::Typed(_) => Some(format!("{} IN ({})", column, list)),
            }
        }
    }
}

/// Predicate for one sub-filter of a multi-filter wrapper.
///
/// Sub-filters must carry their own filterType; entries without one are
/// malformed and skipped, as are shapes that match neither a condition nor a
/// set filter.
fn multi_entry_predicate(
    column: &str,
    entry: &MultiEntry,
    mode: LiteralMode<'_>,
) -> Option<String> {
    match entry {
        MultiEntry::Condition(condition) if condition.filter_type.is_some() => {
            condition_predicate(column, condition, mode)
        }
        MultiEntry::Set(set) if set.filter_type.is_some() => set_predicate(column, set, mode),
        _ => None,
    }
}
