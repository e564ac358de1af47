//! # Filters
//!
//! Filters narrow down the data a command operates on. The host parses them
//! out of the raw input and hands the active set to the handler, which
//! applies them to whatever collection it is about to respond with.

use serde_json::Value;

/// A predicate over candidate result values.
pub trait Filter: Send + Sync {
    /// A short name identifying what this filter constrains, e.g. `"age"`.
    fn name(&self) -> &str;

    /// Whether the candidate passes the filter.
    fn accepts(&self, candidate: &Value) -> bool;
}

/// Retains only the values accepted by every filter in the set.
pub fn apply_filters(values: &mut Vec<Value>, filters: &[Box<dyn Filter>]) {
    values.retain(|v| filters.iter().all(|f| f.accepts(v)));
}

/// A numeric bounds filter keyed on a field of a JSON object candidate.
/// Candidates missing the field (or holding a non-numeric value) are
/// rejected.
#[derive(Debug, Clone)]
pub struct RangeFilter {
    field: String,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeFilter {
    pub fn at_least(field: &str, min: f64) -> RangeFilter {
        RangeFilter {
            field: field.to_string(),
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(field: &str, max: f64) -> RangeFilter {
        RangeFilter {
            field: field.to_string(),
            min: None,
            max: Some(max),
        }
    }

    pub fn between(field: &str, min: f64, max: f64) -> RangeFilter {
        RangeFilter {
            field: field.to_string(),
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Filter for RangeFilter {
    fn name(&self) -> &str {
        &self.field
    }

    fn accepts(&self, candidate: &Value) -> bool {
        let Some(number) = candidate.get(&self.field).and_then(Value::as_f64) else {
            return false;
        };
        self.min.is_none_or(|min| number >= min) && self.max.is_none_or(|max| number <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_filter_bounds() {
        let filter = RangeFilter::between("age", 10.0, 20.0);
        assert!(filter.accepts(&json!({"age": 15})));
        assert!(filter.accepts(&json!({"age": 10})));
        assert!(!filter.accepts(&json!({"age": 21})));
        assert!(!filter.accepts(&json!({"age": "old"})));
        assert!(!filter.accepts(&json!({"size": 15})));
    }

    #[test]
    fn test_apply_filters_intersects() {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(RangeFilter::at_least("age", 10.0)),
            Box::new(RangeFilter::at_most("size", 100.0)),
        ];
        let mut values = vec![
            json!({"age": 15, "size": 50}),
            json!({"age": 5, "size": 50}),
            json!({"age": 15, "size": 500}),
        ];
        apply_filters(&mut values, &filters);
        assert_eq!(values, vec![json!({"age": 15, "size": 50})]);
    }

    #[test]
    fn test_empty_filter_set_keeps_everything() {
        let mut values = vec![json!({"age": 1}), json!({"age": 2})];
        apply_filters(&mut values, &[]);
        assert_eq!(values.len(), 2);
    }
}
