//! `filter[field][operator]=value` parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Field → operator name → raw value, before operator validation.
pub type RawFilter = BTreeMap<String, BTreeMap<String, String>>;

/// Operator name recorded for `filter[field]=value`.
pub const IMPLICIT_OPERATOR: &str = "eq";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterOperator {
    ILike,
    Or,
    Eq,
    Ne,
    In,
    Contains,
    Overlap,
    Between,
}

impl FilterOperator {
    /// Application order: only the first operator present on a field is used.
    pub const PRECEDENCE: [FilterOperator; 8] = [
        FilterOperator::ILike,
        FilterOperator::Or,
        FilterOperator::Eq,
        FilterOperator::Ne,
        FilterOperator::In,
        FilterOperator::Contains,
        FilterOperator::Overlap,
        FilterOperator::Between,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::ILike => "iLike",
            FilterOperator::Or => "or",
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::In => "in",
            FilterOperator::Contains => "contains",
            FilterOperator::Overlap => "overlap",
            FilterOperator::Between => "between",
        }
    }

    fn rank(&self) -> usize {
        Self::PRECEDENCE
            .iter()
            .position(|op| op == self)
            .unwrap_or(Self::PRECEDENCE.len())
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ilike" => Ok(FilterOperator::ILike),
            "or" => Ok(FilterOperator::Or),
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "in" => Ok(FilterOperator::In),
            "contains" => Ok(FilterOperator::Contains),
            "overlap" => Ok(FilterOperator::Overlap),
            "between" => Ok(FilterOperator::Between),
            _ => Err(CoreError::Validation(format!(
                "unknown filter operator `{s}`"
            ))),
        }
    }
}

/// The single operator applied to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub operator: FilterOperator,
    pub value: String,
}

impl FieldFilter {
    /// Comma-separated list form used by `or`, `in`, `contains`, `overlap`
    /// and `between`. Blank entries are dropped.
    pub fn values(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// Validated filters keyed by client field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub fields: BTreeMap<String, FieldFilter>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldFilter> {
        self.fields.get(field)
    }

    pub fn with(mut self, field: &str, operator: FilterOperator, value: &str) -> Self {
        self.fields.insert(
            field.to_string(),
            FieldFilter {
                operator,
                value: value.to_string(),
            },
        );
        self
    }
}

impl TryFrom<RawFilter> for FilterSpec {
    type Error = CoreError;

    /// Rejects unknown operators; keeps the highest-precedence operator per field.
    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        let mut fields = BTreeMap::new();

        for (field, operators) in raw {
            let mut selected: Option<FieldFilter> = None;

            for (name, value) in operators {
                let operator = name.parse::<FilterOperator>()?;
                let replace = selected
                    .as_ref()
                    .is_none_or(|current| operator.rank() < current.operator.rank());
                if replace {
                    selected = Some(FieldFilter { operator, value });
                }
            }

            if let Some(filter) = selected {
                fields.insert(field, filter);
            }
        }

        Ok(Self { fields })
    }
}

/// Collects `filter[field]` and `filter[field][operator]` keys out of a flat
/// key/value list. Other keys are ignored; the first occurrence of a
/// field/operator pair wins.
pub fn parse_flat<'a, I>(pairs: I) -> RawFilter
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut raw = RawFilter::new();

    for (key, value) in pairs {
        let Some(filter_key) = key.strip_prefix("filter[") else {
            continue;
        };
        let Some(end_bracket) = filter_key.find(']') else {
            continue;
        };

        let field = &filter_key[..end_bracket];
        let remaining = &filter_key[end_bracket + 1..];

        let operator = if remaining.is_empty() {
            IMPLICIT_OPERATOR
        } else if remaining.starts_with('[') && remaining.ends_with(']') && remaining.len() > 2 {
            &remaining[1..remaining.len() - 1]
        } else {
            continue;
        };

        if field.is_empty() {
            continue;
        }

        raw.entry(field.to_string())
            .or_default()
            .entry(operator.to_string())
            .or_insert_with(|| value.to_string());
    }

    raw
}

/// Pass-through for an already nested `{ field: { operator: value } }` object.
/// A scalar in place of the operator map is read as an implicit `eq`, array
/// values are joined with commas.
pub fn parse_nested(value: &Value) -> RawFilter {
    let mut raw = RawFilter::new();

    let Value::Object(fields) = value else {
        return raw;
    };

    for (field, operators) in fields {
        let entry = raw.entry(field.clone()).or_default();
        match operators {
            Value::Object(operators) => {
                for (operator, value) in operators {
                    if let Some(value) = scalar_to_string(value) {
                        entry.insert(operator.clone(), value);
                    }
                }
            }
            other => {
                if let Some(value) = scalar_to_string(other) {
                    entry.insert(IMPLICIT_OPERATOR.to_string(), value);
                }
            }
        }
    }

    raw.retain(|_, operators| !operators.is_empty());
    raw
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<String>>();
            Some(parts.join(","))
        }
        Value::Null | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_keys_become_nested_map() {
        let raw = parse_flat([
            ("filter[title][iLike]", "proj"),
            ("filter[status]", "todo"),
            ("order", "title"),
        ]);

        assert_eq!(raw.len(), 2);
        assert_eq!(raw["title"]["iLike"], "proj");
        assert_eq!(raw["status"]["eq"], "todo");
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let raw = parse_flat([
            ("filter[title", "x"),
            ("filter[title]garbage", "x"),
            ("filter[][eq]", "x"),
            ("filter[title][]", "x"),
        ]);
        assert!(raw.is_empty());
    }

    #[test]
    fn first_occurrence_wins() {
        let raw = parse_flat([("filter[title][eq]", "a"), ("filter[title][eq]", "b")]);
        assert_eq!(raw["title"]["eq"], "a");
    }

    #[test]
    fn nested_object_passes_through() {
        let raw = parse_nested(&json!({
            "title": { "iLike": "proj" },
            "priority": { "in": ["high", "critical"] },
            "projectId": 3,
            "ignored": null
        }));

        assert_eq!(raw["title"]["iLike"], "proj");
        assert_eq!(raw["priority"]["in"], "high,critical");
        assert_eq!(raw["projectId"]["eq"], "3");
        assert!(!raw.contains_key("ignored"));
    }

    #[test]
    fn operator_names_are_case_insensitive() {
        assert_eq!("iLike".parse::<FilterOperator>(), Ok(FilterOperator::ILike));
        assert_eq!("ilike".parse::<FilterOperator>(), Ok(FilterOperator::ILike));
        assert_eq!("BETWEEN".parse::<FilterOperator>(), Ok(FilterOperator::Between));
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let raw = parse_flat([("filter[title][startsWith]", "a")]);
        let err = FilterSpec::try_from(raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("startsWith")));
    }

    #[test]
    fn highest_precedence_operator_is_kept() {
        let raw = parse_flat([
            ("filter[status][between]", "a,b"),
            ("filter[status][eq]", "todo"),
            ("filter[status][or]", "todo,done"),
        ]);
        let spec = FilterSpec::try_from(raw).unwrap();
        let filter = spec.get("status").unwrap();
        assert_eq!(filter.operator, FilterOperator::Or);
        assert_eq!(filter.values(), vec!["todo", "done"]);
    }

    #[test]
    fn list_values_drop_blanks() {
        let filter = FieldFilter {
            operator: FilterOperator::In,
            value: " a, ,b ,".to_string(),
        };
        assert_eq!(filter.values(), vec!["a", "b"]);
    }
}
