use tasktrack_core::domain::common::{
    entities::app_errors::CoreError,
    query::{
        ListQuery, Pagination,
        filter::{FilterSpec, RawFilter, parse_flat, parse_nested},
    },
};

/// Builds a [`ListQuery`] out of decoded query-string pairs.
///
/// Handles:
/// - `filter[field]=value` (implicit `eq`) and `filter[field][operator]=value`
/// - `filter={"field":{"operator":"value"}}` (already nested JSON)
/// - `search`, `order`, `all`, `deleted`, `offset`, `limit`
///
/// For repeated scalar keys the first occurrence wins.
pub fn list_query_from_pairs(pairs: &[(String, String)]) -> Result<ListQuery, CoreError> {
    let mut raw = parse_flat(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    if let Some(nested) = first(pairs, "filter")
        .and_then(|value| serde_json::from_str::<serde_json::Value>(value).ok())
    {
        merge(&mut raw, parse_nested(&nested));
    }

    let offset = first(pairs, "offset").and_then(|v| v.trim().parse::<i64>().ok());
    let limit = first(pairs, "limit").and_then(|v| v.trim().parse::<i64>().ok());

    Ok(ListQuery {
        filter: FilterSpec::try_from(raw)?,
        search: first(pairs, "search").map(str::to_string),
        order: first(pairs, "order").map(str::to_string),
        all: first(pairs, "all").is_some_and(is_truthy),
        deleted: first(pairs, "deleted").is_some_and(is_truthy),
        pagination: Pagination::new(offset, limit),
    })
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Flat keys win over the nested object for the same field/operator.
fn merge(into: &mut RawFilter, other: RawFilter) {
    for (field, operators) in other {
        let entry = into.entry(field).or_default();
        for (operator, value) in operators {
            entry.entry(operator).or_insert(value);
        }
    }
}
