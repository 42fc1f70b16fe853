//! Type conversion utilities

/// Request data bound as `data`; a missing object becomes `{}`
pub(super) fn request_data(
    data: Option<serde_json::Map<String, serde_json::Value>>,
) -> serde_json::Value {
    serde_json::Value::Object(data.unwrap_or_default())
}

/// Normalize the requested rule; empty counts as missing
pub(super) fn non_empty_rule(rule: Option<String>) -> Option<String> {
    rule.filter(|r| !r.is_empty())
}
