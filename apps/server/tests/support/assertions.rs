use anyhow::Context as _;
use axum::http::{header, HeaderMap, StatusCode};
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: expected {expected}, got {actual}");
}

/// Assert a collection envelope and return its items.
pub fn page_items(body: &Value) -> anyhow::Result<&Vec<Value>> {
    assert_eq!(body["previousPageKey"], "", "previousPageKey is always empty");
    assert_eq!(body["nextPageKey"], "", "nextPageKey is always empty");
    body.get("data")
        .and_then(Value::as_array)
        .context("data is an array")
}

/// Ids of the items of a collection envelope, in response order.
pub fn page_ids(body: &Value) -> anyhow::Result<Vec<String>> {
    Ok(page_items(body)?
        .iter()
        .filter_map(|item| item["id"].as_str().map(str::to_string))
        .collect())
}

/// Assert a single-item envelope and return the item.
pub fn single_item(body: &Value) -> anyhow::Result<&Value> {
    let object = body.as_object().context("body is an object")?;
    assert_eq!(object.len(), 1, "single-item envelope only has `data`: {body}");
    object.get("data").context("data present")
}

pub fn assert_plain_text(headers: &HeaderMap) {
    assert_eq!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8"),
        "error bodies are plain text"
    );
}
