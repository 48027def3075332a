//! JSON response envelopes
//!
//! Every successful body is wrapped: single items as `{"data": ...}`,
//! collections additionally carry the (always empty) page keys.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: Option<T>,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data: Some(data) }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }
}

impl<T> From<Option<T>> for DataResponse<T> {
    fn from(data: Option<T>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub previous_page_key: String,
    pub next_page_key: String,
}

impl<T> PageResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            previous_page_key: String::new(),
            next_page_key: String::new(),
        }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<T: Serialize> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_item_envelope() {
        let body = serde_json::to_value(DataResponse::new(json!({"id": "2024_5"}))).unwrap();
        assert_eq!(body, json!({"data": {"id": "2024_5"}}));

        let body = serde_json::to_value(DataResponse::<String>::empty()).unwrap();
        assert_eq!(body, json!({"data": null}));
    }

    #[test]
    fn test_page_envelope_has_empty_keys() {
        let body = serde_json::to_value(PageResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(
            body,
            json!({"data": [1, 2, 3], "previousPageKey": "", "nextPageKey": ""})
        );

        let body = serde_json::to_value(PageResponse::<i32>::new(Vec::new())).unwrap();
        assert_eq!(body["data"], json!([]));
    }
}
