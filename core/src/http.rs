//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe requests and responses as plain data. The resource
//! modules build `HttpRequest` values and never touch the network; the host
//! executes them through its own `Transport` and hands the `HttpResponse`
//! back untouched.
//!
//! Query parameters are kept as an ordered list separate from `url` so
//! callers and tests can inspect the parameter channel directly. Use
//! `full_url()` to get the string that actually goes on the wire.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::multipart::MultipartForm;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(String),
    /// `multipart/form-data` parts; the boundary lives on the form.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Encoded bytes as they go on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RequestBody::Json(json) => json.as_bytes().to_vec(),
            RequestBody::Multipart(form) => form.to_bytes(),
        }
    }

    pub fn as_json(&self) -> Option<&str> {
        match self {
            RequestBody::Json(json) => Some(json),
            RequestBody::Multipart(_) => None,
        }
    }
}

/// An HTTP request described as plain data (the request descriptor).
///
/// Built fresh by every `build_*` call and never mutated by the core after
/// it is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Base URL plus resource path, without a query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub(crate) fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `url` with the query list rendered as `application/x-www-form-urlencoded`.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{encoded}", self.url)
    }

    /// First query value stored under `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First header value stored under `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub(crate) fn with_query_pair(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Flatten a serializable filter struct into query pairs.
    ///
    /// Top-level `null` fields are dropped, strings are sent verbatim and
    /// every other scalar uses its JSON rendering.
    pub(crate) fn with_query<T: Serialize>(mut self, params: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(params).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        match value {
            serde_json::Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        serde_json::Value::Null => {}
                        serde_json::Value::String(s) => self.query.push((key, s)),
                        other => self.query.push((key, other.to_string())),
                    }
                }
                Ok(self)
            }
            serde_json::Value::Null => Ok(self),
            other => Err(ApiError::SerializationError(format!(
                "query parameters must serialize to an object, got {other}"
            ))),
        }
    }

    pub(crate) fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json =
            serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(RequestBody::Json(json));
        Ok(self)
    }

    pub(crate) fn with_multipart(mut self, form: MultipartForm) -> Self {
        self.headers
            .push(("content-type".to_string(), form.content_type()));
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest` and returned to
/// the caller as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize a 2xx body; any other status becomes `ApiError::HttpError`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::HttpError {
                status: self.status,
                body: self.body.clone(),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        page: u32,
        page_size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        user_id: Option<String>,
        status: Option<i32>,
    }

    fn get(url: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, url.to_string())
    }

    #[test]
    fn full_url_without_query_is_url() {
        let req = get("http://localhost:3000/announcement");
        assert_eq!(req.full_url(), "http://localhost:3000/announcement");
    }

    #[test]
    fn full_url_escapes_query_values() {
        let req = get("http://h/bill/order_detail").with_query_pair("purchaseTime", "2024-01-01 10:00");
        assert_eq!(
            req.full_url(),
            "http://h/bill/order_detail?purchaseTime=2024-01-01+10%3A00"
        );
    }

    #[test]
    fn with_query_flattens_struct_in_field_order() {
        let filter = Filter {
            page: 1,
            page_size: 20,
            user_id: Some("u-1".to_string()),
            status: None,
        };
        let req = get("http://h/customer/user").with_query(&filter).unwrap();
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "20".to_string()),
                ("userId".to_string(), "u-1".to_string()),
            ]
        );
    }

    #[test]
    fn with_query_rejects_non_object() {
        let err = get("http://h/x").with_query(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, ApiError::SerializationError(_)));
    }

    #[test]
    fn with_json_sets_content_type_and_body() {
        let req = HttpRequest::new(HttpMethod::Post, "http://h/phone".to_string())
            .with_json(&serde_json::json!({"phone": "13800000000"}))
            .unwrap();
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap();
        assert_eq!(body["phone"], "13800000000");
    }

    #[test]
    fn response_json_rejects_non_success() {
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: "unauthorized".to_string(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 401, .. }));
    }

    #[test]
    fn response_json_bad_body() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
