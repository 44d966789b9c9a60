//! Request configuration types.
//!
//! A [`RequestConfig`] describes one HTTP call declaratively: either an
//! absolute `url` or `protocol`/`hostname`/`port`/`path` components, plus
//! query parameters, headers, the expected response decoding mode and the
//! transport options forwarded to the network layer. Each config is built,
//! consumed by one call and discarded.

use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;

use crate::error::ApiError;
use crate::transport::{CacheMode, CorsMode, Credentials, RedirectMode};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// Expected response decoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accepts {
    #[default]
    Json,
    Blob,
    Text,
}

/// A query parameter value: a scalar, or a list serialized as repeated keys.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

/// Declarative description of one HTTP call.
///
/// Exactly one of `url` or the hostname/path components determines the final
/// request URL; query parameters are always appended. `headers: None` means
/// "use the base configuration" (see [`base_headers`]); a caller-supplied
/// header map replaces the base set wholly.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub method: Option<Method>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: BTreeMap<String, QueryValue>,
    pub headers: Option<HashMap<String, String>>,
    pub accepts: Option<Accepts>,

    // Transport passthrough, forwarded verbatim to the network layer.
    pub credentials: Option<Credentials>,
    pub cache: Option<CacheMode>,
    pub redirect: Option<RedirectMode>,
    pub referrer: Option<String>,
    pub integrity: Option<String>,
    pub mode: Option<CorsMode>,
}

impl RequestConfig {
    /// Config targeting an absolute URL.
    pub fn for_url(url: impl Into<String>) -> Self {
        RequestConfig {
            url: Some(url.into()),
            ..RequestConfig::default()
        }
    }

    /// Config targeting a path (relative unless `hostname` is also set).
    pub fn for_path(path: impl Into<String>) -> Self {
        RequestConfig {
            path: Some(path.into()),
            ..RequestConfig::default()
        }
    }

    /// Append one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// Base configuration: the default header set merged into every call.
///
/// Returned fresh per call so no shared state exists between requests.
pub fn base_headers() -> HashMap<String, String> {
    HashMap::from([(
        "Content-Type".to_string(),
        "application/json; charset=utf-8".to_string(),
    )])
}

/// Request body. `Raw` text passes through unchanged; everything else is
/// encoded before hitting the wire.
#[derive(Debug, Clone)]
pub enum Body {
    Raw(String),
    Json(serde_json::Value),
    Bytes(Bytes),
}

impl Body {
    /// Structured body, JSON-encoded on the wire.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Body::Json(value))
    }

    pub(crate) fn into_bytes(self) -> Result<Bytes, ApiError> {
        match self {
            Body::Raw(text) => Ok(Bytes::from(text)),
            Body::Json(value) => serde_json::to_vec(&value)
                .map(Bytes::from)
                .map_err(|e| ApiError::Serialization(e.to_string())),
            Body::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text)
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Body::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_body_passes_through_unchanged() {
        let body = Body::from("already a string");
        assert_eq!(body.into_bytes().unwrap(), Bytes::from("already a string"));
    }

    #[test]
    fn test_json_body_is_encoded() {
        let body = Body::json(&serde_json::json!({ "task": "water plants" })).unwrap();
        let bytes = body.into_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["task"], "water plants");
    }

    #[test]
    fn test_base_headers_contain_json_content_type() {
        let headers = base_headers();
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json; charset=utf-8")
        );
    }
}
