//! Verb entry points and the request/response pipeline.
//!
//! Each verb merges the caller config over the base configuration, fixes the
//! method and hands off to [`Api::request`], which extracts the allow-listed
//! transport options, issues the call and decodes the body according to the
//! negotiated accepts mode. Every call is a one-shot async operation with
//! exactly two outcomes: a decoded payload, or an [`ApiError`] carrying the
//! decoded error body.

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::config::{Accepts, Body, Method, RequestConfig, base_headers};
use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpTransport, RawResponse, Transport, TransportOptions};
use crate::url::format_url;

/// A response body decoded according to the request's accepts mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Blob(Bytes),
    Text(String),
}

impl Payload {
    /// Convert a JSON payload into a typed value.
    pub fn parse<T: DeserializeOwned>(self) -> ApiResult<T> {
        match self {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Payload::Text(_) => Err(ApiError::Decode("expected a JSON payload, got text".into())),
            Payload::Blob(_) => Err(ApiError::Decode(
                "expected a JSON payload, got binary".into(),
            )),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Json(value) => write!(f, "{value}"),
            Payload::Text(text) => f.write_str(text),
            Payload::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// Client for making API calls over a [`Transport`].
///
/// Stateless apart from the transport handle; requests may be in flight
/// concurrently with no coordination.
#[derive(Debug, Clone)]
pub struct Api<T: Transport = HttpTransport> {
    transport: T,
}

impl Api<HttpTransport> {
    pub fn new() -> Self {
        Api {
            transport: HttpTransport::new(),
        }
    }
}

impl Default for Api<HttpTransport> {
    fn default() -> Self {
        Api::new()
    }
}

impl<T: Transport> Api<T> {
    pub fn with_transport(transport: T) -> Self {
        Api { transport }
    }

    /// Make a GET request.
    pub async fn get(&self, config: RequestConfig) -> ApiResult<Payload> {
        self.request(merge_base(config, Method::Get), None).await
    }

    /// Make a POST request.
    pub async fn post(&self, config: RequestConfig, body: Option<Body>) -> ApiResult<Payload> {
        self.request(merge_base(config, Method::Post), body).await
    }

    /// Make a POST request for a form upload. The JSON content-type default
    /// is removed so the transport can set its own multipart boundary.
    pub async fn post_form(&self, config: RequestConfig, body: Body) -> ApiResult<Payload> {
        let mut config = merge_base(config, Method::Post);
        if let Some(headers) = &mut config.headers {
            headers.retain(|key, _| !key.eq_ignore_ascii_case("content-type"));
        }
        self.request(config, Some(body)).await
    }

    /// Make a PUT request.
    pub async fn put(&self, config: RequestConfig, body: Option<Body>) -> ApiResult<Payload> {
        self.request(merge_base(config, Method::Put), body).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, config: RequestConfig, body: Option<Body>) -> ApiResult<Payload> {
        self.request(merge_base(config, Method::Delete), body).await
    }

    /// The shared pipeline: build the URL, extract transport options, issue
    /// the call and decode the outcome.
    ///
    /// The body is decoded before the status branch, so a non-success status
    /// rejects with the decoded error payload rather than a raw response.
    pub async fn request(&self, config: RequestConfig, body: Option<Body>) -> ApiResult<Payload> {
        let accepts = config.accepts.unwrap_or_default();
        let url = format_url(&config);
        let options = transport_options(&config, body)?;

        let response = self.transport.send(&url, options).await?;
        let payload = decode(accepts, &response);

        if response.ok() {
            payload
        } else {
            Err(ApiError::Status {
                status: response.status,
                payload: payload?,
            })
        }
    }
}

/// Merge the caller config over the base configuration and fix the method.
///
/// The merge is shallow: a caller-supplied header map replaces the base set
/// wholly. The base set is produced fresh per call and never mutated in
/// place, so no state leaks between requests.
fn merge_base(mut config: RequestConfig, method: Method) -> RequestConfig {
    config.method = Some(method);
    if config.headers.is_none() {
        config.headers = Some(base_headers());
    }
    config
}

/// Extract the allow-listed transport options from the config and attach the
/// serialized body. Credentials default to `Include` unless overridden.
fn transport_options(config: &RequestConfig, body: Option<Body>) -> ApiResult<TransportOptions> {
    let body = body.map(Body::into_bytes).transpose()?;

    Ok(TransportOptions {
        method: config.method.unwrap_or(Method::Get),
        headers: config.headers.clone().unwrap_or_default(),
        body,
        credentials: config.credentials.unwrap_or_default(),
        cache: config.cache,
        redirect: config.redirect,
        referrer: config.referrer.clone(),
        integrity: config.integrity.clone(),
        mode: config.mode,
    })
}

/// Decode the response body according to the accepts mode.
///
/// JSON decoding only applies when the response declares an
/// `application/json` content type; anything else falls back to text rather
/// than failing. Text decoding is lossy on invalid UTF-8.
fn decode(accepts: Accepts, response: &RawResponse) -> ApiResult<Payload> {
    let content_type = response.header("Content-Type");

    match accepts {
        Accepts::Json if content_type.is_some_and(|ct| ct.starts_with("application/json")) => {
            let value = serde_json::from_slice(&response.body)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Payload::Json(value))
        }
        Accepts::Blob => Ok(Payload::Blob(response.body.clone())),
        _ => Ok(Payload::Text(
            String::from_utf8_lossy(&response.body).into_owned(),
        )),
    }
}
