//! The network boundary.
//!
//! [`Transport`] is the single external collaborator of the request layer:
//! it takes a URL plus the allow-listed [`TransportOptions`] and returns a
//! plain-data [`RawResponse`]. The production implementation is
//! [`HttpTransport`] over reqwest; tests substitute their own transport so
//! the pipeline runs without a network stack.

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;

use crate::config::Method;
use crate::error::TransportError;

/// Credential handling forwarded to the transport. Defaults to `Include`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
    #[default]
    Include,
    Omit,
    SameOrigin,
}

/// Cache policy hint for transports that maintain an HTTP cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

/// Redirect policy hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    Follow,
    Error,
    Manual,
}

/// Cross-origin mode hint for browser-style transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsMode {
    Cors,
    NoCors,
    SameOrigin,
}

/// The allow-listed subset of a request config forwarded verbatim to the
/// transport, with the serialized body attached.
///
/// `method`, `headers` and `body` are interpreted by every transport.
/// The remaining fields are policy hints: [`HttpTransport`] maps `referrer`
/// to the `Referer` header and carries the rest as data for transports that
/// can honor them.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
    pub credentials: Credentials,
    pub cache: Option<CacheMode>,
    pub redirect: Option<RedirectMode>,
    pub referrer: Option<String>,
    pub integrity: Option<String>,
    pub mode: Option<CorsMode>,
}

/// An HTTP response as plain data: status, headers and the raw body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl RawResponse {
    /// Whether the status is in the success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A fetch-style network primitive: one URL and options in, one raw
/// response (or transport-level error) out. No retries, no recovery.
pub trait Transport {
    fn send(
        &self,
        url: &str,
        options: TransportOptions,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Production transport over a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        options: TransportOptions,
    ) -> Result<RawResponse, TransportError> {
        let method = match options.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        };

        let mut request = self.client.request(method, url);

        for (key, value) in &options.headers {
            request = request.header(key, value);
        }

        if let Some(referrer) = &options.referrer {
            request = request.header(reqwest::header::REFERER, referrer);
        }

        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
