//! HTTP request/response normalization layer for the taskcal ecosystem.
//!
//! This crate turns a declarative [`RequestConfig`] into an actual network
//! call and makes success vs. failure explicit at the type level:
//! - `config` module for the request descriptor (`RequestConfig`, `Body`)
//! - `url` module for URL and query-string construction
//! - `transport` module for the network boundary (`Transport`, `HttpTransport`)
//! - `client` module for the verb entry points and the decode pipeline

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod url;

pub use client::{Api, Payload};
pub use config::{Accepts, Body, Method, QueryValue, RequestConfig};
pub use error::{ApiError, ApiResult, TransportError};
pub use transport::{
    CacheMode, CorsMode, Credentials, HttpTransport, RawResponse, RedirectMode, Transport,
    TransportOptions,
};
pub use crate::url::format_url;
