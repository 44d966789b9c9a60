//! URL construction from a request config.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::{QueryValue, RequestConfig};

/// Construct the final request URL.
///
/// An absolute `url` wins and ignores the host components entirely.
/// Otherwise the URL is synthesized as `protocol://hostname[:port]path`,
/// defaulting the protocol to `http`, or stays a bare relative `path` when
/// no hostname is set. A non-empty query map is always appended as exactly
/// one `?` followed by its URL-encoded serialization.
pub fn format_url(config: &RequestConfig) -> String {
    let mut query = serialize_query(&config.query);
    if !query.is_empty() {
        query.insert(0, '?');
    }

    if let Some(url) = &config.url {
        return format!("{url}{query}");
    }

    let path = config.path.as_deref().unwrap_or("");
    match &config.hostname {
        Some(hostname) => {
            let protocol = config.protocol.as_deref().unwrap_or("http");
            let port = config.port.map(|p| format!(":{p}")).unwrap_or_default();
            format!("{protocol}://{hostname}{port}{path}{query}")
        }
        None => format!("{path}{query}"),
    }
}

/// Serialize the query map in sorted key order; list values repeat the key.
fn serialize_query(query: &BTreeMap<String, QueryValue>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in query {
        match value {
            QueryValue::Str(s) => {
                serializer.append_pair(key, s);
            }
            QueryValue::Int(n) => {
                serializer.append_pair(key, &n.to_string());
            }
            QueryValue::Bool(b) => {
                serializer.append_pair(key, if *b { "true" } else { "false" });
            }
            QueryValue::List(items) => {
                for item in items {
                    serializer.append_pair(key, item);
                }
            }
        }
    }

    serializer.finish()
}
