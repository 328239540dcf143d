//! Request builder: endpoint + verb + args in, `HttpRequest` out.
//!
//! # Design
//! `RequestBuilder` holds only the `Credentials` and carries no mutable
//! state between calls. Building performs no I/O; the resulting value is
//! handed to a `Transport` explicitly.
//!
//! URL rules:
//! - an absolute endpoint (scheme + host) gets `.json` appended and the
//!   configured base URL is ignored;
//! - otherwise `base/` + endpoint + `.json`, followed by `?query` when
//!   query args are present.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use url::form_urlencoded;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest};

/// Argument mapping shared by query strings, request bodies and validation.
pub type Args = serde_json::Map<String, Value>;

/// Only data format the service is spoken to in.
pub const DATA_FORMAT: &str = "json";

/// The service ignores the password half of the Basic credentials, but it
/// must be present and non-empty.
const PASSWORD_PLACEHOLDER: &str = "xxxx";

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    credentials: Credentials,
    base_url: String,
}

impl RequestBuilder {
    pub fn new(credentials: Credentials) -> Self {
        let base_url = format!("{}/", credentials.base_url().trim_end_matches('/'));
        Self {
            credentials,
            base_url,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn build_request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
        query: Option<&Args>,
    ) -> Result<HttpRequest> {
        let body = match body {
            Some(value) if method != HttpMethod::Get && is_structured(value) => {
                Some(serde_json::to_string(value).map_err(ApiError::SerializationError)?)
            }
            _ => None,
        };

        let mut headers = vec![("Authorization".to_string(), self.authorization())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        let request = HttpRequest {
            method,
            url: self.build_url(endpoint, query),
            headers,
            body,
        };
        tracing::debug!(method = %request.method, url = %request.url, "built request");
        Ok(request)
    }

    pub fn build_url(&self, endpoint: &str, query: Option<&Args>) -> String {
        if is_absolute_url(endpoint) {
            return format!("{endpoint}.{DATA_FORMAT}");
        }

        let mut url = format!("{}{endpoint}.{DATA_FORMAT}", self.base_url);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&build_query(query));
        }
        url
    }

    /// `Basic base64(api_key:xxxx)`.
    pub fn authorization(&self) -> String {
        let pair = format!("{}:{PASSWORD_PLACEHOLDER}", self.credentials.api_key());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

/// Encode args as `application/x-www-form-urlencoded`. Null values are skipped,
/// arrays are comma-joined and booleans are sent as `true`/`false`, not
/// `1`/`0`.
pub fn build_query(query: &Args) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        if let Some(rendered) = render_query_value(value) {
            serializer.append_pair(key, &rendered);
        }
    }
    serializer.finish()
}

fn render_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

fn is_structured(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn is_absolute_url(endpoint: &str) -> bool {
    Url::parse(endpoint).map(|url| url.has_host()).unwrap_or(false)
}
