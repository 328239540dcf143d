//! Response normalizer: raw `HttpResponse` in, decoded JSON payload out.
//!
//! The status code is carried along but never inspected here. An error
//! response from the service decodes like any other JSON body.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http::{find_header, HttpResponse};

/// Parsed payload plus the raw body and headers it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    headers: Vec<(String, String)>,
    raw: String,
    payload: Value,
}

impl ApiResponse {
    /// Decode the body as JSON. A blank body decodes to `Value::Null`.
    pub fn from_http(response: HttpResponse) -> Result<Self> {
        let payload = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(ApiError::DeserializationError)?
        };
        Ok(Self {
            status: response.status,
            headers: response.headers,
            raw: response.body,
            payload,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// The undecoded body text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup, e.g. `header("X-Pages")`.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("X-Pages".to_string(), "4".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn decodes_object_payload() {
        let parsed = ApiResponse::from_http(response(200, r#"{"STATUS":"OK"}"#)).unwrap();
        assert_eq!(parsed.payload(), &json!({"STATUS": "OK"}));
        assert_eq!(parsed.raw(), r#"{"STATUS":"OK"}"#);
        assert_eq!(parsed.header("x-pages"), Some("4"));
    }

    #[test]
    fn decodes_scalar_and_array_payloads() {
        let parsed = ApiResponse::from_http(response(200, "[1,2]")).unwrap();
        assert_eq!(parsed.into_payload(), json!([1, 2]));
        let parsed = ApiResponse::from_http(response(200, "true")).unwrap();
        assert_eq!(parsed.into_payload(), json!(true));
    }

    #[test]
    fn error_status_passes_through() {
        let parsed =
            ApiResponse::from_http(response(404, r#"{"STATUS":"Error","MESSAGE":"Not found"}"#))
                .unwrap();
        assert_eq!(parsed.status(), 404);
        assert_eq!(parsed.payload()["MESSAGE"], "Not found");
    }

    #[test]
    fn blank_body_is_null() {
        let parsed = ApiResponse::from_http(response(200, "  ")).unwrap();
        assert!(parsed.payload().is_null());
    }

    #[test]
    fn non_json_body_is_a_deserialization_error() {
        let err = ApiResponse::from_http(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
