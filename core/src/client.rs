//! Client for the Teamwork API: request builder plus transport.
//!
//! # Design
//! `TeamworkClient` holds its `RequestBuilder` and a `Transport` and nothing
//! else. The verb methods (`get`, `post`, `put`, `delete`) build an
//! `HttpRequest` and return it wrapped in a `Call`; nothing is sent until
//! `Call::response` (or one of its siblings) is invoked. The pending request
//! lives in the `Call` value, not on the client, so one client can serve
//! any number of callers as long as its transport allows it.

use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::{Args, RequestBuilder};
use crate::response::ApiResponse;
use crate::transport::{Transport, UreqTransport};

pub struct TeamworkClient<T = UreqTransport> {
    builder: RequestBuilder,
    transport: T,
}

impl TeamworkClient<UreqTransport> {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, UreqTransport::new())
    }

    /// Build a client from `TEAMWORK_API_KEY` and `TEAMWORK_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }
}

impl<T: Transport> TeamworkClient<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            builder: RequestBuilder::new(credentials),
            transport,
        }
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET endpoint.json[?query]`.
    pub fn get(&self, endpoint: &str, query: Option<&Args>) -> Result<Call<'_, T>> {
        self.call(endpoint, HttpMethod::Get, None, query)
    }

    pub fn post(&self, endpoint: &str, data: &Value) -> Result<Call<'_, T>> {
        self.call(endpoint, HttpMethod::Post, Some(data), None)
    }

    pub fn put(&self, endpoint: &str, data: &Value) -> Result<Call<'_, T>> {
        self.call(endpoint, HttpMethod::Put, Some(data), None)
    }

    pub fn delete(&self, endpoint: &str) -> Result<Call<'_, T>> {
        self.call(endpoint, HttpMethod::Delete, None, None)
    }

    /// Send a request built elsewhere and decode its body.
    pub fn send(&self, request: &HttpRequest) -> Result<ApiResponse> {
        ApiResponse::from_http(self.transport.send(request)?)
    }

    /// Send a request and return the undecoded body text.
    pub fn send_raw(&self, request: &HttpRequest) -> Result<String> {
        Ok(self.transport.send(request)?.body)
    }

    fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
        query: Option<&Args>,
    ) -> Result<Call<'_, T>> {
        let request = self.builder.build_request(endpoint, method, body, query)?;
        Ok(Call {
            client: self,
            request,
        })
    }
}

/// A built request bound to the client that will send it.
pub struct Call<'c, T> {
    client: &'c TeamworkClient<T>,
    request: HttpRequest,
}

impl<'c, T: Transport> Call<'c, T> {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    /// Send and return the decoded payload.
    pub fn response(self) -> Result<Value> {
        Ok(self.send()?.into_payload())
    }

    /// Send and return the body as JSON text, without decoding it.
    pub fn response_as_json(self) -> Result<String> {
        self.client.send_raw(&self.request)
    }

    /// Send and keep the whole normalized response, headers included.
    pub fn send(self) -> Result<ApiResponse> {
        self.client.send(&self.request)
    }
}
