//! In-memory transport for unit tests.

use std::cell::RefCell;

use crate::client::TeamworkClient;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub const BASE_URL: &str = "https://acme.teamwork.com";

/// Records every request and answers with a fixed response.
pub struct RecordingTransport {
    response: HttpResponse,
    pub sent: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            },
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn with_headers(mut self, headers: &[(&str, &str)]) -> Self {
        self.response.headers = headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self
    }

    pub fn last(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().expect("no request was sent")
    }

    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}

pub fn client(status: u16, body: &str) -> TeamworkClient<RecordingTransport> {
    TeamworkClient::with_transport(
        Credentials::new("twp_key", BASE_URL),
        RecordingTransport::replying(status, body),
    )
}

pub fn client_with_headers(
    status: u16,
    body: &str,
    headers: &[(&str, &str)],
) -> TeamworkClient<RecordingTransport> {
    TeamworkClient::with_transport(
        Credentials::new("twp_key", BASE_URL),
        RecordingTransport::replying(status, body).with_headers(headers),
    )
}
