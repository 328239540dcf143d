//! Transport double shared by the integration test binaries.

use std::cell::RefCell;

use teamwork_core::{HttpRequest, HttpResponse, Result, Transport};

/// Records every request and answers with one canned response.
pub struct ReplayTransport {
    response: HttpResponse,
    pub sent: RefCell<Vec<HttpRequest>>,
}

impl ReplayTransport {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for ReplayTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}
