//! Recording transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::TransportError;
use super::http::{ApiRequest, ApiResponse, Transport};

/// Records every request and answers from a queue of canned responses.
///
/// An exhausted queue answers with a network error, which the client reports
/// as unreachable.
#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl FakeTransport {
    pub fn reply(status: u16, body: &str) -> Self {
        let fake = Self::default();
        fake.push(status, body);
        fake
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request sent")
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(TransportError::Network("no canned response".to_owned())))
    }
}
