//! Scripted contact transport for workflow tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::{ContactError, ContactTransport, RawResponse};
use super::types::ContactRequest;

/// Replays one canned outcome and records every request it receives.
pub(crate) struct MockTransport {
    outcome: Result<RawResponse, ContactError>,
    pub(crate) sent: RefCell<Vec<ContactRequest>>,
}

impl MockTransport {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self { outcome: Ok(RawResponse { status, body: body.to_owned() }), sent: RefCell::new(Vec::new()) }
    }

    pub(crate) fn failing(err: ContactError) -> Self {
        Self { outcome: Err(err), sent: RefCell::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl ContactTransport for MockTransport {
    async fn post_contact(&self, request: &ContactRequest) -> Result<RawResponse, ContactError> {
        self.sent.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}
