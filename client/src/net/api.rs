//! Contact-intake HTTP client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by a
//! `gloo-timers` timeout.
//! Server-side (SSR): the transport returns an error since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, timeout, non-2xx status, falsy `ok`) comes back
//! as a `ContactError`; nothing panics and nothing escapes past the caller
//! that turns the outcome into submission status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{ContactReply, ContactRequest};
use crate::config::SiteConfig;

/// Path of the contact-intake endpoint relative to the configured base.
pub const CONTACT_PATH: &str = "/api/contact";
/// Shown when the service rejects a submission without a message.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message.";
/// Shown when the request never produced a usable reply.
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong. Try again.";
/// Shown on success when the service sends no message of its own.
pub const SENT_MESSAGE: &str = "Message sent.";

/// Failures of a single contact submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The request could not be built, sent, or read.
    #[error("contact request failed: {0}")]
    Transport(String),

    /// No reply arrived within the configured timeout.
    #[error("contact request timed out after {0} ms")]
    Timeout(u32),

    /// The service answered but did not accept the message.
    #[error("{0}")]
    Rejected(String),
}

impl ContactError {
    /// Text for the status banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) | Self::Timeout(_) => UNEXPECTED_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Status code and raw body of a contact-intake response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one contact request. Enables mocking in tests.
#[async_trait(?Send)]
pub trait ContactTransport {
    /// POST the request and return whatever the endpoint answered.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Transport`] or [`ContactError::Timeout`] when no
    /// response was obtained.
    async fn post_contact(&self, request: &ContactRequest) -> Result<RawResponse, ContactError>;
}

/// Full endpoint URL for a configured base.
pub fn contact_endpoint(api_base: &str) -> String {
    format!("{}{CONTACT_PATH}", api_base.trim_end_matches('/'))
}

/// Decide the outcome of a response.
///
/// # Errors
///
/// Returns [`ContactError::Rejected`] when the status is not 2xx or the body's
/// `ok` marker is falsy.
pub fn interpret_response(response: &RawResponse) -> Result<String, ContactError> {
    let reply = ContactReply::from_body(&response.body);
    if !response.is_success() || !reply.ok {
        return Err(ContactError::Rejected(
            reply.message.unwrap_or_else(|| SEND_FAILED_MESSAGE.to_owned()),
        ));
    }
    Ok(reply.message.unwrap_or_else(|| SENT_MESSAGE.to_owned()))
}

/// Submit a contact request through `transport` and interpret the reply.
///
/// Issues exactly one request; never retries.
///
/// # Errors
///
/// Returns a [`ContactError`] for any transport failure or rejected reply.
pub async fn send_contact<T>(transport: &T, request: &ContactRequest) -> Result<String, ContactError>
where
    T: ContactTransport + ?Sized,
{
    let response = transport.post_contact(request).await.inspect_err(|e| {
        log::warn!("contact submission failed before a reply: {e}");
    })?;
    interpret_response(&response).inspect_err(|e| {
        log::info!("contact submission rejected (status {}): {e}", response.status);
    })
}

/// Browser transport for the configured contact-intake endpoint.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpContactTransport {
    pub fn new(config: &SiteConfig) -> Self {
        Self { endpoint: contact_endpoint(&config.api_base), timeout_ms: config.request_timeout_ms }
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpContactTransport {
    async fn post_contact(&self, request: &ContactRequest) -> Result<RawResponse, ContactError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let send = async {
                let resp = gloo_net::http::Request::post(&self.endpoint)
                    .json(request)
                    .map_err(|e| ContactError::Transport(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ContactError::Transport(e.to_string()))?;
                let status = resp.status();
                // Unreadable bodies are handled like an empty JSON object.
                let body = resp.text().await.unwrap_or_default();
                Ok(RawResponse { status, body })
            };
            let send = std::pin::pin!(send);
            let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));

            match select(send, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ContactError::Timeout(self.timeout_ms)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            log::debug!("skipping POST {} outside the browser (timeout {} ms)", self.endpoint, self.timeout_ms);
            Err(ContactError::Transport("not available on server".to_owned()))
        }
    }
}
