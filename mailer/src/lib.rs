//! Transactional email relay client.
//!
//! The contact form forwards submissions through a hosted email relay
//! addressed by three opaque identifiers (service id, template id, public
//! account key). The relay's response carries no structured content the app
//! consumes; the only signal is success or failure.
//!
//! The rest of the system talks to this crate through the narrow
//! [`MailDispatch`] trait, so tests can observe or swallow dispatches without
//! any network.

use std::time::Duration;

use futures_util::future::BoxFuture;
use serde::Serialize;

use terra_types::MailPayload;

/// Canonical relay endpoint base.
pub const EMAILJS_API_BASE_URL: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

const CONNECT_TIMEOUT_SECS: u64 = 30;

const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

/// Relay identifiers baked into the client, overridable via config.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayCredentials {
    fn default() -> Self {
        Self {
            service_id: "contact_service".to_string(),
            template_id: "contact_form".to_string(),
            public_key: "mLOCb2mbvx16-WXal".to_string(),
        }
    }
}

// Manual Debug impl to keep the account key out of logs.
impl std::fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[REDACTED]")
            .finish()
    }
}

/// A failed dispatch. Network errors and relay rejections are both
/// retryable from the caller's point of view.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Status { status: u16, body: String },
}

/// Narrow `send(payload) -> success | failure` interface to the relay.
pub trait MailDispatch: Send + Sync {
    fn send(&self, payload: MailPayload) -> BoxFuture<'static, Result<(), MailError>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a MailPayload,
}

/// HTTP client for the hosted relay.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    client: reqwest::Client,
    base_url: String,
    credentials: RelayCredentials,
}

impl EmailRelay {
    /// Build a relay client against the canonical endpoint.
    ///
    /// Only a connect timeout is applied. The form state machine has no
    /// retry or cancellation path, so an indefinitely hanging request keeps
    /// the UI in `Sending`; this is a known limitation of the design.
    pub fn new(credentials: RelayCredentials) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: EMAILJS_API_BASE_URL.to_string(),
            credentials,
        })
    }

    /// Point the client at a different endpoint base (mock servers in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Forward one submission to the relay. Any 2xx response is success.
    pub async fn send_mail(&self, payload: &MailPayload) -> Result<(), MailError> {
        let body = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: payload,
        };

        let url = format!("{}{SEND_PATH}", self.base_url);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "relay accepted submission");
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY_BYTES {
            // The cut must land on a char boundary; the body is
            // relay-controlled and may be multi-byte UTF-8.
            let mut cut = MAX_ERROR_BODY_BYTES;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        tracing::warn!(status = status.as_u16(), "relay rejected submission");
        Err(MailError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl MailDispatch for EmailRelay {
    fn send(&self, payload: MailPayload) -> BoxFuture<'static, Result<(), MailError>> {
        let relay = self.clone();
        Box::pin(async move { relay.send_mail(&payload).await })
    }
}

#[cfg(test)]
mod tests {
    use super::RelayCredentials;

    #[test]
    fn debug_masks_public_key() {
        let creds = RelayCredentials::default();
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("mLOCb2mbvx16-WXal"));
    }
}
