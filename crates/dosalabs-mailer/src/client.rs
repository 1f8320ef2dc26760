use std::time::Duration;

use serde::{Deserialize, Serialize};

use dosalabs_core::notify::AttemptOutcome;

use crate::error::MailerError;
use crate::message::{EmailMessage, REPLY_TO, SENDER};

pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Hard ceiling on a single provider call. A hung request counts as a
/// failed attempt; nothing blocks past this.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend REST client with a fixed sender identity.
#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

/// Tagged result of a send. `Failed` carries the stable error code stored
/// on the booking record plus whether a later attempt could succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { message_id: String },
    Failed {
        code: String,
        message: String,
        retryable: bool,
    },
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }

    /// True only for failures worth handing to the backoff driver.
    pub fn should_retry(&self) -> bool {
        matches!(self, SendOutcome::Failed { retryable: true, .. })
    }

    /// Convert into the record-level attempt outcome.
    pub fn into_attempt(self) -> AttemptOutcome {
        match self {
            SendOutcome::Sent { message_id } => AttemptOutcome::Delivered { message_id },
            SendOutcome::Failed { code, message, .. } => AttemptOutcome::Failed { code, message },
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: String,
}

impl Mailer {
    /// Build a mailer against the production Resend endpoint. An absent or
    /// empty API key is not an error here — sends will resolve to the
    /// `CONFIG_ERROR` outcome instead of crashing the process.
    pub fn new(api_key: Option<String>) -> Result<Self, MailerError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a mailer against a specific endpoint (used by tests and local
    /// stubs via `RESEND_BASE_URL`).
    pub fn with_base_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, MailerError> {
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        Ok(Mailer {
            http,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.into(),
        })
    }

    /// Read `RESEND_API_KEY` (and an optional `RESEND_BASE_URL` override)
    /// from the environment.
    pub fn from_env() -> Result<Self, MailerError> {
        let api_key = std::env::var("RESEND_API_KEY").ok();
        let base_url =
            std::env::var("RESEND_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }

    /// Send a message. Always resolves to a [`SendOutcome`]; the caller can
    /// fold it into booking state without a failure branch.
    pub async fn send(&self, message: &EmailMessage) -> SendOutcome {
        match self.dispatch(message).await {
            Ok(message_id) => {
                tracing::info!(to = %message.to, message_id = %message_id, "email accepted by provider");
                SendOutcome::Sent { message_id }
            }
            Err(e) => {
                // A missing credential needs an operator, not a retry; it
                // gets its own log line so it stands out in CloudWatch.
                if matches!(e, MailerError::MissingApiKey) {
                    tracing::error!(code = e.code(), "mail provider credential missing");
                } else {
                    tracing::warn!(code = e.code(), error = %e, to = %message.to, "email send failed");
                }
                SendOutcome::Failed {
                    code: e.code().to_string(),
                    message: e.to_string(),
                    retryable: e.is_retryable(),
                }
            }
        }
    }

    async fn dispatch(&self, message: &EmailMessage) -> Result<String, MailerError> {
        let api_key = self.api_key.as_deref().ok_or(MailerError::MissingApiKey)?;

        let payload = SendEmailRequest {
            from: SENDER,
            to: [message.to.as_str()],
            reply_to: REPLY_TO,
            subject: &message.subject,
            html: message.html.as_deref(),
            text: message.text.as_deref(),
        };

        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailerError::Timeout
                } else {
                    MailerError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(MailerError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = resp
            .json()
            .await
            .map_err(|e| MailerError::ResponseParse(e.to_string()))?;

        Ok(body.id)
    }
}
