use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    /// No provider credential. Terminal until an operator intervenes —
    /// retrying cannot fix it.
    #[error("Mail provider not configured")]
    MissingApiKey,

    #[error("provider rejected the message (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("send request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected provider response: {0}")]
    ResponseParse(String),
}

impl MailerError {
    /// Stable error code stored on the booking record and used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            MailerError::MissingApiKey => "CONFIG_ERROR",
            MailerError::Provider { .. } => "RESEND_ERROR",
            MailerError::Timeout => "TIMEOUT",
            MailerError::Transport(_) => "TRANSPORT_ERROR",
            MailerError::ResponseParse(_) => "RESEND_ERROR",
        }
    }

    /// Whether a later attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, MailerError::MissingApiKey)
    }
}
