//! Notification delivery policy.
//!
//! Pure decision logic over [`EmailStatus`] — the guard chain for manual
//! resends and the backoff schedule for background retries. The dispatching
//! itself lives in `dosalabs-mailer`; the orchestration in `dosalabs-lambda`.

use std::time::Duration;

use crate::models::booking::{BookingRecord, EmailStatus};

/// Hard cap on recorded delivery attempts, counting the initial send.
pub const MAX_SEND_ATTEMPTS: u32 = 3;

/// Minimum wait between manual resend attempts.
pub const RESEND_COOLDOWN_SECS: i64 = 5 * 60;

/// Background retries per booking after a retryable initial failure.
pub const MAX_BACKGROUND_RETRIES: u32 = 3;

/// Outcome of a single delivery attempt, as folded into the booking record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Delivered { message_id: String },
    Failed { code: String, message: String },
}

/// Verdict of the manual-resend guard chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendDecision {
    /// Already delivered — resend is a no-op success, nothing is counted.
    AlreadySent,
    /// The attempt cap is spent; no amount of waiting unlocks it.
    AttemptsExhausted,
    /// A previous attempt is too recent.
    CoolingDown,
    /// All guards passed — dispatch again.
    Allowed,
}

impl ResendDecision {
    /// Human-readable reason for the two policy rejections, `None` otherwise.
    pub fn rejection_message(self) -> Option<&'static str> {
        match self {
            ResendDecision::AttemptsExhausted => Some("Max resend attempts reached"),
            ResendDecision::CoolingDown => Some("Please wait 5 minutes between retries"),
            ResendDecision::AlreadySent | ResendDecision::Allowed => None,
        }
    }
}

/// Run the manual-resend guard chain, in order: delivered short-circuit,
/// attempt cap, cooldown window.
pub fn evaluate_resend(record: &BookingRecord, now: jiff::Timestamp) -> ResendDecision {
    if record.email_status == EmailStatus::Sent {
        return ResendDecision::AlreadySent;
    }

    if record.email_send_count >= MAX_SEND_ATTEMPTS {
        return ResendDecision::AttemptsExhausted;
    }

    if let Some(last) = record.last_email_attempt_at {
        let elapsed_secs = now.as_second() - last.as_second();
        if elapsed_secs < RESEND_COOLDOWN_SECS {
            return ResendDecision::CoolingDown;
        }
    }

    ResendDecision::Allowed
}

/// Delay before the nth background retry: 2^n seconds (2s, 4s, 8s).
pub fn backoff_delay(retry: u32) -> Duration {
    Duration::from_secs(1u64 << retry)
}
