//! The durable booking record and its caller-safe projection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::notify::AttemptOutcome;

/// Delivery state of the confirmation email for a booking.
///
/// `Pending` is accepted on the wire for forward compatibility but no
/// transition in the current flow produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum EmailStatus {
    Queued,
    Sent,
    Failed,
    Pending,
}

/// A confirmed booking, stored once per idempotency key and never deleted.
///
/// The booking ID (`DL-######`) is generated at creation and never changes.
/// `amount_cents` and `lab_name` are resolved server-side from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingRecord {
    /// Client-generated idempotency key, e.g. `req_k3j2_1731000000`.
    pub booking_request_id: String,
    /// Guest-facing booking ID, e.g. `DL-482913`.
    pub booking_id: String,
    pub email: String,
    pub guest_name: String,
    pub lab_id: String,
    pub lab_name: String,
    #[serde(rename = "datetimeISO")]
    pub datetime_iso: String,
    pub amount_cents: i64,
    pub currency: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub email_status: EmailStatus,
    pub email_send_count: u32,
    pub last_email_attempt_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_error_message: Option<String>,
}

impl BookingRecord {
    /// Fold a delivery attempt into the record.
    ///
    /// Every attempt — initial send, manual resend, or background retry —
    /// bumps `email_send_count` and stamps `last_email_attempt_at`,
    /// regardless of outcome. `Sent` is only set on confirmed provider
    /// acceptance. Stale error fields from an earlier failure are left in
    /// place when a later attempt succeeds; `email_status` is authoritative.
    pub fn record_attempt(&mut self, outcome: AttemptOutcome, now: jiff::Timestamp) {
        self.email_send_count += 1;
        self.last_email_attempt_at = Some(now);
        self.updated_at = now;

        match outcome {
            AttemptOutcome::Delivered { message_id } => {
                self.email_status = EmailStatus::Sent;
                self.email_message_id = Some(message_id);
            }
            AttemptOutcome::Failed { code, message } => {
                self.email_status = EmailStatus::Failed;
                self.email_error_code = Some(code);
                self.email_error_message = Some(message);
            }
        }
    }
}

/// Read-only view of a booking, safe to hand to the guest dashboard.
/// Never exposes error details, provider message IDs, or the raw record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingProjection {
    pub booking_id: String,
    pub lab_name: String,
    #[serde(rename = "datetimeISO")]
    pub datetime_iso: String,
    pub amount_cents: i64,
    pub currency: String,
    pub email_status: EmailStatus,
}

impl From<&BookingRecord> for BookingProjection {
    fn from(record: &BookingRecord) -> Self {
        BookingProjection {
            booking_id: record.booking_id.clone(),
            lab_name: record.lab_name.clone(),
            datetime_iso: record.datetime_iso.clone(),
            amount_cents: record.amount_cents,
            currency: record.currency.clone(),
            email_status: record.email_status,
        }
    }
}
