use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};

use dosalabs_core::catalog;
use dosalabs_core::models::booking::{BookingProjection, BookingRecord, EmailStatus};
use dosalabs_core::notify::{evaluate_resend, ResendDecision};
use dosalabs_mailer::message;
use dosalabs_mailer::SendOutcome;
use dosalabs_storage::bookings::{self, CreateOutcome};

use crate::error::ApiError;
use crate::notify;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    #[serde(default)]
    pub booking_request_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub lab_id: Option<String>,
    #[serde(default, rename = "datetimeISO")]
    pub datetime_iso: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingResponse {
    pub status: SubmitStatus,
    pub booking_id: String,
    pub email_status: EmailStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmitStatus {
    Created,
    AlreadyExists,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLookupRequest {
    #[serde(default)]
    pub booking_request_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendResponse {
    pub success: bool,
    pub email_status: EmailStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create a booking idempotently and send the confirmation email once.
///
/// The idempotency key is the client-generated `bookingRequestId`; a
/// duplicate submission returns the stored booking without another send.
/// The response always reports the real delivery outcome — a booking whose
/// email failed is still a created booking.
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(req): Json<SubmitBookingRequest>,
) -> Result<Json<SubmitBookingResponse>, ApiError> {
    let (Some(booking_request_id), Some(email), Some(lab_id)) = (
        non_empty(req.booking_request_id),
        non_empty(req.email),
        non_empty(req.lab_id),
    ) else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let lab = catalog::find_lab(&lab_id)
        .ok_or_else(|| ApiError::BadRequest("Invalid Lab Selection".to_string()))?;

    let now = jiff::Timestamp::now();
    let record = BookingRecord {
        booking_request_id,
        booking_id: new_booking_id(),
        email,
        guest_name: non_empty(req.guest_name).unwrap_or_else(|| "Guest".to_string()),
        lab_id,
        lab_name: lab.name.to_string(),
        datetime_iso: req.datetime_iso.unwrap_or_default(),
        amount_cents: lab.price_cents,
        currency: "USD".to_string(),
        created_at: now,
        updated_at: now,
        email_status: EmailStatus::Queued,
        email_send_count: 0,
        last_email_attempt_at: None,
        email_message_id: None,
        email_error_code: None,
        email_error_message: None,
    };

    match bookings::create_booking_if_absent(&state.s3, &state.bucket, &record).await? {
        CreateOutcome::AlreadyExists(existing) => {
            tracing::info!(
                booking_request_id = %existing.booking_request_id,
                booking_id = %existing.booking_id,
                "duplicate submission; returning existing booking"
            );
            Ok(Json(SubmitBookingResponse {
                status: SubmitStatus::AlreadyExists,
                booking_id: existing.booking_id,
                email_status: existing.email_status,
            }))
        }
        CreateOutcome::Created => {
            notify::spawn_instructor_alert(state.clone(), record.clone());
            let email_status = notify::dispatch_confirmation(&state, &record).await;
            Ok(Json(SubmitBookingResponse {
                status: SubmitStatus::Created,
                booking_id: record.booking_id,
                email_status,
            }))
        }
    }
}

/// Manually re-send the confirmation email, subject to the guard chain:
/// already-sent short-circuit, attempt cap, cooldown.
pub async fn resend_booking_email(
    State(state): State<AppState>,
    Json(req): Json<BookingLookupRequest>,
) -> Result<Json<ResendResponse>, ApiError> {
    let booking_request_id = non_empty(req.booking_request_id)
        .ok_or_else(|| ApiError::BadRequest("Missing bookingRequestId".to_string()))?;

    let record = bookings::get_booking(&state.s3, &state.bucket, &booking_request_id).await?;

    let decision = evaluate_resend(&record, jiff::Timestamp::now());
    match decision {
        ResendDecision::AlreadySent => Ok(Json(ResendResponse {
            success: true,
            email_status: EmailStatus::Sent,
            error: None,
        })),
        ResendDecision::AttemptsExhausted | ResendDecision::CoolingDown => {
            let reason = decision
                .rejection_message()
                .unwrap_or("Resend not allowed");
            Err(ApiError::TooManyRequests(reason.to_string()))
        }
        ResendDecision::Allowed => {
            let outcome = state.mailer.send(&message::build_confirmation(&record)).await;
            let email_status = if outcome.is_sent() {
                EmailStatus::Sent
            } else {
                EmailStatus::Failed
            };
            let (success, error) = match &outcome {
                SendOutcome::Sent { .. } => (true, None),
                SendOutcome::Failed { message, .. } => (false, Some(message.clone())),
            };

            if let Err(e) = notify::persist_attempt(&state, &booking_request_id, outcome).await {
                tracing::error!(
                    booking_request_id = %booking_request_id,
                    error = %e,
                    "failed to record resend attempt"
                );
            }

            Ok(Json(ResendResponse {
                success,
                email_status,
                error,
            }))
        }
    }
}

/// Read-only projection of a booking for the guest dashboard.
pub async fn get_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingLookupRequest>,
) -> Result<Json<BookingProjection>, ApiError> {
    let booking_request_id = non_empty(req.booking_request_id)
        .ok_or_else(|| ApiError::BadRequest("Missing bookingRequestId".to_string()))?;

    let record = bookings::get_booking(&state.s3, &state.bucket, &booking_request_id).await?;
    Ok(Json(BookingProjection::from(&record)))
}

/// Guest-facing booking ID: `DL-` plus six random digits.
pub fn new_booking_id() -> String {
    let digits = rand::thread_rng().gen_range(100_000..=999_999);
    format!("DL-{digits}")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
