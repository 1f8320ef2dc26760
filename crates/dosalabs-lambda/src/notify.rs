//! Notification orchestration: dispatch a send, fold the outcome into the
//! stored record, and drive best-effort background retries.

use dosalabs_core::models::booking::{BookingRecord, EmailStatus};
use dosalabs_core::notify::{backoff_delay, MAX_BACKGROUND_RETRIES, MAX_SEND_ATTEMPTS};
use dosalabs_mailer::message;
use dosalabs_mailer::SendOutcome;
use dosalabs_storage::bookings;
use dosalabs_storage::error::StorageError;

use crate::state::AppState;

/// Send the confirmation for a freshly created booking and record the
/// outcome. Retryable failures are handed to the backoff driver.
///
/// Returns the status the HTTP response should report: the actual attempt
/// outcome. If the bookkeeping write fails the record stays `QUEUED`,
/// which a later manual resend recovers.
pub async fn dispatch_confirmation(state: &AppState, record: &BookingRecord) -> EmailStatus {
    let outcome = state.mailer.send(&message::build_confirmation(record)).await;
    let status = if outcome.is_sent() {
        EmailStatus::Sent
    } else {
        EmailStatus::Failed
    };
    let should_retry = outcome.should_retry();

    if let Err(e) = persist_attempt(state, &record.booking_request_id, outcome).await {
        tracing::error!(
            booking_request_id = %record.booking_request_id,
            error = %e,
            "failed to record email attempt"
        );
    }

    if should_retry {
        spawn_backoff_retries(state.clone(), record.booking_request_id.clone());
    }

    status
}

/// Fold one delivery attempt into the stored record, guarded by ETag.
pub async fn persist_attempt(
    state: &AppState,
    booking_request_id: &str,
    outcome: SendOutcome,
) -> Result<(), StorageError> {
    let (mut record, etag) =
        bookings::load_booking(&state.s3, &state.bucket, booking_request_id).await?;
    record.record_attempt(outcome.into_attempt(), jiff::Timestamp::now());
    bookings::save_booking_if_match(&state.s3, &state.bucket, &record, &etag).await?;
    Ok(())
}

/// Fire-and-forget exponential backoff: 2^n seconds before the nth retry,
/// bounded by both the retry budget and the overall attempt cap.
///
/// Best-effort: the timers die with the instance in a serverless
/// deployment, and a manual resend remains the recovery path.
pub fn spawn_backoff_retries(state: AppState, booking_request_id: String) {
    tokio::spawn(async move {
        for retry in 1..=MAX_BACKGROUND_RETRIES {
            tokio::time::sleep(backoff_delay(retry)).await;

            let (mut record, etag) =
                match bookings::load_booking(&state.s3, &state.bucket, &booking_request_id).await {
                    Ok(loaded) => loaded,
                    Err(e) => {
                        tracing::warn!(
                            booking_request_id = %booking_request_id,
                            error = %e,
                            "backoff retry aborted: booking unreadable"
                        );
                        return;
                    }
                };

            // A manual resend may have landed while we slept.
            if record.email_status == EmailStatus::Sent {
                return;
            }
            if record.email_send_count >= MAX_SEND_ATTEMPTS {
                tracing::warn!(
                    booking_request_id = %booking_request_id,
                    "backoff retries stopped: attempt cap reached"
                );
                return;
            }

            let outcome = state.mailer.send(&message::build_confirmation(&record)).await;
            let delivered = outcome.is_sent();
            let retryable = outcome.should_retry();
            record.record_attempt(outcome.into_attempt(), jiff::Timestamp::now());

            if let Err(e) =
                bookings::save_booking_if_match(&state.s3, &state.bucket, &record, &etag).await
            {
                tracing::warn!(
                    booking_request_id = %booking_request_id,
                    error = %e,
                    "backoff retry could not record its attempt"
                );
                return;
            }

            if delivered || !retryable {
                return;
            }
            tracing::info!(
                booking_request_id = %booking_request_id,
                retry,
                "confirmation email retry failed; backing off"
            );
        }

        tracing::warn!(
            booking_request_id = %booking_request_id,
            "confirmation email permanently failed after background retries"
        );
    });
}

/// Operational alert to the studio inbox for a new booking. Untracked and
/// best-effort; a miss is logged, never surfaced to the guest.
pub fn spawn_instructor_alert(state: AppState, record: BookingRecord) {
    tokio::spawn(async move {
        let outcome = state
            .mailer
            .send(&message::build_instructor_alert(&record))
            .await;
        if !outcome.is_sent() {
            tracing::warn!(booking_id = %record.booking_id, "instructor alert not delivered");
        }
    });
}
