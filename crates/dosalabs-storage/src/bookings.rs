//! The booking repository.
//!
//! One JSON object per idempotency key under `bookings/`. Creation uses the
//! conditional-put primitive so two concurrent submissions with the same key
//! can never both win; notification-state updates use ETag optimistic
//! locking. Records are never deleted.

use aws_sdk_s3::Client;

use dosalabs_core::models::booking::BookingRecord;
use dosalabs_core::s3_keys;

use crate::error::StorageError;
use crate::state;

/// Result of a conditional create.
#[derive(Debug)]
pub enum CreateOutcome {
    /// The record was stored; this invocation owns the booking.
    Created,
    /// Another submission with the same idempotency key got there first.
    /// Carries the winner's record so the caller can surface it as
    /// idempotent success — never as an error.
    AlreadyExists(BookingRecord),
}

/// Atomically store a booking unless one already exists for its idempotency
/// key. The loser of a concurrent race receives the winner's record.
pub async fn create_booking_if_absent(
    client: &Client,
    bucket: &str,
    record: &BookingRecord,
) -> Result<CreateOutcome, StorageError> {
    let key = s3_keys::booking(&record.booking_request_id);

    match state::create_state_if_absent(client, bucket, &key, record).await {
        Ok(_etag) => {
            tracing::info!(
                booking_request_id = %record.booking_request_id,
                booking_id = %record.booking_id,
                "booking record created"
            );
            Ok(CreateOutcome::Created)
        }
        Err(StorageError::PreconditionFailed { .. }) => {
            let (existing, _etag) = state::load_state(client, bucket, &key).await?;
            Ok(CreateOutcome::AlreadyExists(existing))
        }
        Err(e) => Err(e),
    }
}

/// Fetch a booking by idempotency key. `StorageError::NotFound` if absent.
pub async fn get_booking(
    client: &Client,
    bucket: &str,
    booking_request_id: &str,
) -> Result<BookingRecord, StorageError> {
    let key = s3_keys::booking(booking_request_id);
    let (record, _etag) = state::load_state(client, bucket, &key).await?;
    Ok(record)
}

/// Fetch a booking together with its ETag, for a guarded read-modify-write.
pub async fn load_booking(
    client: &Client,
    bucket: &str,
    booking_request_id: &str,
) -> Result<(BookingRecord, String), StorageError> {
    let key = s3_keys::booking(booking_request_id);
    state::load_state(client, bucket, &key).await
}

/// Write back a mutated booking, guarded by the ETag from [`load_booking`].
pub async fn save_booking_if_match(
    client: &Client,
    bucket: &str,
    record: &BookingRecord,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let key = s3_keys::booking(&record.booking_request_id);
    state::save_state_if_match(client, bucket, &key, record, expected_etag).await
}
