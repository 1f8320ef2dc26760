//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Dosalabs S3 bucket.

/// Booking records are keyed by the client-generated idempotency token,
/// one object per token.
pub fn booking(booking_request_id: &str) -> String {
    format!("bookings/{booking_request_id}.json")
}
