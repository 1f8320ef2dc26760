//! dosalabs-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the booking
//! repository built on conditional writes.

pub mod bookings;
pub mod client;
pub mod error;
pub mod objects;
pub mod state;
