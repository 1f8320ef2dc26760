//! dosalabs-mailer
//!
//! The notification dispatcher: builds transactional booking emails and
//! sends them through the Resend REST API. Sending never panics and never
//! returns `Err` — every call resolves to a tagged [`client::SendOutcome`]
//! so callers can update booking state unconditionally.

pub mod client;
pub mod error;
pub mod message;

pub use client::{Mailer, SendOutcome};
