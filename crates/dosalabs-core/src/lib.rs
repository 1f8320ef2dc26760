//! dosalabs-core
//!
//! Pure domain types, the lab/kit catalog, the pricing engine, and the
//! notification policy. No AWS SDK dependency — this is the shared
//! vocabulary of the Dosalabs booking system.

pub mod catalog;
pub mod models;
pub mod notify;
pub mod pricing;
pub mod s3_keys;
