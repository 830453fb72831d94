//! Sift - Auth
//!
//! API key authentication for the telemetry ingestion API.
//!
//! Devices authenticate with a pre-shared key sent in the `X-API-Key`
//! header (or `apiKey` query parameter - the transport layer decides).
//! This crate only provides the store: load keys at startup from config
//! and/or a keys file, then validate presented keys in constant time.
//!
//! Authentication happens before validation; the validation engine assumes
//! every batch it sees is already authorized.

mod error;
mod store;

#[cfg(test)]
mod store_test;

pub use error::{AuthError, Result};
pub use store::{ApiKeyStore, MIN_KEY_LENGTH};
