//! rsems-core
//!
//! Pure domain types and object-key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the RSEMS system.

pub mod error;
pub mod keys;
pub mod models;
