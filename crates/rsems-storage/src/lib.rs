//! rsems-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus typed JSON
//! document helpers.

pub mod client;
pub mod documents;
pub mod error;
pub mod objects;
