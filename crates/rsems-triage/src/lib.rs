//! rsems-triage
//!
//! Triage scoring for daily symptom logs. Pure logic — no storage or network
//! dependency. Computes the risk score of a submission, assembles the
//! immutable daily log record, and orders logs for the clinician worklist.

pub mod error;
pub mod scoring;
pub mod submission;
pub mod summary;
pub mod worklist;

pub use error::TriageError;
pub use scoring::{RiskBand, TriageResult, score, score_entries, validate_entries};
