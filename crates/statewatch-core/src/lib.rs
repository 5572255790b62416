//! statewatch-core
//!
//! Pure domain types and S3 key conventions for the state-file reports.
//! No AWS SDK dependency — this is the shared vocabulary of the statewatch
//! system.

pub mod console;
pub mod key_path;
pub mod policy;
pub mod report;
