//! statewatch-storage
//!
//! S3 listing operations. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
