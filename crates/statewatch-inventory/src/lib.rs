//! statewatch-inventory
//!
//! Live cluster inventory. Thin wrapper around the AWS EKS SDK.

pub mod client;
pub mod clusters;
pub mod error;
