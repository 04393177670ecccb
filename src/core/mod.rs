//! Shared plumbing: configuration, error types and the auto/manual format selector.

pub mod config;
pub mod errors;
pub mod selector;
