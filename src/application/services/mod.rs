//! Business logic services for the application layer.

pub mod announce_service;

pub use announce_service::{AnnounceOutcome, AnnounceService};
