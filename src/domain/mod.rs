//! Core domain value objects.
//!
//! Everything in this layer is transient: notification requests and results
//! live for a single announcement, nothing is persisted.
//!
//! - [`notification`] - per-submission notification results
//! - [`resource`] - the page set derived from a published resource

pub mod notification;
pub mod resource;
