//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete clients for the search engine notification APIs.
//!
//! # Modules
//!
//! - [`indexing`] - IndexNow and Google Indexing API clients

pub mod indexing;
