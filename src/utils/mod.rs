//! Utility functions shared across the application.
//!
//! - [`site_url`] - resolution of announced URLs against the site base,
//!   including host validation

pub mod site_url;
