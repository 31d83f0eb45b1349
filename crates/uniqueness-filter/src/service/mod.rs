//! Service Layer
//!
//! Contains the application services that orchestrate domain logic
//! through the ports.

pub mod uniqueness_service;

pub use uniqueness_service::{classify, UniquenessService};
