//! Shared types and models for the Krishi Sevak advisory service
//!
//! This crate holds the immutable reference tables and the rule engine used
//! by the backend. Nothing in here performs I/O.

pub mod models;
pub mod reference;
pub mod rules;
pub mod types;

pub use models::*;
pub use reference::{ReferenceData, ReferenceError};
pub use types::*;
