//! Shared types and models for the AgriSat mock satellite-analysis backend
//!
//! This crate holds the response contracts and the NDVI classification
//! tables. It performs no I/O and draws no random numbers; the backend
//! feeds it values and serializes what it returns.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
