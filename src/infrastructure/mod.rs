//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dataset`] - CSV dataset loading and the in-memory track repository

pub mod dataset;
