//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into control events and coordinator
//! refreshes, and returns the resulting figures as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
