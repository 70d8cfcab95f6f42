//! Web dashboard layer for browser-based UI.
//!
//! Serves the dashboard page. Uses Askama templates for server-side
//! rendering; charts are drawn client-side from `/api` figures.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
