//! # Unwrapped Dashboard
//!
//! An interactive listening-history dashboard built with Axum. The page's
//! controls drive five charts over a CSV dataset of daily top-song snapshots.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Controls, selection state, chart model and repository traits
//! - **Application Layer** ([`application`]) - Control binding, chart coordination and figure rendering
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV loading and the in-memory repository
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard page
//!
//! ## Event Flow
//!
//! A control change on the page is posted to `/api/events` together with a
//! snapshot of every control. The [`ControlPanelBinder`](application::services::ControlPanelBinder)
//! maps the control to a refresh scope, the
//! [`ChartCoordinator`](application::services::ChartCoordinator) reads the
//! selection and updates the charts of that scope, and the resulting figures
//! are returned for the page to draw.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATASET_PATH="universal_top_spotify_songs.csv"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ChartCoordinator, ControlEvent, ControlPanelBinder, DatasetService, FigureRenderer,
    };
    pub use crate::domain::controls::{ControlId, ControlSnapshot, RefreshScope};
    pub use crate::domain::entities::{ChartFilters, ChartKind, SelectionState};
    pub use crate::domain::rendering::ChartRenderer;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
