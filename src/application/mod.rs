//! Application layer services implementing the dashboard behaviour.
//!
//! This layer orchestrates domain operations: binding page events,
//! coordinating chart refreshes and rendering figures from the dataset.
//!
//! # Available Services
//!
//! - [`services::control_binder::ControlPanelBinder`] - Page events to refresh scopes
//! - [`services::chart_coordinator::ChartCoordinator`] - Selection state to chart operations
//! - [`services::figure_renderer::FigureRenderer`] - Chart operations to themed figures
//! - [`services::dataset_service::DatasetService`] - Control options from the dataset

pub mod services;
