//! Business logic services for the application layer.

pub mod chart_coordinator;
pub mod control_binder;
pub mod dataset_service;
pub mod figure_renderer;

pub use chart_coordinator::{ChartCoordinator, ChartFailure, REFRESH_ALL_ORDER, RefreshReport};
pub use control_binder::{BinderOutcome, ControlEvent, ControlPanelBinder};
pub use dataset_service::{DateBounds, DatasetService, EntityOptions};
pub use figure_renderer::FigureRenderer;
