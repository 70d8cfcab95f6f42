//! Domain layer containing the dashboard's data model and seams.
//!
//! # Architecture
//!
//! - [`entities`] - Tracks, selection state, chart kinds and figures
//! - [`repositories`] - Dataset access trait definitions
//! - [`controls`] - Page controls, document abstraction and footer anchoring
//! - [`rendering`] - Rendering collaborator trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository and renderer traits define contracts implemented elsewhere
//! - Coordination logic lives in [`crate::application::services`]
//!
//! # Event Flow
//!
//! 1. The page reports a control change with a [`controls::ControlSnapshot`]
//! 2. The binder maps the control to a [`controls::RefreshScope`]
//! 3. The coordinator reads an immutable [`entities::SelectionState`]
//! 4. Each chart update is dispatched to a [`rendering::ChartRenderer`]

pub mod controls;
pub mod entities;
pub mod repositories;
pub mod rendering;
