//! Dashboard controls and the document they live in.
//!
//! - [`control`] - Control identifiers, selectors and refresh scopes
//! - [`document`] - Read-only document abstraction and selection snapshots
//! - [`footer`] - Fixed footer repositioning on scroll

pub mod control;
pub mod document;
pub mod footer;

pub use control::{ControlId, RefreshScope};
pub use document::{ControlDocument, ControlSnapshot, read_selection};
pub use footer::{DEFAULT_FOOTER_OFFSET_PX, FOOTER_ELEMENT_ID, FooterAnchor, FooterPosition};
