//! Fixed footer positioning on scroll.

use serde::Serialize;

/// Element id of the footer image kept above the page bottom.
pub const FOOTER_ELEMENT_ID: &str = "bottom-pic";

/// Default distance between the footer and the page bottom, in pixels.
pub const DEFAULT_FOOTER_OFFSET_PX: u32 = 60;

/// Where the footer sits after a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterPosition {
    pub element_id: &'static str,
    pub bottom_px: u32,
}

impl FooterPosition {
    /// CSS value for the element's `bottom` property.
    pub fn css_bottom(&self) -> String {
        format!("{}px", self.bottom_px)
    }
}

/// Keeps the footer a constant offset above the page bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterAnchor {
    offset_px: u32,
}

impl FooterAnchor {
    pub fn new(offset_px: u32) -> Self {
        Self { offset_px }
    }

    pub fn offset_px(&self) -> u32 {
        self.offset_px
    }

    /// Position after scrolling to `scroll_y`. Independent of the scroll
    /// offset, so repeated scrolls always produce the same position.
    pub fn on_scroll(&self, _scroll_y: f64) -> FooterPosition {
        FooterPosition {
            element_id: FOOTER_ELEMENT_ID,
            bottom_px: self.offset_px,
        }
    }
}

impl Default for FooterAnchor {
    fn default() -> Self {
        Self::new(DEFAULT_FOOTER_OFFSET_PX)
    }
}
