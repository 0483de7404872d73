#![forbid(unsafe_code)]

//! Capabilities the dock needs from its host environment.
//!
//! The dock never touches a rendering technology directly. A browser shim,
//! a native window, or an in-memory test page implements these traits. All
//! methods take `&self`: hosts are single-threaded and keep their mutable
//! state behind interior mutability, the way a DOM does.

use folio_core::geometry::{Rect, SectionBounds};

/// Page layout queries: scroll offset, viewport, section extents.
pub trait LayoutHost {
    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;

    /// Current viewport height.
    fn viewport_height(&self) -> f64;

    /// Live extent of the section element with this id, or `None` if no
    /// such element is laid out.
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
}

/// Element geometry queries in viewport coordinates.
pub trait GeometryHost {
    /// Bounding box of the element rendering the dock entry `element_id`.
    fn bounding_box(&self, element_id: &str) -> Option<Rect>;
}

/// Animated scrolling to a section.
pub trait SmoothScroll {
    /// Start bringing `target_id` into view. Returns immediately; progress
    /// arrives later as ordinary scroll events.
    fn scroll_to(&self, target_id: &str);
}

/// Everything a mounted dock needs.
pub trait DockHost: LayoutHost + GeometryHost + SmoothScroll {}

impl<T: LayoutHost + GeometryHost + SmoothScroll + ?Sized> DockHost for T {}
