#![forbid(unsafe_code)]

//! In-memory page implementing the dock host capabilities.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use folio_core::geometry::{Rect, SectionBounds};
use folio_dock::{GeometryHost, LayoutHost, SmoothScroll};
use tracing::{debug, warn};

use crate::smooth_scroll::ScrollAnimator;

/// Page state mirrored from the embedding environment.
///
/// The host writes layout as it changes (viewport, section extents, icon
/// boxes); the dock reads it through the capability traits. Smooth-scroll
/// requests are recorded and, unless disabled, animated by a spring that the
/// session advances every frame.
#[derive(Debug)]
pub struct WebHost {
    scroll_y: Cell<f64>,
    viewport: Cell<(f64, f64)>,
    document_height: Cell<Option<f64>>,
    sections: RefCell<HashMap<String, SectionBounds>>,
    boxes: RefCell<HashMap<String, Rect>>,
    scroll_requests: RefCell<Vec<String>>,
    animator: RefCell<ScrollAnimator>,
    animate_scroll: bool,
}

impl WebHost {
    #[must_use]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            viewport: Cell::new((viewport_width, viewport_height)),
            document_height: Cell::new(None),
            sections: RefCell::new(HashMap::new()),
            boxes: RefCell::new(HashMap::new()),
            scroll_requests: RefCell::new(Vec::new()),
            animator: RefCell::new(ScrollAnimator::new()),
            animate_scroll: true,
        }
    }

    /// Record scroll requests without moving the page; the embedding
    /// environment performs the scroll itself.
    #[must_use]
    pub fn without_scroll_animation(mut self) -> Self {
        self.animate_scroll = false;
        self
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport.set((width, height));
    }

    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        self.viewport.get()
    }

    /// Scroll position set by the user. Interrupts any smooth scroll in
    /// flight, as a wheel gesture does in a browser.
    pub fn set_scroll(&self, y: f64) {
        self.animator.borrow_mut().cancel();
        self.scroll_y.set(y);
    }

    /// Explicit document height. Without one, the lowest section bottom is
    /// used.
    pub fn set_document_height(&self, height: f64) {
        self.document_height.set(Some(height));
    }

    pub fn set_section(&self, id: &str, bounds: SectionBounds) {
        self.sections.borrow_mut().insert(id.to_owned(), bounds);
    }

    pub fn remove_section(&self, id: &str) {
        self.sections.borrow_mut().remove(id);
    }

    /// Bounding box (viewport coordinates) of the element for entry `id`.
    pub fn set_icon_box(&self, id: &str, rect: Rect) {
        self.boxes.borrow_mut().insert(id.to_owned(), rect);
    }

    pub fn remove_icon_box(&self, id: &str) {
        self.boxes.borrow_mut().remove(id);
    }

    /// Targets passed to [`SmoothScroll::scroll_to`], oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<String> {
        self.scroll_requests.borrow().clone()
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.animator.borrow().is_active()
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        let doc = self.document_height.get().unwrap_or_else(|| {
            self.sections
                .borrow()
                .values()
                .map(SectionBounds::bottom)
                .fold(0.0, f64::max)
        });
        (doc - self.viewport.get().1).max(0.0)
    }

    /// Step the smooth scroll. Returns the new offset when the page moved.
    pub fn advance_scroll(&self, dt: Duration) -> Option<f64> {
        let y = self.animator.borrow_mut().tick(dt)?;
        let moved = y != self.scroll_y.get();
        self.scroll_y.set(y);
        moved.then_some(y)
    }
}

impl LayoutHost for WebHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.get().1
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        self.sections.borrow().get(section_id).copied()
    }
}

impl GeometryHost for WebHost {
    fn bounding_box(&self, element_id: &str) -> Option<Rect> {
        self.boxes.borrow().get(element_id).copied()
    }
}

impl SmoothScroll for WebHost {
    fn scroll_to(&self, target_id: &str) {
        self.scroll_requests.borrow_mut().push(target_id.to_owned());
        if !self.animate_scroll {
            return;
        }
        let Some(bounds) = self.section_bounds(target_id) else {
            warn!(target_id, "smooth scroll target not in page");
            return;
        };
        let to = bounds.top.clamp(0.0, self.max_scroll());
        let from = self.scroll_y.get();
        debug!(target_id, from, to, "smooth scroll started");
        self.animator.borrow_mut().start(from, to);
    }
}
