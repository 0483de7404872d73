#![forbid(unsafe_code)]

//! In-memory host for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use folio_core::geometry::{Rect, SectionBounds};

use crate::host::{GeometryHost, LayoutHost, SmoothScroll};

/// A page with fixed sections, settable scroll/viewport, per-element boxes,
/// and a log of smooth-scroll requests.
#[derive(Debug, Default)]
pub struct FakePage {
    scroll_y: Cell<f64>,
    viewport_height: Cell<f64>,
    sections: RefCell<HashMap<String, SectionBounds>>,
    boxes: RefCell<HashMap<String, Rect>>,
    scroll_requests: RefCell<Vec<String>>,
}

impl FakePage {
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: Cell::new(viewport_height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_section(self, id: &str, top: f64, height: f64) -> Self {
        self.sections
            .borrow_mut()
            .insert(id.to_owned(), SectionBounds::new(top, height));
        self
    }

    /// Lay out `ids` left to right starting at `x`, each `width` wide with
    /// `gap` between them.
    #[must_use]
    pub fn with_row(self, ids: &[&str], x: f64, width: f64, gap: f64) -> Self {
        let mut left = x;
        for id in ids {
            self.set_box(id, Rect::new(left, 800.0, width, width));
            left += width + gap;
        }
        self
    }

    pub fn set_scroll(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_viewport_height(&self, h: f64) {
        self.viewport_height.set(h);
    }

    pub fn set_box(&self, id: &str, rect: Rect) {
        self.boxes.borrow_mut().insert(id.to_owned(), rect);
    }

    pub fn remove_box(&self, id: &str) {
        self.boxes.borrow_mut().remove(id);
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<String> {
        self.scroll_requests.borrow().clone()
    }
}

impl LayoutHost for FakePage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        self.sections.borrow().get(section_id).copied()
    }
}

impl GeometryHost for FakePage {
    fn bounding_box(&self, element_id: &str) -> Option<Rect> {
        self.boxes.borrow().get(element_id).copied()
    }
}

impl SmoothScroll for FakePage {
    fn scroll_to(&self, target_id: &str) {
        self.scroll_requests.borrow_mut().push(target_id.to_owned());
    }
}
