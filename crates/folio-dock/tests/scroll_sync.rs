//! End-to-end checks of the dock against a hand-rolled host.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use folio_core::event::Event;
use folio_core::geometry::{Rect, SectionBounds};
use folio_dock::{
    Dock, DockConfig, DockEntries, GeometryHost, Icon, LayoutHost, NavItem, SmoothScroll,
};
use folio_runtime::EventTarget;

/// Sections stacked top to bottom, icons in a row, scroll requests logged.
struct Page {
    scroll_y: Cell<f64>,
    viewport_height: f64,
    sections: Vec<(&'static str, SectionBounds)>,
    icons: Vec<(&'static str, Rect)>,
    requests: RefCell<Vec<String>>,
}

impl Page {
    fn scenario() -> Rc<Self> {
        Rc::new(Self {
            scroll_y: Cell::new(0.0),
            viewport_height: 900.0,
            sections: vec![
                ("hero", SectionBounds::new(0.0, 800.0)),
                ("experience", SectionBounds::new(800.0, 800.0)),
                ("stack", SectionBounds::new(1600.0, 800.0)),
            ],
            icons: vec![
                ("hero", Rect::new(500.0, 820.0, 40.0, 40.0)),
                ("experience", Rect::new(556.0, 820.0, 40.0, 40.0)),
                ("stack", Rect::new(612.0, 820.0, 40.0, 40.0)),
            ],
            requests: RefCell::new(Vec::new()),
        })
    }
}

impl LayoutHost for Page {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(id, _)| *id == section_id)
            .map(|(_, b)| *b)
    }
}

impl GeometryHost for Page {
    fn bounding_box(&self, element_id: &str) -> Option<Rect> {
        self.icons
            .iter()
            .find(|(id, _)| *id == element_id)
            .map(|(_, r)| *r)
    }
}

impl SmoothScroll for Page {
    fn scroll_to(&self, target_id: &str) {
        self.requests.borrow_mut().push(target_id.to_owned());
    }
}

fn entries() -> DockEntries {
    DockEntries::new(
        vec![
            NavItem::link("Home", "#hero", Icon::Home),
            NavItem::link("Experience", "#experience", Icon::Briefcase),
            NavItem::link("Stack", "#stack", Icon::Layers),
        ],
        Vec::new(),
    )
    .unwrap()
}

#[test]
fn documented_scroll_scenario() {
    let page = Page::scenario();
    let window = EventTarget::new();
    let dock = Dock::new(entries(), DockConfig::default(), Rc::clone(&page))
        .unwrap()
        .mount(&window);

    for (scroll_y, expected) in [(50.0, "hero"), (500.0, "experience"), (1300.0, "stack")] {
        page.scroll_y.set(scroll_y);
        window.dispatch(&Event::Scroll);
        assert_eq!(dock.active_section().get(), expected, "scroll_y = {scroll_y}");
    }
}

#[test]
fn click_then_scroll_settles_highlight() {
    let page = Page::scenario();
    let window = EventTarget::new();
    let dock = Dock::new(entries(), DockConfig::default(), Rc::clone(&page))
        .unwrap()
        .mount(&window);

    let verdict = window.dispatch(&Event::Activate {
        target: "stack".into(),
    });
    assert!(verdict.is_prevented());
    assert_eq!(*page.requests.borrow(), vec!["stack".to_owned()]);
    assert_eq!(dock.active_section().get(), "hero");

    // The host's smooth scroll arrives as a series of scroll events.
    for y in [200.0, 600.0, 1000.0, 1300.0] {
        page.scroll_y.set(y);
        window.dispatch(&Event::Scroll);
    }
    assert_eq!(dock.active_section().get(), "stack");
    assert!(dock.frame().icon("stack").unwrap().active);
    assert_eq!(page.requests.borrow().len(), 1);
}

#[test]
fn sweep_and_leave() {
    let page = Page::scenario();
    let window = EventTarget::new();
    let dock = Dock::new(entries(), DockConfig::default(), Rc::clone(&page))
        .unwrap()
        .mount(&window);

    for x in (480..680).step_by(4) {
        window.dispatch(&Event::PointerMove {
            x: f64::from(x),
            y: 840.0,
        });
        dock.tick(Duration::from_millis(8));
    }
    assert!(dock.width("stack").unwrap() > 60.0);

    window.dispatch(&Event::PointerLeave);
    for _ in 0..200 {
        dock.tick(Duration::from_millis(16));
    }
    for view in dock.frame().icons {
        assert!((view.width - 40.0).abs() < 1e-9);
    }
    assert!(!dock.frame().animating);
}
