#![forbid(unsafe_code)]

//! Pointer position → signed distance per icon.
//!
//! The dock keeps one [`PointerTracker`]. Each icon derives its own distance
//! from it; the derivation reads the icon's box from the geometry host on
//! every pointer change, since icon widths (and so their centers) shift as
//! neighbours magnify.

use std::rc::Rc;

use folio_core::geometry::Rect;
use folio_runtime::{Derived, Observable, ReadSignal};

use crate::host::GeometryHost;

/// Pointer x while the pointer is outside the dock. Every distance computed
/// from it is infinite, so every icon relaxes to its minimum width.
pub const FAR_AWAY: f64 = f64::INFINITY;

/// Signed horizontal distance from an icon's center to the pointer.
///
/// Missing or degenerate geometry, and a non-finite pointer, yield
/// [`FAR_AWAY`].
#[must_use]
pub fn signed_distance(pointer_x: f64, bounds: Option<Rect>) -> f64 {
    match bounds {
        Some(rect) if pointer_x.is_finite() && !rect.is_degenerate() => pointer_x - rect.center_x(),
        _ => FAR_AWAY,
    }
}

/// The dock's pointer x.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    x: Observable<f64>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            x: Observable::new(FAR_AWAY),
        }
    }

    /// Pointer moved to viewport x. NaN counts as leaving.
    pub fn move_to(&self, x: f64) {
        self.x.set(if x.is_nan() { FAR_AWAY } else { x });
    }

    /// Pointer left the dock.
    pub fn leave(&self) {
        self.x.set(FAR_AWAY);
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x.get()
    }

    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.x.get().is_finite()
    }

    #[must_use]
    pub fn signal(&self) -> ReadSignal<f64> {
        self.x.read_only()
    }

    /// Distance and hover signals for the element `element_id`.
    pub fn track<G: GeometryHost + ?Sized + 'static>(
        &self,
        element_id: &str,
        geometry: Rc<G>,
    ) -> IconProximity {
        let id = element_id.to_owned();
        let geo = Rc::clone(&geometry);
        let distance = self
            .x
            .map(move |x| signed_distance(*x, geo.bounding_box(&id)));

        let id = element_id.to_owned();
        let hovered = self.x.map(move |x| {
            geometry
                .bounding_box(&id)
                .is_some_and(|rect| !rect.is_degenerate() && rect.contains_x(*x))
        });

        IconProximity { distance, hovered }
    }
}

/// Per-icon proximity signals.
#[derive(Debug)]
pub struct IconProximity {
    distance: Derived<f64>,
    hovered: Derived<bool>,
}

impl IconProximity {
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance.get()
    }

    /// The derived distance, for subscribing the magnifier.
    #[must_use]
    pub fn distance_signal(&self) -> &Derived<f64> {
        &self.distance
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    /// Re-read geometry without a pointer change (after a resize).
    pub fn recompute(&self) {
        self.distance.recompute();
        self.hovered.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePage;

    fn page() -> Rc<FakePage> {
        Rc::new(FakePage::new(900.0).with_row(&["a", "b"], 100.0, 40.0, 16.0))
    }

    #[test]
    fn distance_is_signed() {
        let rect = Some(Rect::new(100.0, 0.0, 40.0, 40.0));
        assert!((signed_distance(120.0, rect) - 0.0).abs() < f64::EPSILON);
        assert!((signed_distance(100.0, rect) + 20.0).abs() < f64::EPSILON);
        assert!((signed_distance(170.0, rect) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_geometry_is_far() {
        assert_eq!(signed_distance(10.0, None), FAR_AWAY);
        assert_eq!(signed_distance(10.0, Some(Rect::default())), FAR_AWAY);
        assert_eq!(
            signed_distance(FAR_AWAY, Some(Rect::new(0.0, 0.0, 40.0, 40.0))),
            FAR_AWAY
        );
    }

    #[test]
    fn starts_outside() {
        let pointer = PointerTracker::new();
        assert!(!pointer.is_inside());
        assert_eq!(pointer.x(), FAR_AWAY);
    }

    #[test]
    fn nan_counts_as_leave() {
        let pointer = PointerTracker::new();
        pointer.move_to(50.0);
        pointer.move_to(f64::NAN);
        assert!(!pointer.is_inside());
    }

    #[test]
    fn each_icon_tracks_its_own_center() {
        let page = page();
        let pointer = PointerTracker::new();
        let a = pointer.track("a", Rc::clone(&page));
        let b = pointer.track("b", Rc::clone(&page));

        // a center 120, b center 176.
        pointer.move_to(130.0);
        assert!((a.distance() - 10.0).abs() < f64::EPSILON);
        assert!((b.distance() + 46.0).abs() < f64::EPSILON);
        assert!(a.is_hovered());
        assert!(!b.is_hovered());

        pointer.leave();
        assert_eq!(a.distance(), FAR_AWAY);
        assert_eq!(b.distance(), FAR_AWAY);
        assert!(!a.is_hovered());
    }

    #[test]
    fn geometry_read_live_on_each_move() {
        let page = page();
        let pointer = PointerTracker::new();
        let a = pointer.track("a", Rc::clone(&page));
        pointer.move_to(120.0);
        assert!(a.distance().abs() < f64::EPSILON);

        page.set_box("a", Rect::new(200.0, 800.0, 40.0, 40.0));
        pointer.move_to(121.0);
        assert!((a.distance() + 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recompute_after_layout_shift() {
        let page = page();
        let pointer = PointerTracker::new();
        let a = pointer.track("a", Rc::clone(&page));
        pointer.move_to(120.0);
        page.set_box("a", Rect::new(0.0, 800.0, 40.0, 40.0));
        assert!(a.distance().abs() < f64::EPSILON);
        a.recompute();
        assert!((a.distance() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_element_is_far() {
        let page = page();
        let pointer = PointerTracker::new();
        let ghost = pointer.track("ghost", Rc::clone(&page));
        pointer.move_to(120.0);
        assert_eq!(ghost.distance(), FAR_AWAY);
        assert!(!ghost.is_hovered());
    }
}
