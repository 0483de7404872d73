#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.

/// An axis-aligned box in viewport coordinates, as reported by the host's
/// bounding-box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// A box that has not been laid out yet: zero or negative width, or any
    /// non-finite component.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
            || self.width <= 0.0
    }

    /// Check if a horizontal coordinate falls within `[x, right)`.
    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x && x < self.right()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && y >= self.y && y < self.bottom()
    }
}

/// Vertical extent of a page section in document coordinates.
///
/// Mirrors the `offsetTop` / `offsetHeight` pair a browser reports for a
/// section element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    /// Document offset of the section's top edge.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

impl SectionBounds {
    /// Create a new extent.
    #[inline]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center() {
        let r = Rect::new(100.0, 0.0, 40.0, 40.0);
        assert!((r.center_x() - 120.0).abs() < f64::EPSILON);
        assert!((r.right() - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_degenerate() {
        assert!(Rect::default().is_degenerate());
        assert!(Rect::new(0.0, 0.0, -1.0, 10.0).is_degenerate());
        assert!(Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, f64::INFINITY, 10.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 40.0, 0.0).is_degenerate());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(15.0, 30.0));
        assert!(r.contains_x(10.0));
        assert!(!r.contains_x(9.99));
    }

    #[test]
    fn section_contains_is_half_open() {
        let s = SectionBounds::new(800.0, 800.0);
        assert!(s.contains(800.0));
        assert!(s.contains(1599.999));
        assert!(!s.contains(1600.0));
        assert!(!s.contains(799.0));
    }

    #[test]
    fn empty_section_contains_nothing() {
        let s = SectionBounds::new(500.0, 0.0);
        assert!(!s.contains(500.0));
    }
}
