#![forbid(unsafe_code)]

//! Spring-driven page scrolling for hosts without native smooth scroll.
//!
//! The animator owns nothing but a scroll position. Each frame the session
//! asks it for the next offset, writes that into the page, and emits a
//! scroll event, exactly as a browser's smooth scroll would.

use std::time::Duration;

use folio_core::animation::Animation;
use folio_core::animation::spring::{Spring, presets};

/// Animated vertical scroll offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    spring: Spring,
    active: bool,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spring: presets::smooth_scroll(0.0),
            active: false,
        }
    }

    /// Begin (or redirect) a scroll from `from` to `to`.
    ///
    /// Redirecting mid-flight keeps the current velocity.
    pub fn start(&mut self, from: f64, to: f64) {
        if !self.active {
            self.spring = presets::smooth_scroll(from);
        }
        self.spring.set_target(to);
        self.active =
            self.spring.position() != self.spring.target() || self.spring.velocity() != 0.0;
    }

    /// Stop immediately, e.g. because the user scrolled by hand.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advance by `dt`. Returns the new offset while scrolling, `None` once
    /// idle.
    pub fn tick(&mut self, dt: Duration) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.spring.tick(dt);
        if self.spring.is_complete() {
            self.active = false;
        }
        Some(self.spring.position())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.spring.target()
    }
}
