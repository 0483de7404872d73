#![forbid(unsafe_code)]

//! Distance → smoothed icon width.
//!
//! A [`MagnificationProfile`] maps distance to a target width through a
//! clamped piecewise-linear peak:
//!
//! ```text
//! width
//!  max ┤        /\
//!      │       /  \
//!  min ┼──────/    \──────
//!      └────-reach 0 +reach──── distance
//! ```
//!
//! The target is never applied directly. Each icon owns an
//! [`IconMagnifier`], whose spring chases the target so rapid pointer
//! movement produces smooth width changes.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::animation::spring::{Spring, presets};
use folio_core::animation::{Animation, Interpolator};
use folio_runtime::{Derived, Subscription};

use crate::config::{MagnificationConfig, SpringConfig};
use crate::error::DockError;
use crate::nav::EntryKind;

/// Distance → target width.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnificationProfile {
    curve: Interpolator,
    min_width: f64,
    max_width: f64,
}

impl MagnificationProfile {
    /// `[-reach, 0, reach] → [min, max, min]`.
    pub fn new(reach: f64, min_width: f64, max_width: f64) -> Result<Self, DockError> {
        Ok(Self {
            curve: Interpolator::peak(reach, min_width, max_width)?,
            min_width,
            max_width,
        })
    }

    /// Profile for an entry of `kind` under `config`.
    pub fn for_kind(kind: EntryKind, config: &MagnificationConfig) -> Result<Self, DockError> {
        let max = match kind {
            EntryKind::Primary => config.primary_max_width,
            EntryKind::Secondary => config.secondary_max_width,
        };
        Self::new(config.reach_px, config.min_width, max)
    }

    /// Target width at `distance`. Non-finite distances give the minimum.
    #[must_use]
    pub fn width_at(&self, distance: f64) -> f64 {
        if distance.is_finite() {
            self.curve.map(distance)
        } else {
            self.min_width
        }
    }

    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.max_width
    }
}

/// One icon's width spring, retargeted whenever its distance changes.
pub struct IconMagnifier {
    profile: MagnificationProfile,
    spring: Rc<RefCell<Spring>>,
    _retarget: Subscription,
}

impl std::fmt::Debug for IconMagnifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconMagnifier")
            .field("profile", &self.profile)
            .field("spring", &self.spring.borrow())
            .finish_non_exhaustive()
    }
}

impl IconMagnifier {
    /// Attach a spring to `distance`. The spring starts at rest on the
    /// width for the current distance.
    ///
    /// Built from [`presets::magnification`]; `config` overrides its
    /// physics and keeps its rest thresholds.
    #[must_use]
    pub fn new(distance: &Derived<f64>, profile: MagnificationProfile, config: &SpringConfig) -> Self {
        let start = profile.width_at(distance.get());
        let spring = Rc::new(RefCell::new(
            presets::magnification(start)
                .with_mass(config.mass)
                .with_stiffness(config.stiffness)
                .with_damping(config.damping),
        ));

        let target = Rc::clone(&spring);
        let curve = profile.clone();
        let retarget = distance.subscribe(move |d| {
            target.borrow_mut().set_target(curve.width_at(*d));
        });

        Self {
            profile,
            spring,
            _retarget: retarget,
        }
    }

    /// Advance the spring by one frame.
    pub fn tick(&self, dt: Duration) {
        self.spring.borrow_mut().tick(dt);
    }

    /// Current smoothed width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.spring.borrow().position()
    }

    /// Width the spring is heading to.
    #[must_use]
    pub fn target_width(&self) -> f64 {
        self.spring.borrow().target()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.spring.borrow().is_complete()
    }

    #[must_use]
    pub fn profile(&self) -> &MagnificationProfile {
        &self.profile
    }
}
