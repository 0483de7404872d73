#![forbid(unsafe_code)]

//! Mass-spring-damper chasing a movable target.
//!
//! Each step solves `m·a = -k·(x - target) - c·v` with semi-implicit Euler:
//! velocity is updated from the force first, then position from the new
//! velocity. Frame deltas are split into sub-steps of at most 4 ms, so a
//! long stall costs extra steps instead of blowing up a stiff spring.
//!
//! A spring is *at rest* once both its distance to the target and its speed
//! drop under their thresholds; at that point it snaps exactly onto the
//! target and ignores ticks until the target moves, an impulse lands, or it
//! is reset.
//!
//! With damping ratio `ζ = c / (2·√(k·m))` below 1 the value overshoots and
//! rings; at or above 1 it approaches monotonically (up to integration
//! error). A spring without damping never comes to rest.

use std::time::Duration;

use super::Animation;

/// Longest single integration step, in seconds.
const MAX_STEP_SECS: f64 = 0.004;

const DEFAULT_REST_THRESHOLD: f64 = 0.001;
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;

const MIN_STIFFNESS: f64 = 0.1;
const MIN_MASS: f64 = 0.001;

/// A damped spring whose position follows [`Spring::target`].
///
/// ```
/// use std::time::Duration;
/// use folio_core::animation::{Animation, Spring};
///
/// let mut width = Spring::at(40.0)
///     .with_mass(0.1)
///     .with_stiffness(150.0)
///     .with_damping(12.0);
/// width.set_target(80.0);
///
/// for _ in 0..180 {
///     width.tick(Duration::from_millis(16));
/// }
/// assert!(width.is_complete());
/// assert_eq!(width.position(), 80.0);
/// ```
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    mass: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring at `initial`, heading for `target`, with mass 1, stiffness
    /// 170 and damping 26.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            mass: 1.0,
            stiffness: 170.0,
            damping: 26.0,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: false,
        }
    }

    /// Spring already resting at `value`. It stays put until retargeted.
    #[must_use]
    pub fn at(value: f64) -> Self {
        Self {
            at_rest: true,
            ..Self::new(value, value)
        }
    }

    #[must_use]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass.max(MIN_MASS);
        self
    }

    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness.max(MIN_STIFFNESS);
        self
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.max(0.0);
        self
    }

    /// Distance to the target under which the spring may come to rest.
    /// Retargets smaller than this are ignored.
    #[must_use]
    pub fn with_rest_threshold(mut self, threshold: f64) -> Self {
        self.rest_threshold = threshold.abs();
        self
    }

    /// Speed under which the spring may come to rest.
    #[must_use]
    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold.abs();
        self
    }

    /// Raw position; may pass the target on an underdamped spring.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Move the target. NaN and infinities are ignored, as are moves within
    /// the rest threshold.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() && (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Add `velocity_delta` to the current velocity.
    pub fn impulse(&mut self, velocity_delta: f64) {
        self.velocity += velocity_delta;
        self.at_rest = false;
    }

    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Damping coefficient that makes this spring critically damped.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// `ζ`; below 1 the spring overshoots.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    /// Integrate over `dt`, then settle if inside the rest window.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force =
                -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if (self.position - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn value(&self) -> f64 {
        self.position
    }

    /// Back to the starting position with no velocity. The target is kept.
    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
    }
}

/// Tunings used by the dock.
pub mod presets {
    use super::Spring;

    /// Icon width: mass 0.1, stiffness 150, damping 12 (ζ ≈ 1.55). Settles
    /// within a hundredth of a pixel.
    #[must_use]
    pub fn magnification(initial: f64) -> Spring {
        Spring::at(initial)
            .with_mass(0.1)
            .with_stiffness(150.0)
            .with_damping(12.0)
            .with_rest_threshold(0.01)
            .with_velocity_threshold(0.05)
    }

    /// Page scroll: unit mass, stiffness 120, critically damped. Settles
    /// within half a pixel.
    #[must_use]
    pub fn smooth_scroll(initial: f64) -> Spring {
        let stiffness: f64 = 120.0;
        Spring::at(initial)
            .with_stiffness(stiffness)
            .with_damping(2.0 * stiffness.sqrt())
            .with_rest_threshold(0.5)
            .with_velocity_threshold(1.0)
    }
}
