#![forbid(unsafe_code)]

//! Animation primitives.
//!
//! - [`Spring`]: damped harmonic oscillator that chases a movable target.
//! - [`Interpolator`]: clamped piecewise-linear mapping between breakpoints.
//!
//! Animations are stepped explicitly by the host's frame scheduler through
//! [`Animation::tick`]; nothing here owns a timer.

mod interpolate;
pub mod spring;

use std::time::Duration;

pub use interpolate::{Interpolator, InterpolatorError};
pub use spring::Spring;

/// A value animated over time by explicit ticks.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has settled.
    fn is_complete(&self) -> bool;

    /// Current animated value.
    fn value(&self) -> f64;

    /// Return to the initial state.
    fn reset(&mut self);
}
