#![forbid(unsafe_code)]

//! `folio-web` drives a folio dock from a host that pushes events and
//! advances time explicitly.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding page pushes pointer, scroll, resize
//!   and activation events; nothing here polls.
//! - **Deterministic time**: frame timestamps come from the host, so a
//!   recorded session replays identically.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! [`WebHost`] is an in-memory page (sections, icon boxes, scroll offset)
//! implementing every dock host capability. [`DockSession`] owns the host,
//! the mounted dock and the event queue and turns each host frame into a
//! [`DockFrame`](folio_dock::DockFrame).

mod host;
#[cfg(feature = "input-parser")]
pub mod input_parser;
mod session;
pub mod smooth_scroll;

use core::time::Duration;
use std::collections::VecDeque;

use folio_core::event::Event;
use folio_dock::{DockError, DockFrame};

pub use host::WebHost;
pub use session::DockSession;
pub use smooth_scroll::ScrollAnimator;

/// Web adapter error type.
#[derive(Debug, Clone, PartialEq)]
pub enum WebBackendError {
    /// The dock could not be built.
    Dock(DockError),
}

impl core::fmt::Display for WebBackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dock(err) => write!(f, "dock setup failed: {err}"),
        }
    }
}

impl std::error::Error for WebBackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dock(err) => Some(err),
        }
    }
}

impl From<DockError> for WebBackendError {
    fn from(err: DockError) -> Self {
        Self::Dock(err)
    }
}

/// Frame timestamps fed by the host instead of read from the system.
///
/// Browsers hand `requestAnimationFrame` callbacks a millisecond timestamp;
/// [`DeterministicClock::set_ms`] takes that value as is. Time never runs
/// backwards: an earlier timestamp is ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicClock {
    elapsed: Duration,
}

impl DeterministicClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
        }
    }

    pub fn set(&mut self, now: Duration) {
        self.elapsed = self.elapsed.max(now);
    }

    /// Take a `performance.now()`-style timestamp. Negative, NaN and
    /// out-of-range values are ignored.
    pub fn set_ms(&mut self, ms: f64) {
        if let Ok(now) = Duration::try_from_secs_f64(ms / 1000.0) {
            self.set(now);
        }
    }

    /// Step forward by `dt`, saturating, and return the new time.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed
    }

    #[must_use]
    pub const fn now(&self) -> Duration {
        self.elapsed
    }
}

/// Host-driven event queue.
#[derive(Debug, Default, Clone)]
pub struct WebEventSource {
    queue: VecDeque<Event>,
}

impl WebEventSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a canonical event into the queue.
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Drain all pending events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// One activation and what the dock decided about the host default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRecord {
    pub target: String,
    /// `true` when the dock took over (smooth scroll instead of anchor jump).
    pub prevented: bool,
}

/// Captured outputs for host consumption.
#[derive(Debug, Default, Clone)]
pub struct WebOutputs {
    /// Last frame produced by [`DockSession::step`].
    pub last_frame: Option<DockFrame>,
    /// Number of frames produced.
    pub frames: u64,
    /// Activations in dispatch order.
    pub activations: Vec<ActivationRecord>,
    /// Scroll events synthesized by the smooth-scroll animator.
    pub animated_scroll_events: u64,
}
