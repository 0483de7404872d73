#![forbid(unsafe_code)]

//! Core: geometry, host events, and animation primitives.
//!
//! # Role in folio
//! `folio-core` is the host-neutral base layer. It owns the rectangle and
//! section-extent types that hosts report, the canonical [`event::Event`]
//! values a host pushes into the dock, and the numeric building blocks the
//! magnifying dock animates with: the damped [`animation::Spring`] and the
//! piecewise-linear [`animation::Interpolator`].
//!
//! # How it fits in the system
//! `folio-runtime` adds reactive values and scoped listeners on top of these
//! types, `folio-dock` composes them into the dock widget, and `folio-web`
//! drives the dock from a host event queue.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
