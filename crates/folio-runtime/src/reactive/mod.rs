#![forbid(unsafe_code)]

//! Reactive primitives.
//!
//! - [`Observable`]: version-tracked shared value, notifies on change.
//! - [`ReadSignal`]: read/subscribe-only handle to an observable.
//! - [`Derived`]: value computed from a source observable.

mod derived;
pub mod observable;

pub use derived::Derived;
pub use observable::{Observable, ReadSignal, Subscription};
