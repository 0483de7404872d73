#![forbid(unsafe_code)]

//! folio runtime
//!
//! Single-threaded building blocks the dock is wired from.
//!
//! # Key Components
//!
//! - [`Observable`] - shared value with change notification
//! - [`ReadSignal`] - read-only view of an observable owned elsewhere
//! - [`Derived`] - observable computed from another, kept in sync by subscription
//! - [`EventTarget`] - per-kind listener registry; listeners detach when their
//!   [`ListenerGuard`] drops
//! - [`FrameClock`] - host frame timestamps to capped animation deltas
//!
//! # Role in folio
//! Everything here runs on the UI thread. Shared state is `Rc<RefCell<..>>`,
//! so none of these types are `Send`; handlers run to completion without
//! locking.

pub mod frame;
pub mod listener;
pub mod reactive;

pub use frame::FrameClock;
pub use listener::{EventTarget, ListenerGuard};
pub use reactive::{Derived, Observable, ReadSignal, Subscription};
