#![forbid(unsafe_code)]

//! Scroll-synchronized magnifying navigation dock.
//!
//! # Role in folio
//! `folio-dock` is the widget layer. A [`Dock`] is built from a static list
//! of entries and a host that answers layout, geometry, and smooth-scroll
//! requests. Once mounted on an [`EventTarget`](folio_runtime::EventTarget)
//! it:
//!
//! - tracks which page section is in view ([`section_tracker`]) and
//!   highlights the matching icon;
//! - follows the pointer across the dock ([`proximity`]) and magnifies icons
//!   near it through per-icon springs ([`magnify`]);
//! - turns icon clicks into smooth-scroll requests.
//!
//! Hosts paint from [`DockFrame`] snapshots and step springs with
//! [`Dock::tick`] once per animation frame.

pub mod config;
pub mod dock;
pub mod error;
pub mod host;
pub mod magnify;
pub mod nav;
pub mod proximity;
pub mod render;
pub mod section_tracker;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::{DockConfig, DockConfigError};
pub use dock::{Dock, MountedDock};
pub use error::DockError;
pub use host::{DockHost, GeometryHost, LayoutHost, SmoothScroll};
pub use nav::{ActionKind, DockAction, DockEntries, DockEntry, EntryKind, HOME_SECTION_ID, Icon, NavItem};
pub use render::{Appearance, DockFrame, IconView};
