#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the dock, its host capability traits and the runtime pieces an
//! embedder touches, plus a prelude for day-to-day use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::event::{DefaultAction, Event, EventKind};
pub use folio_core::geometry::{Rect, SectionBounds};
pub use folio_core::logging::{LOG_ENV_VAR, LoggingError};
#[cfg(feature = "tracing-json")]
pub use folio_core::logging::init_json_logging;

// --- Runtime re-exports ----------------------------------------------------

pub use folio_runtime::{EventTarget, FrameClock, ReadSignal};

// --- Dock re-exports -------------------------------------------------------

pub use folio_dock::{
    Appearance, Dock, DockConfig, DockConfigError, DockEntries, DockError, DockFrame, DockHost,
    GeometryHost, IconView, LayoutHost, MountedDock, NavItem, SmoothScroll,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use folio_web::{DeterministicClock, DockSession, WebBackendError, WebHost};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio embedders.
#[derive(Debug)]
pub enum Error {
    /// Invalid dock definition.
    Dock(DockError),
    /// Configuration could not be loaded.
    Config(DockConfigError),
    /// Web session setup failed.
    #[cfg(feature = "web")]
    Web(WebBackendError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dock(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Web(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dock(err) => Some(err),
            Self::Config(err) => Some(err),
            #[cfg(feature = "web")]
            Self::Web(err) => Some(err),
        }
    }
}

impl From<DockError> for Error {
    fn from(err: DockError) -> Self {
        Self::Dock(err)
    }
}

impl From<DockConfigError> for Error {
    fn from(err: DockConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "web")]
impl From<WebBackendError> for Error {
    fn from(err: WebBackendError) -> Self {
        Self::Web(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Common imports.
pub mod prelude {
    pub use crate::{
        DefaultAction, Dock, DockConfig, DockEntries, DockFrame, DockHost, Error, Event, Rect,
        Result, SectionBounds,
    };

    #[cfg(feature = "web")]
    pub use crate::{DockSession, WebHost};

    pub use crate::{core, dock, runtime};
}

pub use folio_core as core;
pub use folio_dock as dock;
pub use folio_runtime as runtime;
#[cfg(feature = "web")]
pub use folio_web as web;
