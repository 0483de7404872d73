#![forbid(unsafe_code)]

//! Dock construction and activation errors.

use folio_core::animation::InterpolatorError;

/// Errors from building or driving a [`Dock`](crate::Dock).
#[derive(Debug, Clone, PartialEq)]
pub enum DockError {
    /// The entry list has no navigation items.
    NoNavItems,
    /// Two entries share an id.
    DuplicateEntry(String),
    /// An activation named an entry the dock does not have.
    UnknownEntry(String),
    /// The magnification profile breakpoints are invalid.
    InvalidProfile(InterpolatorError),
    /// Configuration failed validation.
    InvalidConfig(Vec<String>),
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoNavItems => write!(f, "dock needs at least one navigation item"),
            Self::DuplicateEntry(id) => write!(f, "duplicate dock entry id: {id}"),
            Self::UnknownEntry(id) => write!(f, "unknown dock entry: {id}"),
            Self::InvalidProfile(e) => write!(f, "invalid magnification profile: {e}"),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid dock config: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for DockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidProfile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InterpolatorError> for DockError {
    fn from(e: InterpolatorError) -> Self {
        Self::InvalidProfile(e)
    }
}
