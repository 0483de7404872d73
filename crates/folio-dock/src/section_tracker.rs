#![forbid(unsafe_code)]

//! Scroll position → active section.
//!
//! # Heuristic
//!
//! 1. `threshold = scroll_y + viewport_height / threshold_divisor`
//!    (a third by default): a section activates once its top crosses the
//!    upper third of the viewport, long before it is fully in view.
//! 2. `scroll_y < near_top_px` forces the home section.
//! 3. Otherwise sections are scanned last to first; the first whose
//!    half-open extent `[top, top + height)` contains the threshold wins.
//!    Scanning backwards hands boundary ties to the later section.
//! 4. No match (a gap between sections) leaves the active id unchanged.
//!
//! Sections the layout host cannot find are skipped.

use folio_runtime::{Observable, ReadSignal};
use tracing::{debug, trace};

use crate::config::TrackerConfig;
use crate::host::LayoutHost;

/// Outcome of one tracker evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Near the top of the page; the home section is forced.
    NearTop,
    /// This section contains the activation line.
    Section(&'a str),
    /// Nothing matched; keep the previous section.
    NoMatch,
}

/// Evaluate the heuristic against live layout without touching any state.
pub fn resolve_active_section<'a, L: LayoutHost + ?Sized>(
    sections: &'a [String],
    layout: &L,
    config: &TrackerConfig,
) -> Resolution<'a> {
    let scroll_y = layout.scroll_y();
    if scroll_y < config.near_top_px {
        return Resolution::NearTop;
    }

    let threshold = scroll_y + layout.viewport_height() / config.threshold_divisor;
    sections
        .iter()
        .rev()
        .find(|id| {
            layout
                .section_bounds(id)
                .is_some_and(|bounds| bounds.contains(threshold))
        })
        .map_or(Resolution::NoMatch, |id| Resolution::Section(id.as_str()))
}

/// Owns the active section id.
///
/// Only the tracker writes the id; readers get a [`ReadSignal`]. The id
/// starts as the home section, so exactly one section is active from
/// construction on.
#[derive(Debug)]
pub struct SectionTracker {
    sections: Vec<String>,
    config: TrackerConfig,
    active: Observable<String>,
}

impl SectionTracker {
    #[must_use]
    pub fn new(sections: Vec<String>, config: TrackerConfig) -> Self {
        let active = Observable::new(config.home_id.clone());
        Self {
            sections,
            config,
            active,
        }
    }

    /// Read-only handle to the active section id.
    #[must_use]
    pub fn active(&self) -> ReadSignal<String> {
        self.active.read_only()
    }

    #[must_use]
    pub fn active_id(&self) -> String {
        self.active.get()
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Re-evaluate against live layout. Returns `true` if the active id
    /// changed.
    pub fn update<L: LayoutHost + ?Sized>(&self, layout: &L) -> bool {
        let next = match resolve_active_section(&self.sections, layout, &self.config) {
            Resolution::NearTop => self.config.home_id.as_str(),
            Resolution::Section(id) => id,
            Resolution::NoMatch => {
                trace!(scroll_y = layout.scroll_y(), "no section under activation line");
                return false;
            }
        };

        if self.active.with(|current| current == next) {
            return false;
        }
        let previous = self.active.get();
        debug!(from = %previous, to = next, scroll_y = layout.scroll_y(), "active section changed");
        self.active.set(next.to_owned());
        true
    }
}
