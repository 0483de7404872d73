#![forbid(unsafe_code)]

//! The dock: entries, tracker, pointer, and per-icon magnifiers wired
//! together.
//!
//! Two pipelines run side by side:
//!
//! ```text
//! Scroll/Resize ─▶ SectionTracker ─▶ active id ─────────────┐
//!                                                           ├─▶ DockFrame
//! PointerMove ─▶ PointerTracker ─▶ distance ─▶ spring ─▶ width ┘
//! ```
//!
//! They share nothing until [`Dock::frame`] reads both.

use std::rc::Rc;
use std::time::Duration;

use folio_core::event::{DefaultAction, Event, EventKind};
use folio_runtime::{EventTarget, ListenerGuard, ReadSignal};
use tracing::{debug, trace, warn};

use crate::config::DockConfig;
use crate::error::DockError;
use crate::host::DockHost;
use crate::magnify::{IconMagnifier, MagnificationProfile};
use crate::nav::{DockEntries, DockEntry};
use crate::proximity::{IconProximity, PointerTracker};
use crate::render::{DockFrame, IconView};
use crate::section_tracker::SectionTracker;

/// Listener kinds a mounted dock registers, one listener each.
const MOUNTED_KINDS: [EventKind; 5] = [
    EventKind::Scroll,
    EventKind::Resize,
    EventKind::PointerMove,
    EventKind::PointerLeave,
    EventKind::Activate,
];

struct DockIcon {
    entry: DockEntry,
    proximity: IconProximity,
    magnifier: IconMagnifier,
}

/// A floating navigation dock.
///
/// Built from a static entry list; discovers sections and icon geometry
/// through its host. Use [`Dock::mount`] to attach it to an event target.
pub struct Dock<H: DockHost + 'static> {
    host: Rc<H>,
    entries: DockEntries,
    config: DockConfig,
    tracker: SectionTracker,
    pointer: PointerTracker,
    icons: Vec<DockIcon>,
}

impl<H: DockHost + 'static> std::fmt::Debug for Dock<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dock")
            .field("entries", &self.entries.len())
            .field("active", &self.tracker.active_id())
            .field("pointer_x", &self.pointer.x())
            .finish_non_exhaustive()
    }
}

impl<H: DockHost + 'static> Dock<H> {
    /// Build a dock. Fails on an invalid config, or when no nav item leads
    /// to the configured home section.
    pub fn new(entries: DockEntries, config: DockConfig, host: Rc<H>) -> Result<Self, DockError> {
        let mut errors = config.validate();
        let home_id = config.tracker.home_id.as_str();
        if !home_id.is_empty() && !entries.section_ids().iter().any(|id| id == home_id) {
            errors.push(format!(
                "tracker.home_id {home_id:?} matches no nav item section"
            ));
        }
        if !errors.is_empty() {
            return Err(DockError::InvalidConfig(errors));
        }

        let tracker = SectionTracker::new(entries.section_ids(), config.tracker.clone());
        let pointer = PointerTracker::new();
        let icons = entries
            .iter()
            .map(|entry| {
                let profile = MagnificationProfile::for_kind(entry.kind(), &config.magnification)?;
                let proximity = pointer.track(entry.id(), Rc::clone(&host));
                let magnifier =
                    IconMagnifier::new(proximity.distance_signal(), profile, &config.spring);
                Ok(DockIcon {
                    entry,
                    proximity,
                    magnifier,
                })
            })
            .collect::<Result<Vec<_>, DockError>>()?;

        Ok(Self {
            host,
            entries,
            config,
            tracker,
            pointer,
            icons,
        })
    }

    /// The portfolio dock with default tuning.
    pub fn portfolio(host: Rc<H>) -> Result<Self, DockError> {
        Self::new(DockEntries::portfolio(), DockConfig::default(), host)
    }

    /// Attach to `target`: one listener per event kind, then an initial
    /// section check. Dropping the returned handle detaches everything.
    #[must_use]
    pub fn mount(self, target: &EventTarget) -> MountedDock<H> {
        let dock = Rc::new(self);
        let listeners = MOUNTED_KINDS
            .into_iter()
            .map(|kind| {
                let dock = Rc::clone(&dock);
                target.add_listener(kind, move |event| dock.handle_event(event))
            })
            .collect();
        dock.sync_active_section();
        debug!(
            entries = dock.entries.len(),
            active = %dock.tracker.active_id(),
            "dock mounted"
        );
        MountedDock { dock, listeners }
    }

    /// Route one host event. Never fails; bad activations are logged and
    /// left to the host.
    pub fn handle_event(&self, event: &Event) -> DefaultAction {
        trace!(kind = event.kind().as_str(), "dock event");
        match event {
            Event::Scroll => {
                self.sync_active_section();
                DefaultAction::Allow
            }
            Event::Resize { .. } => {
                self.sync_active_section();
                for icon in &self.icons {
                    icon.proximity.recompute();
                }
                DefaultAction::Allow
            }
            Event::PointerMove { x, .. } => {
                self.pointer.move_to(*x);
                DefaultAction::Allow
            }
            Event::PointerLeave => {
                self.pointer.leave();
                DefaultAction::Allow
            }
            Event::Activate { target } => self.activate(target).unwrap_or_else(|err| {
                warn!(%err, "ignoring activation");
                DefaultAction::Allow
            }),
        }
    }

    /// Re-run the section tracker against live layout.
    pub fn sync_active_section(&self) -> bool {
        self.tracker.update(self.host.as_ref())
    }

    /// Activate the entry `id`.
    ///
    /// A nav item asks the host to smooth-scroll to its section and prevents
    /// the default anchor jump. The active section is *not* changed here; it
    /// follows once the scroll produces scroll events. Actions are left to
    /// the host.
    pub fn activate(&self, id: &str) -> Result<DefaultAction, DockError> {
        let icon = self
            .icons
            .iter()
            .find(|icon| icon.entry.id() == id)
            .ok_or_else(|| DockError::UnknownEntry(id.to_owned()))?;

        match &icon.entry {
            DockEntry::Nav(item) => {
                debug!(section = item.section_id(), "smooth scroll requested");
                self.host.scroll_to(item.section_id());
                Ok(DefaultAction::Prevent)
            }
            DockEntry::Action(action) => {
                debug!(action = action.id(), "dock action delegated to host");
                Ok(DefaultAction::Allow)
            }
        }
    }

    /// Step every icon spring by `dt`. Returns `true` while any spring is
    /// still moving.
    pub fn tick(&self, dt: Duration) -> bool {
        let mut animating = false;
        for icon in &self.icons {
            icon.magnifier.tick(dt);
            animating |= !icon.magnifier.is_settled();
        }
        animating
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn frame(&self) -> DockFrame {
        let active_section = self.tracker.active_id();
        let home_id = self.config.tracker.home_id.as_str();

        let icons = self
            .icons
            .iter()
            .map(|icon| {
                let active = match &icon.entry {
                    DockEntry::Nav(item) => item.is_active_for(&active_section, home_id),
                    DockEntry::Action(_) => false,
                };
                let hovered = icon.proximity.is_hovered();
                IconView {
                    id: icon.entry.id().to_owned(),
                    label: icon.entry.label().to_owned(),
                    icon: icon.entry.icon(),
                    kind: icon.entry.kind(),
                    width: icon.magnifier.width(),
                    active,
                    appearance: IconView::appearance_for(active, hovered),
                    indicator: active,
                    tooltip_visible: hovered,
                }
            })
            .collect();

        DockFrame {
            icons,
            separator_after: (!self.entries.actions().is_empty())
                .then_some(self.entries.nav().len()),
            active_section,
            animating: self.icons.iter().any(|i| !i.magnifier.is_settled()),
        }
    }

    /// Read-only handle to the active section id.
    #[must_use]
    pub fn active_section(&self) -> ReadSignal<String> {
        self.tracker.active()
    }

    /// Current pointer x (infinite while outside the dock).
    #[must_use]
    pub fn pointer_x(&self) -> f64 {
        self.pointer.x()
    }

    /// Current distance signal value for entry `id`.
    #[must_use]
    pub fn distance(&self, id: &str) -> Option<f64> {
        self.icon(id).map(|icon| icon.proximity.distance())
    }

    /// Current smoothed width for entry `id`.
    #[must_use]
    pub fn width(&self, id: &str) -> Option<f64> {
        self.icon(id).map(|icon| icon.magnifier.width())
    }

    #[must_use]
    pub fn entries(&self) -> &DockEntries {
        &self.entries
    }

    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    fn icon(&self, id: &str) -> Option<&DockIcon> {
        self.icons.iter().find(|icon| icon.entry.id() == id)
    }
}

/// A dock attached to an event target.
///
/// Dereferences to the [`Dock`]. Dropping it detaches every listener, also
/// when the drop happens during unwinding.
pub struct MountedDock<H: DockHost + 'static> {
    dock: Rc<Dock<H>>,
    listeners: Vec<ListenerGuard>,
}

impl<H: DockHost + 'static> MountedDock<H> {
    /// Number of listeners held.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<H: DockHost + 'static> std::ops::Deref for MountedDock<H> {
    type Target = Dock<H>;

    fn deref(&self) -> &Self::Target {
        &self.dock
    }
}

impl<H: DockHost + 'static> std::fmt::Debug for MountedDock<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedDock")
            .field("dock", &self.dock)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<H: DockHost + 'static> Drop for MountedDock<H> {
    fn drop(&mut self) {
        debug!(listeners = self.listeners.len(), "dock unmounted");
    }
}
