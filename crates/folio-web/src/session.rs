#![forbid(unsafe_code)]

//! Frame-stepped dock session.

use std::rc::Rc;
use std::time::Duration;

use folio_core::event::Event;
use folio_dock::{Dock, DockConfig, DockEntries, DockFrame, MountedDock};
use folio_runtime::{EventTarget, FrameClock};
use tracing::{debug, trace};

use crate::{ActivationRecord, WebBackendError, WebEventSource, WebHost, WebOutputs};

/// A mounted dock plus everything needed to drive it from host frames.
///
/// Events pushed between frames are queued. [`step`](Self::step) dispatches
/// them in order, advances any smooth scroll (emitting a scroll event per
/// moved frame), steps the icon springs and records the resulting frame.
#[derive(Debug)]
pub struct DockSession {
    target: EventTarget,
    host: Rc<WebHost>,
    dock: MountedDock<WebHost>,
    events: WebEventSource,
    clock: FrameClock,
    outputs: WebOutputs,
}

impl DockSession {
    pub fn new(
        host: WebHost,
        entries: DockEntries,
        config: DockConfig,
    ) -> Result<Self, WebBackendError> {
        let clock = FrameClock::new(config.frame.max_frame_dt());
        let host = Rc::new(host);
        let target = EventTarget::new();
        let dock = Dock::new(entries, config, Rc::clone(&host))?.mount(&target);
        Ok(Self {
            target,
            host,
            dock,
            events: WebEventSource::new(),
            clock,
            outputs: WebOutputs::default(),
        })
    }

    /// Session for the portfolio dock with default tuning.
    pub fn portfolio(host: WebHost) -> Result<Self, WebBackendError> {
        Self::new(host, DockEntries::portfolio(), DockConfig::default())
    }

    /// Queue an event for the next frame.
    ///
    /// A resize is also applied to the page right away so layout queries
    /// made while dispatching it see the new viewport.
    pub fn push_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            self.host.set_viewport(width, height);
        }
        self.events.push_event(event);
    }

    /// The user scrolled the page to `y`.
    pub fn user_scroll(&mut self, y: f64) {
        self.host.set_scroll(y);
        self.events.push_event(Event::Scroll);
    }

    /// Process one host animation frame at monotonic time `now`.
    pub fn step(&mut self, now: Duration) -> &DockFrame {
        let dt = self.clock.frame(now);

        let pending: Vec<Event> = self.events.drain_events().collect();
        for event in &pending {
            let action = self.target.dispatch(event);
            if let Event::Activate { target } = event {
                self.outputs.activations.push(ActivationRecord {
                    target: target.clone(),
                    prevented: action.is_prevented(),
                });
            }
        }

        if let Some(y) = self.host.advance_scroll(dt) {
            trace!(y, "animated scroll");
            self.outputs.animated_scroll_events += 1;
            self.target.dispatch(&Event::Scroll);
        }

        self.dock.tick(dt);
        self.outputs.frames += 1;
        self.outputs.last_frame.insert(self.dock.frame())
    }

    /// Step frames `frame_dt` apart until neither the page nor the icons
    /// move, up to `max_frames`. Returns the number of frames stepped.
    pub fn settle(&mut self, start: Duration, frame_dt: Duration, max_frames: usize) -> usize {
        let mut now = start;
        for stepped in 1..=max_frames {
            let animating = self.step(now).animating;
            if !animating && !self.host.is_scrolling() && self.events.pending() == 0 {
                debug!(frames = stepped, "session settled");
                return stepped;
            }
            now = now.saturating_add(frame_dt);
        }
        max_frames
    }

    #[must_use]
    pub fn dock(&self) -> &Dock<WebHost> {
        &self.dock
    }

    #[must_use]
    pub fn host(&self) -> &WebHost {
        &self.host
    }

    #[must_use]
    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    /// Get captured outputs.
    #[must_use]
    pub const fn outputs(&self) -> &WebOutputs {
        &self.outputs
    }

    /// Take captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> WebOutputs {
        std::mem::take(&mut self.outputs)
    }
}
