#![forbid(unsafe_code)]

//! Render-ready dock state.
//!
//! A [`DockFrame`] is a snapshot the host paints from: one [`IconView`] per
//! entry, in display order. Width comes from the magnifier, highlight from
//! the section tracker; the two are independent and only meet here.

use crate::nav::{EntryKind, Icon};

/// Visual treatment of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Appearance {
    /// Section in view: highlighted border, glow, filled icon color.
    Active,
    /// Default muted style.
    Neutral,
    /// Muted style under the pointer: lighter background and border.
    NeutralHover,
}

/// One entry as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconView {
    pub id: String,
    pub label: String,
    pub icon: Icon,
    pub kind: EntryKind,
    /// Smoothed width (and height; icons are square).
    pub width: f64,
    pub active: bool,
    pub appearance: Appearance,
    /// Small dot under the active icon.
    pub indicator: bool,
    /// Label tooltip above a hovered icon.
    pub tooltip_visible: bool,
}

impl IconView {
    /// Appearance for the given highlight and hover state.
    #[must_use]
    pub const fn appearance_for(active: bool, hovered: bool) -> Appearance {
        match (active, hovered) {
            (true, _) => Appearance::Active,
            (false, true) => Appearance::NeutralHover,
            (false, false) => Appearance::Neutral,
        }
    }
}

/// Snapshot of the whole dock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockFrame {
    pub icons: Vec<IconView>,
    /// A divider is drawn after this many icons (between nav items and
    /// actions), if there are actions.
    pub separator_after: Option<usize>,
    pub active_section: String,
    /// Some spring is still moving; the host should schedule another frame.
    pub animating: bool,
}

impl DockFrame {
    #[must_use]
    pub fn icon(&self, id: &str) -> Option<&IconView> {
        self.icons.iter().find(|v| v.id == id)
    }

    /// The highlighted icon, if the active section has one.
    #[must_use]
    pub fn active_icon(&self) -> Option<&IconView> {
        self.icons.iter().find(|v| v.active)
    }

    /// Sum of icon widths; the dock's content width before padding and gaps.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.icons.iter().map(|v| v.width).sum()
    }
}
