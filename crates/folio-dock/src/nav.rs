#![forbid(unsafe_code)]

//! Dock entries.
//!
//! Primary entries ([`NavItem`]) jump to a page section. Secondary entries
//! ([`DockAction`]) sit after a separator and are handled by the host (theme
//! toggle, résumé link). Both are magnified; only nav items are ever
//! highlighted.

use crate::error::DockError;

/// Section id of the hero section at the top of the page.
pub const HOME_SECTION_ID: &str = "hero";

/// Icon glyph shown for an entry. Rendering is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Icon {
    Home,
    Briefcase,
    Layers,
    FolderGit,
    Mail,
    FileText,
    ThemeToggle,
}

/// Magnification class of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntryKind {
    /// Navigation icon, magnifies to the primary max width.
    Primary,
    /// Action button, magnifies to the smaller secondary max width.
    Secondary,
}

/// Map an anchor href to the section id it targets.
///
/// `"#experience"` → `"experience"`. A bare `"#"` (or an empty href) is the
/// top of the page and maps to `home_id`.
#[must_use]
pub fn section_id_from_href(href: &str, home_id: &str) -> String {
    match href.strip_prefix('#').unwrap_or(href) {
        "" => home_id.to_owned(),
        id => id.to_owned(),
    }
}

/// A navigation entry: label, icon, and the section it scrolls to.
///
/// Immutable once the dock is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    id: String,
    label: String,
    icon: Icon,
    href: String,
    section_id: String,
}

impl NavItem {
    /// Build from a `{label, href, icon}` link tuple.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self::link_with_home(label, href, icon, HOME_SECTION_ID)
    }

    /// Like [`NavItem::link`], with a custom home section id.
    #[must_use]
    pub fn link_with_home(
        label: impl Into<String>,
        href: impl Into<String>,
        icon: Icon,
        home_id: &str,
    ) -> Self {
        let href = href.into();
        let section_id = section_id_from_href(&href, home_id);
        Self {
            id: section_id.clone(),
            label: label.into(),
            icon,
            href,
            section_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    /// Whether this item is highlighted while `active` is the active section.
    ///
    /// The home entry matches the home id whether it was declared as `"#"`
    /// or as the home anchor.
    #[must_use]
    pub fn is_active_for(&self, active: &str, home_id: &str) -> bool {
        if self.section_id == active {
            return true;
        }
        active == home_id && (self.href == "#" || self.href.strip_prefix('#') == Some(home_id))
    }
}

/// What a secondary entry does when activated. Executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Flip between light and dark theme.
    ToggleTheme,
    /// Follow a link, optionally in a new tab.
    OpenLink { href: String, new_tab: bool },
}

/// A secondary dock entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockAction {
    id: String,
    label: String,
    icon: Icon,
    kind: ActionKind,
}

impl DockAction {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: Icon, kind: ActionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }
}

/// Either kind of dock entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockEntry {
    Nav(NavItem),
    Action(DockAction),
}

impl DockEntry {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Nav(item) => item.id(),
            Self::Action(action) => action.id(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Nav(item) => item.label(),
            Self::Action(action) => action.label(),
        }
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        match self {
            Self::Nav(item) => item.icon(),
            Self::Action(action) => action.icon(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Nav(_) => EntryKind::Primary,
            Self::Action(_) => EntryKind::Secondary,
        }
    }
}

/// The dock's validated entry list: nav items first, then actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntries {
    nav: Vec<NavItem>,
    actions: Vec<DockAction>,
}

impl DockEntries {
    /// Validate and build. Needs at least one nav item; ids must be unique
    /// across both lists.
    pub fn new(nav: Vec<NavItem>, actions: Vec<DockAction>) -> Result<Self, DockError> {
        if nav.is_empty() {
            return Err(DockError::NoNavItems);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(nav.len() + actions.len());
        let ids = nav
            .iter()
            .map(NavItem::id)
            .chain(actions.iter().map(DockAction::id));
        for id in ids {
            if seen.contains(&id) {
                return Err(DockError::DuplicateEntry(id.to_owned()));
            }
            seen.push(id);
        }
        Ok(Self { nav, actions })
    }

    /// The portfolio page's dock: five sections, theme toggle, résumé.
    #[must_use]
    pub fn portfolio() -> Self {
        Self {
            nav: vec![
                NavItem::link("Home", "#hero", Icon::Home),
                NavItem::link("Experience", "#experience", Icon::Briefcase),
                NavItem::link("Stack", "#my-stack", Icon::Layers),
                NavItem::link("Projects", "#projects", Icon::FolderGit),
                NavItem::link("Contact", "#contact", Icon::Mail),
            ],
            actions: vec![
                DockAction::new("theme", "Toggle theme", Icon::ThemeToggle, ActionKind::ToggleTheme),
                DockAction::new(
                    "resume",
                    "Résumé",
                    Icon::FileText,
                    ActionKind::OpenLink {
                        href: "/resume.pdf".into(),
                        new_tab: true,
                    },
                ),
            ],
        }
    }

    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    #[must_use]
    pub fn actions(&self) -> &[DockAction] {
        &self.actions
    }

    /// Section ids in declaration order, as scanned by the tracker.
    #[must_use]
    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|n| n.section_id().to_owned()).collect()
    }

    /// All entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = DockEntry> + '_ {
        self.nav
            .iter()
            .cloned()
            .map(DockEntry::Nav)
            .chain(self.actions.iter().cloned().map(DockEntry::Action))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nav.len() + self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_to_section() {
        assert_eq!(section_id_from_href("#experience", "hero"), "experience");
        assert_eq!(section_id_from_href("#", "hero"), "hero");
        assert_eq!(section_id_from_href("", "hero"), "hero");
        assert_eq!(section_id_from_href("contact", "hero"), "contact");
    }

    #[test]
    fn home_matches_either_href() {
        let anchor = NavItem::link("Home", "#hero", Icon::Home);
        let bare = NavItem::link("Home", "#", Icon::Home);
        assert!(anchor.is_active_for("hero", "hero"));
        assert!(bare.is_active_for("hero", "hero"));
        assert_eq!(bare.section_id(), "hero");
        assert!(!bare.is_active_for("projects", "hero"));
    }

    #[test]
    fn plain_item_matches_only_its_section() {
        let item = NavItem::link("Stack", "#my-stack", Icon::Layers);
        assert_eq!(item.id(), "my-stack");
        assert!(item.is_active_for("my-stack", "hero"));
        assert!(!item.is_active_for("hero", "hero"));
        assert!(!item.is_active_for("projects", "hero"));
    }

    #[test]
    fn portfolio_layout() {
        let entries = DockEntries::portfolio();
        assert_eq!(
            entries.section_ids(),
            vec!["hero", "experience", "my-stack", "projects", "contact"]
        );
        assert_eq!(entries.len(), 7);
        let kinds: Vec<EntryKind> = entries.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.iter().filter(|k| **k == EntryKind::Secondary).count(), 2);
        assert_eq!(kinds[0], EntryKind::Primary);
    }

    #[test]
    fn rejects_duplicates_and_empty() {
        assert_eq!(
            DockEntries::new(Vec::new(), Vec::new()),
            Err(DockError::NoNavItems)
        );
        let dup = DockEntries::new(
            vec![
                NavItem::link("A", "#a", Icon::Home),
                NavItem::link("A again", "#a", Icon::Mail),
            ],
            Vec::new(),
        );
        assert_eq!(dup, Err(DockError::DuplicateEntry("a".into())));
        let clash = DockEntries::new(
            vec![NavItem::link("Theme", "#theme", Icon::Home)],
            vec![DockAction::new("theme", "Theme", Icon::ThemeToggle, ActionKind::ToggleTheme)],
        );
        assert_eq!(clash, Err(DockError::DuplicateEntry("theme".into())));
    }
}
