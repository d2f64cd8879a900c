use super::{normalize_key, ContentKey, MenuEntry, NavigationCatalog, SubEntry, DEFAULT_CONTENT_KEY};
use crate::Role;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The caller-owned navigation state: active tab, active sub-tab and the
/// viewer's role. An empty `active_sub_tab_name` means no sub-tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub active_tab_id: String,
    pub active_sub_tab_name: String,
    pub viewer_role: Role,
}

impl Selection {
    pub fn new(
        active_tab_id: impl Into<String>,
        active_sub_tab_name: impl Into<String>,
        viewer_role: Role,
    ) -> Self {
        Self {
            active_tab_id: active_tab_id.into(),
            active_sub_tab_name: active_sub_tab_name.into(),
            viewer_role,
        }
    }

    /// The active sub-tab, or `None` for the empty selection.
    pub fn sub_tab(&self) -> Option<&str> {
        if self.active_sub_tab_name.is_empty() {
            None
        } else {
            Some(&self.active_sub_tab_name)
        }
    }
}

/// Outcome of a content lookup. Neither miss is an error: the shell shows a
/// placeholder for `NotImplemented` and nothing for `UnknownTab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentResolution {
    Found(ContentKey),
    /// The tab exists but has no handle for the requested key.
    NotImplemented,
    /// No catalog entry has the requested tab id.
    UnknownTab,
}

impl ContentResolution {
    pub fn is_found(self) -> bool {
        matches!(self, ContentResolution::Found(_))
    }
}

/// One segment of the header path, e.g. `Lab Books / Upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// True for the last segment, which is rendered as the current page.
    pub current: bool,
}

/// Pure queries over a [`NavigationCatalog`] and a [`Selection`].
///
/// Holds no state of its own; every `on_*` operation takes the current
/// selection and returns the next one, restoring the invariant that the
/// active sub-tab is empty or visible under the active tab.
#[derive(Debug, Clone, Copy)]
pub struct NavigationResolver<'a> {
    catalog: &'a NavigationCatalog,
}

impl<'a> NavigationResolver<'a> {
    pub fn new(catalog: &'a NavigationCatalog) -> Self {
        Self { catalog }
    }

    pub fn find_entry(&self, tab_id: &str) -> Option<&'a MenuEntry> {
        self.catalog.find(tab_id)
    }

    /// Entries the role may see, in catalog order.
    pub fn visible_entries(&self, role: Role) -> Vec<&'a MenuEntry> {
        self.catalog
            .entries()
            .iter()
            .filter(|entry| entry.is_visible_to(role))
            .collect()
    }

    /// Sub-entries of `entry` the role may see, in catalog order.
    pub fn visible_sub_entries<'e>(&self, entry: &'e MenuEntry, role: Role) -> Vec<&'e SubEntry> {
        entry
            .sub_entries
            .iter()
            .filter(|sub| sub.is_visible_to(role))
            .collect()
    }

    pub fn has_visible_sub_entries(&self, entry: &MenuEntry, role: Role) -> bool {
        entry.sub_entries.iter().any(|sub| sub.is_visible_to(role))
    }

    /// First visible sub-entry name, or `""` when none is visible.
    pub fn default_sub_tab<'e>(&self, entry: &'e MenuEntry, role: Role) -> &'e str {
        entry
            .sub_entries
            .iter()
            .find(|sub| sub.is_visible_to(role))
            .map(|sub| sub.name.as_str())
            .unwrap_or("")
    }

    /// Look up the content handle for a tab and optional sub-tab.
    ///
    /// Lookup is independent of role: visibility only gates the menu and
    /// default selection. An empty sub-tab name is treated as absent and
    /// resolves through the reserved `"default"` key.
    pub fn resolve_content(&self, tab_id: &str, sub_tab_name: Option<&str>) -> ContentResolution {
        let Some(entry) = self.find_entry(tab_id) else {
            return ContentResolution::UnknownTab;
        };

        let key = match sub_tab_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => normalize_key(name),
            None => DEFAULT_CONTENT_KEY.to_string(),
        };

        entry
            .content
            .get(&key)
            .copied()
            .map_or(ContentResolution::NotImplemented, ContentResolution::Found)
    }

    /// Content for the selection's current tab and sub-tab.
    pub fn resolve_selection(&self, selection: &Selection) -> ContentResolution {
        self.resolve_content(&selection.active_tab_id, selection.sub_tab())
    }

    /// Starting selection for a role: the first visible entry with its
    /// default sub-tab, or an empty selection when nothing is visible.
    pub fn initial_selection(&self, role: Role) -> Selection {
        match self.visible_entries(role).first() {
            Some(entry) => Selection::new(entry.id.clone(), self.default_sub_tab(entry, role), role),
            None => Selection::new("", "", role),
        }
    }

    /// Apply a role change.
    ///
    /// The active sub-tab is kept when it is still visible under the new
    /// role and replaced by the default otherwise. If the active tab itself
    /// is no longer visible the selection falls back to
    /// [`initial_selection`](Self::initial_selection).
    pub fn on_role_changed(&self, selection: &Selection, new_role: Role) -> Selection {
        let entry = match self.find_entry(&selection.active_tab_id) {
            Some(entry) if entry.is_visible_to(new_role) => entry,
            _ => {
                let next = self.initial_selection(new_role);
                debug!(
                    from = %selection.active_tab_id,
                    to = %next.active_tab_id,
                    role = %new_role,
                    "active tab not visible after role change"
                );
                return next;
            }
        };

        let sub_tab = match self.find_visible_sub_entry(entry, new_role, &selection.active_sub_tab_name) {
            Some(sub) => sub.name.as_str(),
            None => {
                let fallback = self.default_sub_tab(entry, new_role);
                if fallback != selection.active_sub_tab_name {
                    debug!(
                        tab = %entry.id,
                        from = %selection.active_sub_tab_name,
                        to = %fallback,
                        role = %new_role,
                        "sub-tab reset after role change"
                    );
                }
                fallback
            }
        };

        Selection::new(entry.id.clone(), sub_tab, new_role)
    }

    /// Activate a top-level tab and select its default sub-tab.
    ///
    /// Unknown tabs and tabs the viewer cannot see are ignored: the
    /// selection is returned unchanged.
    pub fn on_tab_activated(&self, selection: &Selection, tab_id: &str) -> Selection {
        let role = selection.viewer_role;
        let Some(entry) = self.reachable_entry(tab_id, role) else {
            return selection.clone();
        };
        Selection::new(entry.id.clone(), self.default_sub_tab(entry, role), role)
    }

    /// Activate a specific sub-tab.
    ///
    /// The name is re-checked against the visible sub-entries (case
    /// insensitively) and stored with the catalog's spelling. A name that is
    /// not visible falls back to the tab's default sub-tab.
    pub fn on_sub_tab_activated(&self, selection: &Selection, tab_id: &str, sub_tab_name: &str) -> Selection {
        let role = selection.viewer_role;
        let Some(entry) = self.reachable_entry(tab_id, role) else {
            return selection.clone();
        };

        let sub_tab = match self.find_visible_sub_entry(entry, role, sub_tab_name) {
            Some(sub) => sub.name.as_str(),
            None => {
                let fallback = self.default_sub_tab(entry, role);
                warn!(
                    tab = %entry.id,
                    requested = %sub_tab_name,
                    fallback = %fallback,
                    role = %role,
                    "requested sub-tab is not visible, using default"
                );
                fallback
            }
        };

        Selection::new(entry.id.clone(), sub_tab, role)
    }

    /// Header path for the selection: the entry label, then the sub-tab when
    /// the entry has visible sub-entries and one is selected.
    pub fn breadcrumb(&self, selection: &Selection) -> Vec<Crumb> {
        let Some(entry) = self.find_entry(&selection.active_tab_id) else {
            return Vec::new();
        };

        let mut labels = vec![entry.display_label().to_string()];
        if let Some(sub) = selection.sub_tab() {
            if self.has_visible_sub_entries(entry, selection.viewer_role) {
                labels.push(sub.to_string());
            }
        }

        let last = labels.len() - 1;
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Crumb {
                label,
                current: i == last,
            })
            .collect()
    }

    /// Name shown in the "not yet implemented" placeholder.
    pub fn placeholder_title(&self, selection: &Selection) -> String {
        if let Some(sub) = selection.sub_tab() {
            return sub.to_string();
        }
        self.find_entry(&selection.active_tab_id)
            .map(|entry| entry.display_label().to_string())
            .unwrap_or_else(|| selection.active_tab_id.clone())
    }

    fn reachable_entry(&self, tab_id: &str, role: Role) -> Option<&'a MenuEntry> {
        match self.find_entry(tab_id) {
            Some(entry) if entry.is_visible_to(role) => Some(entry),
            Some(_) => {
                warn!(tab = %tab_id, role = %role, "ignoring activation of a tab above the viewer's role");
                None
            }
            None => {
                warn!(tab = %tab_id, "ignoring activation of an unknown tab");
                None
            }
        }
    }

    fn find_visible_sub_entry<'e>(&self, entry: &'e MenuEntry, role: Role, name: &str) -> Option<&'e SubEntry> {
        let key = normalize_key(name);
        if key.is_empty() {
            return None;
        }
        entry
            .sub_entries
            .iter()
            .find(|sub| sub.is_visible_to(role) && sub.key() == key)
    }
}
