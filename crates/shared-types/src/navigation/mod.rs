//! Role-gated navigation: the menu catalog and the resolver that derives
//! visibility, default selection and content from it.

pub mod catalog;
pub mod resolver;

pub use catalog::*;
pub use resolver::*;

use crate::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved content key used when a tab has no sub-tab selected.
pub const DEFAULT_CONTENT_KEY: &str = "default";

/// Normalize a sub-entry name into its content lookup key.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Content handle for a resolved (tab, sub-tab) pair.
///
/// The set is closed: the app binds every variant to a page with an
/// exhaustive `match`, so adding a variant without a page fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKey {
    DashboardOverview,
    LabBookUpload,
    LabBookApproval,
    LabBookHistory,
    Schedule,
    Resources,
    UsersAll,
    UsersRegister,
    UsersPermissions,
    SettingsGeneral,
    SettingsSecurity,
    SettingsNotifications,
    SettingsIntegrations,
}

impl ContentKey {
    pub const ALL: [ContentKey; 13] = [
        ContentKey::DashboardOverview,
        ContentKey::LabBookUpload,
        ContentKey::LabBookApproval,
        ContentKey::LabBookHistory,
        ContentKey::Schedule,
        ContentKey::Resources,
        ContentKey::UsersAll,
        ContentKey::UsersRegister,
        ContentKey::UsersPermissions,
        ContentKey::SettingsGeneral,
        ContentKey::SettingsSecurity,
        ContentKey::SettingsNotifications,
        ContentKey::SettingsIntegrations,
    ];

    /// Kebab-case name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKey::DashboardOverview => "dashboard-overview",
            ContentKey::LabBookUpload => "lab-book-upload",
            ContentKey::LabBookApproval => "lab-book-approval",
            ContentKey::LabBookHistory => "lab-book-history",
            ContentKey::Schedule => "schedule",
            ContentKey::Resources => "resources",
            ContentKey::UsersAll => "users-all",
            ContentKey::UsersRegister => "users-register",
            ContentKey::UsersPermissions => "users-permissions",
            ContentKey::SettingsGeneral => "settings-general",
            ContentKey::SettingsSecurity => "settings-security",
            ContentKey::SettingsNotifications => "settings-notifications",
            ContentKey::SettingsIntegrations => "settings-integrations",
        }
    }
}

/// A secondary navigation item nested under a [`MenuEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntry {
    /// Display name; also the content lookup key after [`normalize_key`].
    pub name: String,
    #[serde(default)]
    pub min_role: Role,
}

impl SubEntry {
    pub fn new(name: impl Into<String>, min_role: Role) -> Self {
        Self {
            name: name.into(),
            min_role,
        }
    }

    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        role.satisfies(self.min_role)
    }
}

/// A top-level navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    /// Presentation only; falls back to `id` when empty.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub min_role: Role,
    #[serde(default)]
    pub sub_entries: Vec<SubEntry>,
    /// Normalized sub-entry name (or [`DEFAULT_CONTENT_KEY`]) to content.
    #[serde(default)]
    pub content: BTreeMap<String, ContentKey>,
}

impl MenuEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, min_role: Role) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min_role,
            sub_entries: Vec::new(),
            content: BTreeMap::new(),
        }
    }

    /// Append a sub-entry, keeping catalog order.
    pub fn with_sub_entry(mut self, name: impl Into<String>, min_role: Role) -> Self {
        self.sub_entries.push(SubEntry::new(name, min_role));
        self
    }

    /// Register a content handle under an already-normalized key.
    pub fn with_content(mut self, key: impl Into<String>, content: ContentKey) -> Self {
        self.content.insert(key.into(), content);
        self
    }

    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        role.satisfies(self.min_role)
    }
}
