use super::{normalize_key, ContentKey, MenuEntry, DEFAULT_CONTENT_KEY};
use crate::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Configuration error found while loading a navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The TOML source could not be parsed into entries.
    Parse(String),
    EmptyId { index: usize },
    DuplicateId(String),
    DuplicateSubEntry { entry: String, name: String },
    /// A sub-entry whose normalized name collides with the default key.
    ReservedSubEntry { entry: String, name: String },
    /// A content key that is not lower-case and trimmed.
    UnnormalizedContentKey { entry: String, key: String },
    /// A content key that names no sub-entry of its parent.
    OrphanContent { entry: String, key: String },
    /// An entry with a default handle whose sub-entry has no handle of its
    /// own; activating the tab would land on missing content.
    UnmappedSubEntry { entry: String, name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid navigation catalog: {msg}"),
            CatalogError::EmptyId { index } => write!(f, "entry #{index} has an empty id"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate entry id '{id}'"),
            CatalogError::DuplicateSubEntry { entry, name } => {
                write!(f, "entry '{entry}' lists sub-entry '{name}' more than once")
            }
            CatalogError::ReservedSubEntry { entry, name } => write!(
                f,
                "entry '{entry}' has a sub-entry named '{name}', which is reserved"
            ),
            CatalogError::UnnormalizedContentKey { entry, key } => write!(
                f,
                "entry '{entry}' has content key '{key}'; keys must be lower-case and trimmed"
            ),
            CatalogError::OrphanContent { entry, key } => write!(
                f,
                "entry '{entry}' maps content key '{key}' that matches no sub-entry"
            ),
            CatalogError::UnmappedSubEntry { entry, name } => write!(
                f,
                "entry '{entry}' declares a default handle but sub-entry '{name}' has none"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Unvalidated catalog as written in `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

impl CatalogConfig {
    pub fn into_catalog(self) -> Result<NavigationCatalog, CatalogError> {
        NavigationCatalog::new(self.entries)
    }
}

/// The fixed, ordered set of top-level menu entries.
///
/// Only constructible through validation, so a `NavigationCatalog` value
/// always has unique ids, unique sub-entry names per entry and no dangling
/// content keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogConfig")]
pub struct NavigationCatalog {
    entries: Vec<MenuEntry>,
}

impl TryFrom<CatalogConfig> for NavigationCatalog {
    type Error = CatalogError;

    fn try_from(config: CatalogConfig) -> Result<Self, Self::Error> {
        config.into_catalog()
    }
}

impl NavigationCatalog {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// Parse a catalog from a TOML document with `[[entries]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        config.into_catalog()
    }

    /// The lab console menu: dashboard, lab books, schedules, resources,
    /// users and settings.
    pub fn builtin() -> Self {
        let entries = vec![
            MenuEntry::new("dashboard", "Dashboard", Role::GUEST)
                .with_sub_entry("Overview", Role::GUEST)
                .with_content("overview", ContentKey::DashboardOverview),
            MenuEntry::new("labbooks", "Lab Books", Role::MEMBER)
                .with_sub_entry("Upload", Role::MEMBER)
                .with_sub_entry("Approval", Role::MANAGER)
                .with_sub_entry("History", Role::MEMBER)
                .with_content("upload", ContentKey::LabBookUpload)
                .with_content("approval", ContentKey::LabBookApproval)
                .with_content("history", ContentKey::LabBookHistory),
            MenuEntry::new("schedules", "Schedules", Role::MEMBER)
                .with_content(DEFAULT_CONTENT_KEY, ContentKey::Schedule),
            MenuEntry::new("resources", "Resources", Role::MEMBER)
                .with_content(DEFAULT_CONTENT_KEY, ContentKey::Resources),
            MenuEntry::new("users", "Users", Role::MANAGER)
                .with_sub_entry("All Users", Role::MANAGER)
                .with_sub_entry("Register", Role::MANAGER)
                .with_sub_entry("Permissions", Role::ADMIN)
                .with_content("all users", ContentKey::UsersAll)
                .with_content("register", ContentKey::UsersRegister)
                .with_content("permissions", ContentKey::UsersPermissions),
            MenuEntry::new("settings", "Settings", Role::MEMBER)
                .with_sub_entry("General", Role::MEMBER)
                .with_sub_entry("Security", Role::MEMBER)
                .with_sub_entry("Notifications", Role::ADMIN)
                .with_sub_entry("Integrations", Role::ADMIN)
                .with_content("general", ContentKey::SettingsGeneral)
                .with_content("security", ContentKey::SettingsSecurity)
                .with_content("notifications", ContentKey::SettingsNotifications)
                .with_content("integrations", ContentKey::SettingsIntegrations),
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl Default for NavigationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(entries: &[MenuEntry]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !ids.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateId(entry.id.clone()));
        }

        let mut names = HashSet::new();
        for sub in &entry.sub_entries {
            let key = sub.key();
            if key == DEFAULT_CONTENT_KEY {
                return Err(CatalogError::ReservedSubEntry {
                    entry: entry.id.clone(),
                    name: sub.name.clone(),
                });
            }
            if !names.insert(key) {
                return Err(CatalogError::DuplicateSubEntry {
                    entry: entry.id.clone(),
                    name: sub.name.clone(),
                });
            }
        }

        for key in entry.content.keys() {
            if normalize_key(key) != *key {
                return Err(CatalogError::UnnormalizedContentKey {
                    entry: entry.id.clone(),
                    key: key.clone(),
                });
            }
            if key != DEFAULT_CONTENT_KEY && !names.contains(key) {
                return Err(CatalogError::OrphanContent {
                    entry: entry.id.clone(),
                    key: key.clone(),
                });
            }
        }

        if entry.content.contains_key(DEFAULT_CONTENT_KEY) {
            if let Some(sub) = entry
                .sub_entries
                .iter()
                .find(|sub| !entry.content.contains_key(&sub.key()))
            {
                return Err(CatalogError::UnmappedSubEntry {
                    entry: entry.id.clone(),
                    name: sub.name.clone(),
                });
            }
        }
    }
    Ok(())
}
