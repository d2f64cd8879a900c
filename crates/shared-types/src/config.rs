use crate::navigation::CatalogConfig;
use crate::Role;
use serde::{Deserialize, Serialize};

/// Viewport width (px) at and above which the sidebar is pinned.
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 1024;

/// Delay (ms) before a resize recomputes the layout mode.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Page shell settings from the `[shell]` table of `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    /// Role assumed for the viewer until real authentication exists.
    #[serde(default = "default_dev_role")]
    pub dev_role: Role,
    #[serde(default = "default_desktop_breakpoint")]
    pub desktop_breakpoint: u32,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

fn default_dev_role() -> Role {
    Role::ADMIN
}

fn default_desktop_breakpoint() -> u32 {
    DEFAULT_DESKTOP_BREAKPOINT
}

fn default_resize_debounce_ms() -> u64 {
    DEFAULT_RESIZE_DEBOUNCE_MS
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            dev_role: default_dev_role(),
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl ShellSettings {
    pub fn layout_mode(&self, viewport_width: u32) -> LayoutMode {
        LayoutMode::for_width(viewport_width, self.desktop_breakpoint)
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// `navigation` is kept unvalidated here so that a bad catalog can be
/// reported and replaced by the built-in one without discarding the rest
/// of the file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellSettings,
    #[serde(default)]
    pub navigation: Option<CatalogConfig>,
}

/// Which chrome the shell renders around the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sidebar pinned open beside the content.
    Desktop,
    /// Sidebar behind a trigger; closes after each navigation click.
    Mobile,
}

impl LayoutMode {
    pub fn for_width(viewport_width: u32, breakpoint: u32) -> Self {
        if viewport_width >= breakpoint {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == LayoutMode::Desktop
    }
}
