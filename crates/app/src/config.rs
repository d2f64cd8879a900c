use shared_types::{
    AppConfig, AppError, CatalogConfig, NavigationCatalog, NavigationResolver, ShellSettings,
};
use std::sync::OnceLock;
use tracing::{error, info, warn};

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

static LOADED: OnceLock<LoadedConfig> = OnceLock::new();

/// Settings and menu catalog in effect for the process lifetime.
#[derive(Debug)]
pub struct LoadedConfig {
    pub shell: ShellSettings,
    pub catalog: NavigationCatalog,
}

/// Read `config.toml` once and keep the result for the process lifetime.
///
/// A missing or unparseable file yields the defaults; a `[navigation]`
/// catalog that fails validation is replaced by the built-in menu.
pub fn load() -> &'static LoadedConfig {
    LOADED.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => from_toml(&contents),
        Err(e) => {
            info!("{CONFIG_PATH} not readable ({e}), using built-in settings");
            from_app_config(AppConfig::default())
        }
    })
}

pub fn shell_settings() -> &'static ShellSettings {
    &load().shell
}

pub fn resolver() -> NavigationResolver<'static> {
    NavigationResolver::new(&load().catalog)
}

fn from_toml(contents: &str) -> LoadedConfig {
    let config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        warn!("failed to parse {CONFIG_PATH}: {e}; using built-in settings");
        AppConfig::default()
    });
    from_app_config(config)
}

fn from_app_config(config: AppConfig) -> LoadedConfig {
    let catalog = match config.navigation {
        Some(nav) => match configured_catalog(nav) {
            Ok(catalog) => {
                info!(entries = catalog.entries().len(), "using navigation catalog from {CONFIG_PATH}");
                catalog
            }
            Err(e) => {
                error!(kind = %e.kind, "{}; using built-in menu", e.message);
                NavigationCatalog::builtin()
            }
        },
        None => NavigationCatalog::builtin(),
    };
    info!(dev_role = %config.shell.dev_role, "shell settings loaded");
    LoadedConfig {
        shell: config.shell,
        catalog,
    }
}

fn configured_catalog(nav: CatalogConfig) -> Result<NavigationCatalog, AppError> {
    nav.into_catalog().map_err(|e| {
        AppError::configuration(format!("invalid navigation catalog in {CONFIG_PATH}: {e}"))
    })
}
