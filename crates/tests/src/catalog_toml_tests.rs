use pretty_assertions::assert_eq;
use shared_types::{
    AppConfig, AppError, AppErrorKind, CatalogError, ContentKey, ContentResolution,
    NavigationCatalog, NavigationResolver, Role,
};

use crate::common::{catalog_from_toml, ids};

const LAB_CATALOG: &str = r#"
[[entries]]
id = "inventory"
label = "Inventory"
min_role = 1

[[entries.sub_entries]]
name = "Reagents"
min_role = 1

[[entries.sub_entries]]
name = "Orders"
min_role = 2

[entries.content]
reagents = "resources"

[[entries]]
id = "calendar"
min_role = 0

[entries.content]
default = "schedule"
"#;

#[test]
fn toml_catalog_drives_the_resolver() {
    let catalog = catalog_from_toml(LAB_CATALOG);
    let r = NavigationResolver::new(&catalog);

    assert_eq!(ids(&r.visible_entries(Role::GUEST)), vec!["calendar"]);

    let start = r.initial_selection(Role::MEMBER);
    assert_eq!(start.active_tab_id, "inventory");
    assert_eq!(start.active_sub_tab_name, "Reagents");
    assert_eq!(
        r.resolve_selection(&start),
        ContentResolution::Found(ContentKey::Resources)
    );

    let orders = r.on_sub_tab_activated(&start, "inventory", "Orders");
    assert_eq!(orders.active_sub_tab_name, "Reagents");

    let manager = r.on_role_changed(&start, Role::MANAGER);
    let orders = r.on_sub_tab_activated(&manager, "inventory", "Orders");
    assert_eq!(orders.active_sub_tab_name, "Orders");
    assert_eq!(r.resolve_selection(&orders), ContentResolution::NotImplemented);
}

#[test]
fn missing_label_falls_back_to_id() {
    let catalog = catalog_from_toml(LAB_CATALOG);
    let calendar = catalog.find("calendar").unwrap();
    assert_eq!(calendar.display_label(), "calendar");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = NavigationCatalog::from_toml_str(
        r#"
        [[entries]]
        id = "users"
        [[entries]]
        id = "users"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "users"), "{err}");
}

#[test]
fn duplicate_sub_entries_are_rejected() {
    let err = NavigationCatalog::from_toml_str(
        r#"
        [[entries]]
        id = "users"
        [[entries.sub_entries]]
        name = "All Users"
        [[entries.sub_entries]]
        name = "all users"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSubEntry { .. }), "{err}");
}

#[test]
fn unknown_content_handle_is_a_parse_error() {
    let err = NavigationCatalog::from_toml_str(
        r#"
        [[entries]]
        id = "users"
        [entries.content]
        default = "billing"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "{err}");
}

#[test]
fn catalog_errors_surface_as_configuration_errors() {
    let err = NavigationCatalog::from_toml_str("[[entries]]\nid = \"\"\n").unwrap_err();
    let app_err = AppError::from(err);
    assert_eq!(app_err.kind, AppErrorKind::Configuration);
}

#[test]
fn config_file_carries_shell_and_catalog() {
    let config: AppConfig = toml::from_str(
        r#"
        [shell]
        dev_role = 2
        desktop_breakpoint = 900

        [[navigation.entries]]
        id = "dashboard"
        [navigation.entries.content]
        default = "dashboard-overview"
        "#,
    )
    .unwrap();
    assert_eq!(config.shell.dev_role, Role::MANAGER);
    assert_eq!(config.shell.desktop_breakpoint, 900);
    let catalog = config.navigation.unwrap().into_catalog().unwrap();
    assert_eq!(catalog.entries().len(), 1);
}

#[test]
fn default_handle_with_unmapped_sub_entry_is_rejected() {
    let err = NavigationCatalog::from_toml_str(
        r#"
        [[entries]]
        id = "inventory"
        min_role = 1

        [[entries.sub_entries]]
        name = "Reagents"
        min_role = 1

        [[entries.sub_entries]]
        name = "Orders"
        min_role = 1

        [entries.content]
        default = "resources"
        orders = "resources"
        "#,
    )
    .unwrap_err();
    assert!(
        matches!(err, CatalogError::UnmappedSubEntry { ref name, .. } if name == "Reagents"),
        "{err}"
    );
}

#[test]
fn activated_tab_resolves_in_loaded_catalogs() {
    let fully_mapped = catalog_from_toml(
        r#"
        [[entries]]
        id = "inventory"
        min_role = 1

        [[entries.sub_entries]]
        name = "Reagents"
        min_role = 1

        [[entries.sub_entries]]
        name = "Orders"
        min_role = 2

        [entries.content]
        default = "resources"
        reagents = "resources"
        orders = "resources"

        [[entries]]
        id = "calendar"

        [entries.content]
        default = "schedule"
        "#,
    );
    for catalog in [&fully_mapped, &catalog_from_toml(LAB_CATALOG)] {
        let r = NavigationResolver::new(catalog);
        for role in [Role::GUEST, Role::MEMBER, Role::MANAGER, Role::ADMIN] {
            let start = r.initial_selection(role);
            for entry in r.visible_entries(role) {
                let declares_default = entry.content.contains_key("default");
                let next = r.on_tab_activated(&start, &entry.id);
                let default_sub = r.default_sub_tab(entry, role);
                let has_handle = declares_default
                    || entry.content.contains_key(&default_sub.to_lowercase());
                if has_handle {
                    assert!(
                        r.resolve_selection(&next).is_found(),
                        "{} at {role}: {next:?}",
                        entry.id
                    );
                }
            }
        }
    }
}
