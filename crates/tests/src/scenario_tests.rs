use pretty_assertions::assert_eq;
use shared_types::{ContentKey, ContentResolution, Role};

use crate::common::{ids, names, resolver, selection};

#[test]
fn guest_sees_dashboard_overview() {
    let r = resolver();
    let visible = r.visible_entries(Role::GUEST);
    assert_eq!(ids(&visible), vec!["dashboard"]);

    let dashboard = r.find_entry("dashboard").unwrap();
    assert_eq!(r.default_sub_tab(dashboard, Role::GUEST), "Overview");
    assert_eq!(
        r.resolve_content("dashboard", Some("Overview")),
        ContentResolution::Found(ContentKey::DashboardOverview)
    );
}

#[test]
fn manager_cannot_see_permissions_but_can_resolve_it() {
    let r = resolver();
    assert_eq!(
        names(r, "users", Role::MANAGER),
        vec!["All Users", "Register"]
    );
    let users = r.find_entry("users").unwrap();
    assert_eq!(r.default_sub_tab(users, Role::MANAGER), "All Users");
    assert_eq!(
        r.resolve_content("users", Some("Permissions")),
        ContentResolution::Found(ContentKey::UsersPermissions)
    );
}

#[test]
fn permissions_unreachable_through_navigation_for_manager() {
    let r = resolver();
    let start = selection("users", "All Users", 2);
    let next = r.on_sub_tab_activated(&start, "users", "Permissions");
    assert_eq!(next.active_sub_tab_name, "All Users");

    let next = r.on_tab_activated(&start, "users");
    assert_eq!(next.active_sub_tab_name, "All Users");
}

#[test]
fn role_upgrade_keeps_still_visible_sub_tab() {
    let r = resolver();
    let start = selection("settings", "General", 1);
    let next = r.on_role_changed(&start, Role::ADMIN);
    assert_eq!(next, selection("settings", "General", 3));
}

#[test]
fn tab_without_sub_entries_resolves_default_handle() {
    let r = resolver();
    let schedules = r.find_entry("schedules").unwrap();
    assert_eq!(r.default_sub_tab(schedules, Role::ADMIN), "");
    assert_eq!(
        r.resolve_content("schedules", Some("")),
        ContentResolution::Found(ContentKey::Schedule)
    );
    assert_eq!(
        r.resolve_content("schedules", None),
        ContentResolution::Found(ContentKey::Schedule)
    );
}
