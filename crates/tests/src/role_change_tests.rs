use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common::{resolver, selection};

#[test]
fn downgrade_resets_hidden_sub_tab() {
    let r = resolver();
    let start = selection("settings", "Integrations", 3);
    assert_eq!(
        r.on_role_changed(&start, Role::MEMBER),
        selection("settings", "General", 1)
    );
}

#[test]
fn downgrade_below_tab_threshold_restarts_navigation() {
    let r = resolver();
    let start = selection("users", "Permissions", 3);
    assert_eq!(
        r.on_role_changed(&start, Role::MEMBER),
        r.initial_selection(Role::MEMBER)
    );
    assert_eq!(
        r.on_role_changed(&start, Role::GUEST),
        selection("dashboard", "Overview", 0)
    );
}

#[test]
fn empty_sub_tab_picks_up_default_when_one_becomes_visible() {
    let r = resolver();
    let start = selection("users", "", 3);
    assert_eq!(
        r.on_role_changed(&start, Role::MANAGER),
        selection("users", "All Users", 2)
    );
}

#[test]
fn tab_without_sub_entries_stays_empty() {
    let r = resolver();
    let start = selection("resources", "", 1);
    assert_eq!(
        r.on_role_changed(&start, Role::ADMIN),
        selection("resources", "", 3)
    );
}

#[test]
fn same_role_is_a_no_op() {
    let r = resolver();
    let start = selection("labbooks", "History", 2);
    assert_eq!(r.on_role_changed(&start, Role::MANAGER), start);
}
