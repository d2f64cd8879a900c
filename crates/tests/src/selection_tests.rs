use pretty_assertions::assert_eq;
use shared_types::{Role, Selection};

use crate::common::{all_roles, resolver, selection, BUILTIN};

#[test]
fn initial_selection_is_first_visible_entry() {
    let r = resolver();
    assert_eq!(r.initial_selection(Role::GUEST), selection("dashboard", "Overview", 0));
    assert_eq!(r.initial_selection(Role::ADMIN), selection("dashboard", "Overview", 3));
}

#[test]
fn tab_activation_selects_default_sub_tab() {
    let r = resolver();
    let start = r.initial_selection(Role::ADMIN);
    assert_eq!(
        r.on_tab_activated(&start, "labbooks"),
        selection("labbooks", "Upload", 3)
    );
    assert_eq!(
        r.on_tab_activated(&start, "resources"),
        selection("resources", "", 3)
    );
}

#[test]
fn tab_activation_is_idempotent() {
    let r = resolver();
    for role in all_roles() {
        let start = r.initial_selection(role);
        for entry in r.visible_entries(role) {
            let once = r.on_tab_activated(&start, &entry.id);
            let twice = r.on_tab_activated(&once, &entry.id);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn activated_tab_always_resolves() {
    let r = resolver();
    for role in all_roles() {
        let start = r.initial_selection(role);
        for entry in r.visible_entries(role) {
            let next = r.on_tab_activated(&start, &entry.id);
            assert!(
                r.resolve_selection(&next).is_found(),
                "{} at {role}",
                entry.id
            );
        }
    }
}

#[test]
fn activating_hidden_or_unknown_tab_changes_nothing() {
    let r = resolver();
    let start = selection("labbooks", "History", 1);
    assert_eq!(r.on_tab_activated(&start, "users"), start);
    assert_eq!(r.on_tab_activated(&start, "billing"), start);
    assert_eq!(r.on_sub_tab_activated(&start, "users", "All Users"), start);
}

#[test]
fn sub_tab_activation_uses_catalog_spelling() {
    let r = resolver();
    let start = selection("dashboard", "Overview", 3);
    assert_eq!(
        r.on_sub_tab_activated(&start, "users", "all users"),
        selection("users", "All Users", 3)
    );
}

#[test]
fn stale_sub_tab_falls_back_to_default() {
    let r = resolver();
    let start = selection("settings", "General", 1);
    assert_eq!(
        r.on_sub_tab_activated(&start, "settings", "Integrations"),
        selection("settings", "General", 1)
    );
}

#[test]
fn every_operation_restores_sub_tab_invariant() {
    let r = resolver();
    let mut seen: Vec<Selection> = Vec::new();
    for role in all_roles() {
        let start = r.initial_selection(role);
        seen.push(start.clone());
        for entry in BUILTIN.entries() {
            seen.push(r.on_tab_activated(&start, &entry.id));
            for sub in &entry.sub_entries {
                seen.push(r.on_sub_tab_activated(&start, &entry.id, &sub.name));
            }
        }
    }

    for s in seen {
        let Some(entry) = r.find_entry(&s.active_tab_id) else {
            assert_eq!(s.active_tab_id, "");
            continue;
        };
        assert!(entry.is_visible_to(s.viewer_role));
        if let Some(sub) = s.sub_tab() {
            let visible = r.visible_sub_entries(entry, s.viewer_role);
            assert!(visible.iter().any(|v| v.name == sub), "{s:?}");
        }
    }
}

#[test]
fn breadcrumb_follows_selection() {
    let r = resolver();
    let crumbs: Vec<(String, bool)> = r
        .breadcrumb(&selection("labbooks", "Upload", 3))
        .into_iter()
        .map(|c| (c.label, c.current))
        .collect();
    assert_eq!(
        crumbs,
        vec![("Lab Books".to_string(), false), ("Upload".to_string(), true)]
    );

    let crumbs = r.breadcrumb(&selection("schedules", "", 3));
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0].label, "Schedules");
    assert!(crumbs[0].current);

    assert!(r.breadcrumb(&selection("nowhere", "", 3)).is_empty());
}
