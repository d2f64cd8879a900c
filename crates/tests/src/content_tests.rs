use pretty_assertions::assert_eq;
use shared_types::{ContentKey, ContentResolution, Role};

use crate::common::{all_roles, resolver, selection, BUILTIN};

#[test]
fn sub_tab_names_are_case_folded() {
    let r = resolver();
    for name in ["Approval", "approval", "APPROVAL", "  Approval "] {
        assert_eq!(
            r.resolve_content("labbooks", Some(name)),
            ContentResolution::Found(ContentKey::LabBookApproval),
            "{name:?}"
        );
    }
}

#[test]
fn missing_handle_is_not_implemented() {
    let r = resolver();
    assert_eq!(
        r.resolve_content("labbooks", Some("Archive")),
        ContentResolution::NotImplemented
    );
    assert_eq!(
        r.resolve_content("labbooks", None),
        ContentResolution::NotImplemented
    );
}

#[test]
fn unknown_tab_is_distinct_from_not_implemented() {
    let r = resolver();
    assert_eq!(r.resolve_content("billing", None), ContentResolution::UnknownTab);
    assert_eq!(
        r.resolve_content("billing", Some("Overview")),
        ContentResolution::UnknownTab
    );
}

#[test]
fn placeholder_names_the_missing_view() {
    let r = resolver();
    assert_eq!(r.placeholder_title(&selection("labbooks", "Archive", 3)), "Archive");
    assert_eq!(r.placeholder_title(&selection("resources", "", 3)), "Resources");
}

#[test]
fn every_builtin_visible_sub_tab_has_content() {
    let r = resolver();
    for entry in r.visible_entries(Role::ADMIN) {
        for sub in r.visible_sub_entries(entry, Role::ADMIN) {
            assert!(
                r.resolve_content(&entry.id, Some(&sub.name)).is_found(),
                "{}/{}",
                entry.id,
                sub.name
            );
        }
    }
}

#[test]
fn repeated_lookups_agree() {
    let r = resolver();
    for role in all_roles() {
        for entry in BUILTIN.entries() {
            let mut names: Vec<Option<&str>> = vec![None, Some(""), Some("Unlisted")];
            names.extend(entry.sub_entries.iter().map(|s| Some(s.name.as_str())));
            for name in names {
                let first = r.resolve_content(&entry.id, name);
                let second = r.resolve_content(&entry.id, name);
                assert_eq!(first, second, "{}/{name:?} at {role}", entry.id);

                let s = selection(&entry.id, name.unwrap_or(""), role.0);
                assert_eq!(r.resolve_selection(&s), r.resolve_selection(&s));
            }
        }
    }
}
