pub mod content;
pub mod login;
pub mod not_found;
pub mod signup;

use crate::config;
use crate::shell::{use_shell, use_viewport_tracking, ShellState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdFileText, LdFolder, LdLayoutDashboard, LdPackage, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{ContentResolution, Role};
use shared_ui::{
    Breadcrumb, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarMenuSub, SidebarMenuSubButton, SidebarProvider,
    SidebarSeparator, SidebarTrigger,
};
use tracing::error;

use content::{ContentPage, Placeholder};
use login::Login;
use not_found::NotFound;
use signup::Signup;

const APP_NAME: &str = "AlphaLab";
const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AppLayout)]
    #[route("/")]
    Console {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Page shell: role-filtered sidebar, breadcrumb header and content area.
#[component]
fn AppLayout() -> Element {
    let shell = use_context_provider(|| ShellState::new(config::shell_settings().dev_role));
    use_viewport_tracking(shell);

    let resolver = config::resolver();
    let current = (shell.selection)();
    let entries = resolver.visible_entries(current.viewer_role);
    let crumbs: Vec<(String, bool)> = resolver
        .breadcrumb(&current)
        .into_iter()
        .map(|c| (c.label, c.current))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { state: shell.sidebar,
            Sidebar {
                SidebarHeader { title: "{APP_NAME}", subtitle: "{APP_VERSION}" }

                SidebarContent {
                    SidebarMenu {
                        for entry in entries {
                            NavEntry { key: "{entry.id}", entry_id: entry.id.clone() }
                        }
                    }
                }

                SidebarSeparator {}

                SidebarFooter {
                    RoleSwitcher {}
                }
            }

            SidebarInset {
                header { class: "shell-header",
                    SidebarTrigger {
                        span { class: "shell-trigger-icon", "\u{2630}" }
                    }
                    Breadcrumb { segments: crumbs }
                }

                div { class: "shell-content",
                    Outlet::<Route> {}
                }

                footer { class: "shell-footer",
                    p {
                        "Copyright \u{00A9} "
                        a {
                            href: "https://github.com/JRay-Lin/AlphaLab",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{APP_NAME}"
                        }
                        ". All Rights Reserved."
                    }
                }
            }
        }
    }
}

/// One top-level sidebar entry and, when it has visible sub-entries, its
/// sub-menu.
#[component]
fn NavEntry(entry_id: String) -> Element {
    let shell = use_shell();
    let resolver = config::resolver();
    let Some(entry) = resolver.find_entry(&entry_id) else {
        return rsx! {};
    };

    let current = (shell.selection)();
    let subs = resolver.visible_sub_entries(entry, current.viewer_role);
    let expandable = !subs.is_empty();
    let expanded = (shell.expanded)().as_deref() == Some(entry.id.as_str());
    let active_tab = current.active_tab_id == entry.id;

    let label = entry.display_label().to_string();
    let select_id = entry.id.clone();
    let toggle_id = entry.id.clone();

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active: active_tab,
                expandable,
                expanded,
                on_select: move |_| shell.activate_tab(&select_id),
                on_toggle: move |_| shell.toggle_expanded(&toggle_id),
                {entry_icon(&entry.id)}
                "{label}"
            }
            if expandable && expanded {
                SidebarMenuSub {
                    for sub in subs {
                        SubEntryButton {
                            key: "{sub.name}",
                            tab_id: entry.id.clone(),
                            name: sub.name.clone(),
                            active: active_tab && current.active_sub_tab_name == sub.name,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubEntryButton(tab_id: String, name: String, active: bool) -> Element {
    let shell = use_shell();
    let label = name.clone();

    rsx! {
        SidebarMenuSubButton {
            active,
            on_select: move |_| shell.activate_sub_tab(&tab_id, &name),
            "{label}"
        }
    }
}

/// Development stand-in for sign-in: picks the viewer role.
#[component]
fn RoleSwitcher() -> Element {
    let shell = use_shell();
    let role = (shell.selection)().viewer_role;

    rsx! {
        label { class: "role-switcher",
            span { class: "role-switcher-label", "Viewing as" }
            select {
                value: role.0.to_string(),
                onchange: move |evt| shell.change_role(Role::from_str_or_default(&evt.value())),
                for level in Role::LEVELS {
                    option {
                        value: level.0.to_string(),
                        selected: level == role,
                        "{level}"
                    }
                }
            }
        }
    }
}

/// Main panel: the page for the resolved content handle, or a placeholder.
#[component]
fn Console() -> Element {
    let shell = use_shell();
    let resolver = config::resolver();
    let current = (shell.selection)();

    if current.active_tab_id.is_empty() {
        return rsx! {};
    }

    match resolver.resolve_selection(&current) {
        ContentResolution::Found(content) => rsx! { ContentPage { content } },
        ContentResolution::NotImplemented => rsx! {
            Placeholder { title: resolver.placeholder_title(&current) }
        },
        ContentResolution::UnknownTab => {
            error!(tab = %current.active_tab_id, "selection points at a tab missing from the catalog");
            rsx! {}
        }
    }
}

/// Icons are bound at the render boundary; the catalog only carries ids.
fn entry_icon(id: &str) -> Element {
    match id {
        "dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 } },
        "labbooks" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
        "schedules" => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
        "resources" => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 } },
        _ => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 } },
    }
}
