use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Open/closed state of the sidebar, owned by the page shell.
///
/// A pinned sidebar (desktop layout) is always open and ignores toggles;
/// an unpinned one (mobile layout) overlays the page and can be dismissed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
    pub pinned: bool,
}

impl SidebarState {
    pub fn for_layout(pinned: bool) -> Self {
        Self {
            open: pinned,
            pinned,
        }
    }

    pub fn toggle(&mut self) {
        if !self.pinned {
            self.open = !self.open;
        }
    }

    pub fn close(&mut self) {
        if !self.pinned {
            self.open = false;
        }
    }
}

/// Provides the shell's sidebar state to the sidebar components below it.
#[component]
pub fn SidebarProvider(state: Signal<SidebarState>, children: Element) -> Element {
    use_context_provider(|| state);
    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if current.open { "true" } else { "false" },
            "data-sidebar-pinned": if current.pinned { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar container. Unpinned and open, it shows a backdrop that
/// closes it when tapped.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if current.open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.open && !current.pinned {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.with_mut(|s| s.close()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Title block at the top of the sidebar.
#[component]
pub fn SidebarHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "sidebar-header",
            span { class: "sidebar-brand-name", "{title}" }
            if !subtitle.is_empty() {
                span { class: "sidebar-brand-version", "{subtitle}" }
            }
        }
    }
}

/// Scrollable content area of the sidebar.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

/// Footer area of the sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Top-level menu button.
///
/// An expandable button owns a sub-menu: it shows a chevron and toggles the
/// sub-menu instead of firing `on_select`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default = false)] expandable: bool,
    #[props(default = false)] expanded: bool,
    #[props(default)] on_select: EventHandler<()>,
    #[props(default)] on_toggle: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let aria_expanded = expandable.then_some(if expanded { "true" } else { "false" });

    rsx! {
        button {
            r#type: "button",
            "aria-expanded": aria_expanded,
            onclick: move |_| {
                if expandable {
                    on_toggle.call(());
                } else {
                    on_select.call(());
                }
            },
            ..merged,
            span { class: "sidebar-menu-button-label", {children} }
            if expandable {
                span {
                    class: "sidebar-menu-chevron",
                    "data-expanded": if expanded { "true" } else { "false" },
                    "\u{203A}"
                }
            }
        }
    }
}

/// Nested list under an expandable menu button.
#[component]
pub fn SidebarMenuSub(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu-sub", {children} }
    }
}

#[component]
pub fn SidebarMenuSubButton(
    #[props(default = false)] active: bool,
    on_select: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-sub-item",
            button {
                r#type: "button",
                class: "sidebar-menu-sub-button",
                "data-active": if active { "true" } else { "false" },
                onclick: move |_| on_select.call(()),
                {children}
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Opens or closes an unpinned sidebar. Hidden while pinned.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    if state().pinned {
        return rsx! {};
    }

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| state.with_mut(|s| s.toggle()),
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// The main content area beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
