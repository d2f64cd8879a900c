use crate::config;
use dioxus::prelude::*;
use shared_types::{LayoutMode, Role, Selection};
use shared_ui::SidebarState;

/// Navigation state owned by the page shell and shared with its pages.
///
/// The resolver is pure; every click runs the current [`Selection`] through
/// it and stores the result here.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub selection: Signal<Selection>,
    pub layout: Signal<LayoutMode>,
    pub sidebar: Signal<SidebarState>,
    /// Entry whose sub-menu is unfolded in the sidebar.
    pub expanded: Signal<Option<String>>,
}

impl ShellState {
    pub fn new(role: Role) -> Self {
        let selection = config::resolver().initial_selection(role);
        let expanded = Some(selection.active_tab_id.clone());
        Self {
            selection: Signal::new(selection),
            layout: Signal::new(LayoutMode::Desktop),
            sidebar: Signal::new(SidebarState::for_layout(true)),
            expanded: Signal::new(expanded),
        }
    }

    pub fn activate_tab(mut self, tab_id: &str) {
        let next = config::resolver().on_tab_activated(&self.selection.peek(), tab_id);
        self.selection.set(next);
        self.close_if_mobile();
    }

    pub fn activate_sub_tab(mut self, tab_id: &str, sub_tab_name: &str) {
        let next =
            config::resolver().on_sub_tab_activated(&self.selection.peek(), tab_id, sub_tab_name);
        self.selection.set(next);
        self.close_if_mobile();
    }

    pub fn change_role(mut self, role: Role) {
        let next = config::resolver().on_role_changed(&self.selection.peek(), role);
        self.expanded.set(Some(next.active_tab_id.clone()));
        self.selection.set(next);
    }

    pub fn toggle_expanded(mut self, tab_id: &str) {
        let next = match self.expanded.peek().as_deref() {
            Some(open) if open == tab_id => None,
            _ => Some(tab_id.to_string()),
        };
        self.expanded.set(next);
    }

    pub fn set_layout(mut self, mode: LayoutMode) {
        if *self.layout.peek() != mode {
            self.layout.set(mode);
            self.sidebar.set(SidebarState::for_layout(mode.is_desktop()));
        }
    }

    fn close_if_mobile(mut self) {
        if !self.layout.peek().is_desktop() {
            self.sidebar.with_mut(|s| s.close());
        }
    }
}

pub fn use_shell() -> ShellState {
    use_context::<ShellState>()
}

/// Script that reports the viewport width now and after each resize,
/// debounced by `debounce_ms`.
pub fn viewport_script(debounce_ms: u64) -> String {
    format!(
        r#"
        let timer = null;
        const report = () => dioxus.send(window.innerWidth);
        report();
        window.addEventListener("resize", () => {{
            clearTimeout(timer);
            timer = setTimeout(report, {debounce_ms});
        }});
        "#
    )
}

/// Keep the shell's layout mode in step with the viewport width.
pub fn use_viewport_tracking(shell: ShellState) {
    use_future(move || async move {
        let settings = config::shell_settings();
        let mut eval = document::eval(&viewport_script(settings.resize_debounce_ms));
        while let Ok(width) = eval.recv::<u32>().await {
            shell.set_layout(settings.layout_mode(width));
        }
    });
}
