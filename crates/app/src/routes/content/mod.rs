//! Pages rendered in the console's main panel, one per content handle.

mod dashboard;
mod labbooks;
mod resources;
mod schedule;
mod settings;
mod users;

use dioxus::prelude::*;
use shared_types::ContentKey;

/// Bind a content handle to its page.
#[component]
pub fn ContentPage(content: ContentKey) -> Element {
    match content {
        ContentKey::DashboardOverview => rsx! { dashboard::Overview {} },
        ContentKey::LabBookUpload => rsx! { labbooks::Upload {} },
        ContentKey::LabBookApproval => rsx! { labbooks::Approval {} },
        ContentKey::LabBookHistory => rsx! { labbooks::History {} },
        ContentKey::Schedule => rsx! { schedule::Schedule {} },
        ContentKey::Resources => rsx! { resources::Resources {} },
        ContentKey::UsersAll => rsx! { users::AllUsers {} },
        ContentKey::UsersRegister => rsx! { users::Register {} },
        ContentKey::UsersPermissions => rsx! { users::Permissions {} },
        ContentKey::SettingsGeneral => rsx! { settings::General {} },
        ContentKey::SettingsSecurity => rsx! { settings::Security {} },
        ContentKey::SettingsNotifications => rsx! { settings::Notifications {} },
        ContentKey::SettingsIntegrations => rsx! { settings::Integrations {} },
    }
}

/// Shown when a tab or sub-tab has no page yet.
#[component]
pub fn Placeholder(title: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./content.css") }
        div { class: "content-panel content-placeholder",
            p { "Content for {title} is not yet implemented." }
        }
    }
}

/// Titled panel wrapping a page body.
#[component]
fn Panel(title: String, #[props(default)] description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./content.css") }
        section { class: "content-panel",
            h2 { class: "content-title", "{title}" }
            if !description.is_empty() {
                p { class: "content-description", "{description}" }
            }
            {children}
        }
    }
}

/// Simple table of string rows.
#[component]
fn StaticTable(headers: Vec<&'static str>, rows: Vec<Vec<&'static str>>) -> Element {
    rsx! {
        table { class: "content-table",
            thead {
                tr {
                    for header in headers {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        for cell in row {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
