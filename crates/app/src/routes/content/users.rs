use super::{Panel, StaticTable};
use dioxus::prelude::*;
use shared_types::Role;

#[component]
pub fn AllUsers() -> Element {
    rsx! {
        Panel { title: "All Users", description: "Everyone with access to the console.",
            StaticTable {
                headers: vec!["Name", "Email", "Role"],
                rows: vec![
                    vec!["Jia Lin", "jia.lin@alphalab.dev", "admin"],
                    vec!["Karel Novak", "k.novak@alphalab.dev", "manager"],
                    vec!["Lucia Chen", "l.chen@alphalab.dev", "member"],
                ],
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        Panel { title: "Register", description: "Invite a new member to the lab.",
            p { "New accounts are created from the sign-up page and start as members." }
            Link { class: "content-button", to: crate::routes::Route::Signup {}, "Open sign-up form" }
        }
    }
}

#[component]
pub fn Permissions() -> Element {
    let levels: Vec<String> = Role::LEVELS
        .iter()
        .map(|role| format!("{role} (level {})", role.0))
        .collect();

    rsx! {
        Panel { title: "Permissions", description: "What each role unlocks in the navigation.",
            ul { class: "content-list",
                for level in levels {
                    li { "{level}" }
                }
            }
        }
    }
}
