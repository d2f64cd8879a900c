use super::Panel;
use dioxus::prelude::*;

#[component]
pub fn General() -> Element {
    let mut lab_name = use_signal(|| "AlphaLab".to_string());

    rsx! {
        Panel { title: "General", description: "Basic lab information.",
            label { class: "content-form-label", "Lab name" }
            input {
                class: "content-form-input",
                value: lab_name(),
                oninput: move |evt| lab_name.set(evt.value()),
            }
        }
    }
}

#[component]
pub fn Security() -> Element {
    rsx! {
        Panel { title: "Security", description: "Password and session policy.",
            ul { class: "content-list",
                li { "Passwords must be 8 to 100 characters." }
                li { "Sessions expire after 12 hours of inactivity." }
            }
        }
    }
}

#[component]
pub fn Notifications() -> Element {
    let mut email_digest = use_signal(|| true);

    rsx! {
        Panel { title: "Notifications", description: "How the lab is told about approvals.",
            label { class: "content-checkbox",
                input {
                    r#type: "checkbox",
                    checked: email_digest(),
                    onchange: move |evt| email_digest.set(evt.checked()),
                }
                "Send a daily email digest of pending approvals"
            }
        }
    }
}

#[component]
pub fn Integrations() -> Element {
    rsx! {
        Panel { title: "Integrations", description: "External services connected to the lab.",
            p { "No integrations are configured." }
        }
    }
}
