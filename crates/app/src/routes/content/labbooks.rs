use super::{Panel, StaticTable};
use dioxus::prelude::*;
use tracing::info;

#[component]
pub fn Upload() -> Element {
    let mut file_name = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let queued = file_name();

    rsx! {
        Panel { title: "Upload", description: "Submit a signed lab book for review.",
            form {
                class: "content-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if !file_name().trim().is_empty() {
                        info!(file = %file_name(), "lab book queued for review");
                        submitted.set(true);
                    }
                },
                label { class: "content-form-label", "Lab book title" }
                input {
                    class: "content-form-input",
                    value: file_name(),
                    oninput: move |evt| {
                        submitted.set(false);
                        file_name.set(evt.value());
                    },
                }
                button { class: "content-button", r#type: "submit", "Submit for approval" }
            }
            if submitted() {
                p { class: "content-notice", "\"{queued}\" was queued for approval." }
            }
        }
    }
}

#[component]
pub fn Approval() -> Element {
    rsx! {
        Panel { title: "Approval", description: "Lab books waiting for a manager's signature.",
            StaticTable {
                headers: vec!["Title", "Author", "Submitted"],
                rows: vec![
                    vec!["Buffer calibration", "L. Chen", "2024-11-04"],
                    vec!["Cell culture week 12", "M. Ortiz", "2024-11-05"],
                    vec!["Spectrometer baseline", "A. Rahman", "2024-11-06"],
                ],
            }
        }
    }
}

#[component]
pub fn History() -> Element {
    rsx! {
        Panel { title: "History", description: "Lab books you have submitted.",
            StaticTable {
                headers: vec!["Title", "Status", "Reviewed by"],
                rows: vec![
                    vec!["PCR optimisation", "Approved", "K. Novak"],
                    vec!["Reagent inventory", "Approved", "K. Novak"],
                    vec!["Microscopy session", "Returned", "J. Lin"],
                ],
            }
        }
    }
}
