use super::Panel;
use dioxus::prelude::*;

/// (label, value) pairs for the overview cards.
const STATS: &[(&str, &str)] = &[
    ("Lab books this month", "12"),
    ("Pending approvals", "3"),
    ("Bookings today", "5"),
    ("Active members", "18"),
];

#[component]
pub fn Overview() -> Element {
    rsx! {
        Panel { title: "Overview", description: "Activity across the lab at a glance.",
            div { class: "stat-grid",
                for (label, value) in STATS.iter() {
                    div { class: "stat-card",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }
        }
    }
}
