use dioxus::prelude::*;

/// Header path such as `Lab Books / Upload`.
///
/// Each segment is a `(label, current)` pair; the current segment is marked
/// with `aria-current="page"` and separators are drawn between segments.
#[component]
pub fn Breadcrumb(segments: Vec<(String, bool)>) -> Element {
    let last = segments.len().saturating_sub(1);

    rsx! {
        nav { "aria-label": "breadcrumb",
            ol { class: "breadcrumb-list",
                for (i, (label, current)) in segments.into_iter().enumerate() {
                    li {
                        class: "breadcrumb-item",
                        "aria-current": current.then_some("page"),
                        "{label}"
                    }
                    if i < last {
                        li { class: "breadcrumb-separator", "aria-hidden": "true", "/" }
                    }
                }
            }
        }
    }
}
