use dioxus::prelude::*;

mod config;
mod routes;
mod shell;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The logger is installed by `dioxus::launch`; load config after it so
    // fallback warnings are recorded.
    use_hook(|| {
        config::load();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
