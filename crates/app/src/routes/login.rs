use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::LoginForm;
use shared_ui::FormField;
use std::collections::HashMap;
use tracing::info;

/// Sign-in page. There is no backend: a valid form is logged and the
/// viewer is sent to the console.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            email: email().trim().to_string(),
            password: password(),
        };
        match form.check() {
            Ok(()) => {
                field_errors.set(HashMap::new());
                info!(email = %form.email, "sign-in submitted");
                navigator().push(Route::Console {});
            }
            Err(e) => field_errors.set(e.field_errors),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Login" }

                form { class: "auth-form", onsubmit: handle_login,
                    FormField {
                        label: "Email",
                        input_type: "email",
                        placeholder: "m@email.com",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                        error: field_errors().get("email").cloned(),
                    }
                    FormField {
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                        error: field_errors().get("password").cloned(),
                    }
                    button { r#type: "submit", class: "auth-submit", "Login" }
                }

                p { class: "auth-link",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
