use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::SignupForm;
use shared_ui::FormField;
use std::collections::HashMap;
use tracing::info;

/// Account creation page. The invitation fixes email and role; the new
/// member picks a name and password.
#[component]
pub fn Signup() -> Element {
    let mut form = use_signal(|| SignupForm {
        email: "default@gmail.com".to_string(),
        role_id: "1".to_string(),
        ..SignupForm::default()
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitted = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        match current.check() {
            Ok(()) => {
                field_errors.set(HashMap::new());
                info!(email = %current.email, role = %current.role_name, "sign-up submitted");
                submitted.set(true);
            }
            Err(e) => {
                submitted.set(false);
                field_errors.set(e.field_errors);
            }
        }
    };

    let values = form();
    let name = values.name.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Sign up" }

                if submitted() {
                    div { class: "auth-success",
                        "Account request for {name} was recorded. "
                        Link { to: Route::Login {}, "Continue to login" }
                    }
                }

                form { class: "auth-form", onsubmit: handle_signup,
                    FormField {
                        label: "Email",
                        value: values.email.clone(),
                        disabled: true,
                        error: field_errors().get("email").cloned(),
                    }
                    div { class: "auth-row",
                        FormField {
                            label: "Role name",
                            value: values.role_name.clone(),
                            disabled: true,
                        }
                        FormField {
                            label: "Role ID",
                            value: values.role_id.clone(),
                            disabled: true,
                        }
                    }
                    FormField {
                        label: "Name",
                        value: values.name.clone(),
                        on_input: move |e: FormEvent| form.with_mut(|f| f.name = e.value()),
                        error: field_errors().get("name").cloned(),
                    }
                    FormField {
                        label: "Password",
                        input_type: "password",
                        value: values.password.clone(),
                        on_input: move |e: FormEvent| form.with_mut(|f| f.password = e.value()),
                        error: field_errors().get("password").cloned(),
                    }
                    button { r#type: "submit", class: "auth-submit", "Sign up" }
                }
            }
        }
    }
}
