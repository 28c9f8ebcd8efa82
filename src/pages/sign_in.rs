//! Sign in page.
//!
//! Collects a display name and a password. The password is checked against
//! the local policy only; nothing leaves the device.

use dioxus::prelude::*;
use gamestore_ui::{Button, ButtonSize, PasswordField};

use crate::app::Route;
use crate::context::use_session;
use crate::validation::use_password_check;

#[component]
pub fn SignIn() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let mut check = use_password_check();
    let mut username = use_signal(String::new);

    let can_submit = !username.read().trim().is_empty() && check.is_valid();

    let submit = move |_: ()| {
        let name = username.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        tracing::info!("Signed in as {}", name);
        session.write().sign_in(name);
        navigator.push(Route::Home {});
    };

    rsx! {
        section { class: "page sign-in",
            h1 { class: "page-title", "Sign in" }
            form { class: "form",
                onsubmit: move |e| e.prevent_default(),
                div { class: "form-field",
                    label { class: "input-label", r#for: "username", "Username" }
                    input {
                        id: "username",
                        class: "input-field",
                        r#type: "text",
                        value: "{username}",
                        placeholder: "Your name",
                        oninput: move |e| username.set(e.value()),
                    }
                }
                PasswordField {
                    label: "Password".to_string(),
                    name: "password".to_string(),
                    placeholder: "Your password".to_string(),
                    error: check.error.read().clone(),
                    loading: check.loading.read().clone(),
                    on_input_change: move |value: String| check.submit(value),
                }
                Button {
                    size: ButtonSize::Large,
                    disabled: !can_submit,
                    onclick: submit,
                    "Sign in now"
                }
            }
        }
    }
}
