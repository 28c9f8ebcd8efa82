//! Profile page - account details and password change.

use dioxus::prelude::*;
use gamestore_ui::{Button, ButtonLink, PasswordField};

use crate::app::Route;
use crate::context::use_session;
use crate::validation::use_password_check;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut check = use_password_check();
    let mut current = use_signal(String::new);
    let mut saved = use_signal(|| false);

    let Some(username) = session.read().username.clone() else {
        return rsx! {
            section { class: "page profile",
                h1 { class: "page-title", "My profile" }
                p { class: "body-text", "Sign in to manage your account." }
                ButtonLink { to: Route::SignIn {}.to_string(), "Sign in" }
            }
        };
    };

    let is_saved = saved();
    let can_save = !is_saved && !current.read().is_empty() && check.is_valid();

    rsx! {
        section { class: "page profile",
            h1 { class: "page-title", "My profile" }
            p { class: "profile-username", "{username}" }

            form { class: "form",
                onsubmit: move |e| e.prevent_default(),
                PasswordField {
                    label: "Current password".to_string(),
                    name: "current-password".to_string(),
                    placeholder: "Type your current password".to_string(),
                    disabled: is_saved,
                    on_input_change: move |value: String| current.set(value),
                }
                PasswordField {
                    label: "New password".to_string(),
                    name: "new-password".to_string(),
                    placeholder: "Type your new password".to_string(),
                    disabled: is_saved,
                    error: check.error.read().clone(),
                    loading: check.loading.read().clone(),
                    on_input_change: move |value: String| check.submit(value),
                }
                Button {
                    disabled: !can_save,
                    onclick: move |_| {
                        tracing::info!("Password change accepted locally");
                        saved.set(true);
                    },
                    "Save"
                }
                if is_saved {
                    p { class: "form-success", role: "status", "Password updated" }
                }
            }
        }
    }
}
