//! Password Field Component
//!
//! Single-line input that masks its content by default, with an eye icon
//! that reveals or hides it. The icon stays in the markup at all times but
//! is only visible once something has been typed.
//!
//! The field does not validate. Hosts run their own checks on the values
//! reported through `on_input_change` and pass the outcome back as
//! `loading` and `error` text.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use gamestore_core::{Masking, PasswordFieldState};

use super::icons::{VisibilityIcon, VisibilityOffIcon};

/// Test id carried by the password `<input>`
pub const PASSWORD_INPUT_TEST_ID: &str = "password-input";

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

/// Generate a unique id for fields rendered without a `name`
fn next_field_id() -> String {
    format!("password-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

/// Properties for the PasswordField component
#[derive(Clone, PartialEq, Props, Default)]
pub struct PasswordFieldProps {
    /// Label text; no `<label>` is rendered without it
    #[props(default)]
    pub label: Option<String>,
    /// Form name, also used as the input id for label association
    #[props(default)]
    pub name: Option<String>,
    /// Value the field starts with
    #[props(default)]
    pub initial_value: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Rejects all input and leaves the tab order
    #[props(default = false)]
    pub disabled: bool,
    /// Host validation message, shown below the field
    #[props(default)]
    pub error: Option<String>,
    /// Host status text while it validates, e.g. "Validating..."
    #[props(default)]
    pub loading: Option<String>,
    /// Called once per accepted edit with the full value
    #[props(default)]
    pub on_input_change: Option<EventHandler<String>>,
}

/// Masked text input with a show/hide toggle
///
/// # Example
///
/// ```rust,ignore
/// let mut password = use_signal(String::new);
///
/// rsx! {
///     PasswordField {
///         label: "Password".to_string(),
///         name: "password".to_string(),
///         placeholder: "Your password".to_string(),
///         on_input_change: move |value| password.set(value),
///     }
/// }
/// ```
#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let field = use_password_field(&props);
    render_password_field(field, &props)
}

/// Event wiring between the rendered field and its [`PasswordFieldState`].
///
/// `input` is what the DOM `input` event runs; `toggle` is what a click on
/// the eye icon runs. Both go through the state machine, so a disabled
/// field reports nothing and a hidden toggle does nothing.
#[derive(Clone, Copy, PartialEq)]
pub struct PasswordFieldController {
    field: Signal<PasswordFieldState>,
    disabled: bool,
    on_input_change: Option<EventHandler<String>>,
}

impl PasswordFieldController {
    /// Apply a new input value, notifying the host when it was accepted.
    pub fn input(&mut self, value: &str) {
        let change = {
            let mut state = self.field.write();
            state.set_disabled(self.disabled);
            state.replace(value)
        };
        if let Some(value) = change {
            if let Some(handler) = self.on_input_change {
                handler.call(value);
            }
        }
    }

    /// Activate the show/hide toggle.
    pub fn toggle(&mut self) -> Masking {
        let masking = self.field.write().toggle_masking();
        tracing::trace!(?masking, "Password toggle activated");
        masking
    }

    /// Current state with the host's `disabled` flag applied.
    pub fn snapshot(&self) -> PasswordFieldState {
        self.field.read().clone().with_disabled(self.disabled)
    }
}

/// Hook owning a password field's state for the given props.
pub fn use_password_field(props: &PasswordFieldProps) -> PasswordFieldController {
    let disabled = props.disabled;
    let initial = props.initial_value.clone().unwrap_or_default();
    let field = use_signal(move || PasswordFieldState::new(initial).with_disabled(disabled));

    PasswordFieldController {
        field,
        disabled,
        on_input_change: props.on_input_change,
    }
}

/// Markup of a password field driven by `field`.
pub fn render_password_field(field: PasswordFieldController, props: &PasswordFieldProps) -> Element {
    let fallback_id = use_hook(next_field_id);
    let id = props.name.clone().unwrap_or(fallback_id);

    let state = field.snapshot();
    let text = state.text().to_string();
    let toggle_shown = state.is_toggle_shown();
    let disabled = state.is_disabled();
    let tab_index = state.tab_index();

    let label = props.label.as_deref().filter(|l| !l.is_empty());
    let error = props.error.as_deref().filter(|e| !e.is_empty());
    let loading = props.loading.as_deref().filter(|l| !l.is_empty());

    let mut wrapper_class = String::from("password-field");
    if error.is_some() {
        wrapper_class.push_str(" has-error");
    }
    if disabled {
        wrapper_class.push_str(" disabled");
    }

    let mut on_input = field;
    let mut on_toggle = field;

    rsx! {
        div { class: "{wrapper_class}",
            if let Some(label) = label {
                label { class: "password-label", r#for: "{id}", "{label}" }
            }
            div { class: "password-input-wrapper",
                input {
                    id: "{id}",
                    class: "password-input",
                    "data-testid": PASSWORD_INPUT_TEST_ID,
                    name: props.name.clone(),
                    r#type: state.input_type(),
                    value: "{text}",
                    placeholder: props.placeholder.clone(),
                    disabled: disabled,
                    tabindex: "{tab_index}",
                    oninput: move |event: FormEvent| on_input.input(&event.value()),
                }
                span {
                    class: "password-toggle",
                    role: "img",
                    "aria-label": state.toggle_label(),
                    "aria-hidden": if toggle_shown { "false" } else { "true" },
                    style: if toggle_shown { "visibility: visible;" } else { "visibility: hidden;" },
                    onclick: move |_| {
                        on_toggle.toggle();
                    },
                    if state.masking() == Masking::Masked {
                        VisibilityIcon { size: 24 }
                    } else {
                        VisibilityOffIcon { size: 24 }
                    }
                }
                if let Some(loading) = loading {
                    span { class: "password-loading", role: "status", "{loading}" }
                }
            }
            if let Some(error) = error {
                p { class: "password-error", role: "alert", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let first = next_field_id();
        let second = next_field_id();
        assert_ne!(first, second);
        assert!(first.starts_with("password-"));
    }
}
