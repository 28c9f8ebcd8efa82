//! Host-side password validation.
//!
//! Forms hand every reported password value to a [`PasswordCheck`]. After a
//! short debounce it runs the [`PasswordPolicy`] and publishes the outcome
//! through two signals the form passes straight to `PasswordField`:
//! `loading` while a check is pending, `error` once it failed.

use std::time::Duration;

use dioxus::prelude::*;
use gamestore_core::PasswordPolicy;

use crate::context::use_password_policy;

/// Status text shown while a check is pending
pub const VALIDATING: &str = "Validating...";

const DEBOUNCE: Duration = Duration::from_millis(400);

/// Run the policy and turn a failure into field error text.
pub fn settle(policy: &PasswordPolicy, value: &str) -> Option<String> {
    policy.validate(value).err().map(|e| e.to_string())
}

/// Debounced policy check bound to one form field.
#[derive(Clone, Copy, PartialEq)]
pub struct PasswordCheck {
    pub error: Signal<Option<String>>,
    pub loading: Signal<Option<String>>,
    valid: Signal<bool>,
    generation: Signal<u64>,
    policy: PasswordPolicy,
}

impl PasswordCheck {
    /// Queue a check of `value`, superseding any check still pending.
    pub fn submit(&mut self, value: String) {
        let generation = {
            let mut current = self.generation.write();
            *current += 1;
            *current
        };
        self.valid.set(false);
        self.loading.set(Some(VALIDATING.to_string()));

        let mut check = *self;
        spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            if *check.generation.peek() != generation {
                // A newer keystroke owns the result.
                return;
            }

            let error = settle(&check.policy, &value);
            tracing::debug!(valid = error.is_none(), "Password check settled");
            check.loading.set(None);
            check.valid.set(error.is_none());
            check.error.set(error);
        });
    }

    /// Whether the last settled check passed and nothing is pending.
    pub fn is_valid(&self) -> bool {
        *self.valid.read() && self.loading.read().is_none()
    }
}

/// Hook creating a [`PasswordCheck`] against the app's password policy.
pub fn use_password_check() -> PasswordCheck {
    let policy = use_password_policy();
    PasswordCheck {
        error: use_signal(|| None),
        loading: use_signal(|| None),
        valid: use_signal(|| false),
        generation: use_signal(|| 0),
        policy,
    }
}
