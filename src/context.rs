//! Context providers for the storefront.
//!
//! The App component provides the cart store, the session and the password
//! policy once; pages and the header read them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut cart = use_cart();
//! cart.write().add(item);
//! let total = cart.read().formatted_total();
//! ```

use dioxus::prelude::*;
use gamestore_core::{CartStore, PasswordPolicy};

/// Who is using the storefront.
///
/// Only a display name is kept; there is no credential here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
}

impl Session {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn sign_out(&mut self) {
        self.username = None;
    }
}

/// Hook to access the cart store from context.
pub fn use_cart() -> Signal<CartStore> {
    use_context::<Signal<CartStore>>()
}

/// Hook to access the current session.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the password rules hosts validate against.
pub fn use_password_policy() -> PasswordPolicy {
    use_context::<PasswordPolicy>()
}
