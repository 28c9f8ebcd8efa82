//! Game Store UI Components
//!
//! Dioxus components for the storefront: the password field, the cart list
//! and the account dropdown, plus the small pieces they are built from.
//!
//! ## Data Flow
//!
//! Components receive everything through props and report back through
//! event handlers. None of them reaches for global state:
//! - `PasswordField` owns only its [`PasswordFieldState`](gamestore_core::PasswordFieldState)
//! - `CartList` is handed `items` and a formatted `total` by its host
//! - `UserDropdown` renders [`account_links`](gamestore_core::account_links)

pub mod components;

pub use components::*;
