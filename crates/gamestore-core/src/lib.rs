//! Game Store Core Library
//!
//! UI-free state behind the storefront components.
//!
//! ## Overview
//!
//! Everything here is plain Rust with no rendering dependency, so the
//! invariants the components rely on can be checked in isolation:
//!
//! - **PasswordFieldState**: text plus two independent flags (masking and
//!   toggle visibility), driven by keystrokes and toggle activations
//! - **FocusRing**: sequential keyboard navigation that skips disabled fields
//! - **CartStore**: the explicit cart store injected into components, with a
//!   derived total
//! - **Account menu**: entries and destinations for the user dropdown
//! - **PasswordPolicy**: host-side validation feeding a field's error text
//!
//! ## Quick Start
//!
//! ```
//! use gamestore_core::{Keystroke, Masking, PasswordFieldState};
//!
//! let mut field = PasswordFieldState::new("");
//! assert!(!field.is_toggle_shown());
//!
//! let change = field.apply(Keystroke::Insert('a'));
//! assert_eq!(change.as_deref(), Some("a"));
//! assert!(field.is_toggle_shown());
//!
//! assert_eq!(field.toggle_masking(), Masking::Unmasked);
//! assert_eq!(field.text(), "a");
//! ```

pub mod cart;
pub mod error;
pub mod focus;
pub mod menu;
pub mod password;
pub mod policy;

// Re-exports
pub use cart::{CartItem, CartStore, Money};
pub use error::StoreError;
pub use focus::{FocusRing, Focusable};
pub use menu::{account_links, AccountDestination, AccountLink};
pub use password::{InputChange, Keystroke, Masking, PasswordFieldState};
pub use policy::{PasswordPolicy, PolicyError};
