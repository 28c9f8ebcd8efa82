//! Sign out page - forgets the local session and cart on arrival.

use dioxus::prelude::*;
use gamestore_ui::{ButtonLink, ButtonVariant};

use crate::context::{use_cart, use_session};

#[component]
pub fn SignOut() -> Element {
    let mut session = use_session();
    let mut cart = use_cart();

    use_effect(move || {
        if let Some(name) = session.peek().username.as_deref() {
            tracing::info!("Signing out {}", name);
        }
        session.write().sign_out();
        cart.write().clear();
    });

    rsx! {
        section { class: "page sign-out",
            h1 { class: "page-title", "You have been signed out" }
            p { class: "body-text", "Your cart was cleared on this device." }
            ButtonLink { to: "/".to_string(), variant: ButtonVariant::Minimal, "Back to the store" }
        }
    }
}
