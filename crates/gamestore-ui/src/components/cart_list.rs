//! Cart List Component
//!
//! Lists the cart's games with a total footer, or an empty state.
//! The host supplies `items` and the already formatted `total`; this
//! component does no cart arithmetic.

use dioxus::prelude::*;
use gamestore_core::CartItem;

use super::{ButtonLink, Empty, GameItem};

pub const EMPTY_CART_TITLE: &str = "Your cart is empty";
pub const EMPTY_CART_DESCRIPTION: &str = "Go back to the store and explore great games and offers.";

/// Properties for the CartList component
#[derive(Props, Clone, PartialEq)]
pub struct CartListProps {
    /// Cart entries, in display order
    pub items: Vec<CartItem>,
    /// Formatted total, e.g. "$215.00"
    pub total: String,
    /// Compact mode for the header dropdown: hides the "Total:" caption and
    /// shows a "Buy it now" link to the cart page
    #[props(default = false)]
    pub has_button: bool,
    #[props(default)]
    pub on_remove: Option<EventHandler<String>>,
}

#[component]
pub fn CartList(props: CartListProps) -> Element {
    tracing::debug!(items = props.items.len(), total = %props.total, "Rendering cart list");

    let is_empty = props.items.is_empty();

    rsx! {
        div { class: if is_empty { "cart-list empty" } else { "cart-list" },
            if is_empty {
                Empty {
                    title: EMPTY_CART_TITLE.to_string(),
                    description: EMPTY_CART_DESCRIPTION.to_string(),
                    has_link: true,
                }
            } else {
                for item in props.items.iter() {
                    GameItem {
                        key: "{item.id}",
                        item: item.clone(),
                        on_remove: props.on_remove,
                    }
                }
                footer { class: "cart-list-footer",
                    if !props.has_button {
                        span { class: "cart-list-total-caption", "Total:" }
                    }
                    span { class: "cart-list-total", "{props.total}" }
                    if props.has_button {
                        ButtonLink { to: "/cart".to_string(), "Buy it now" }
                    }
                }
            }
        }
    }
}
