//! Cart page - the full cart with a "Total:" footer.

use dioxus::prelude::*;
use gamestore_ui::CartList;

use crate::context::use_cart;

#[component]
pub fn Cart() -> Element {
    let mut cart = use_cart();
    let (items, total) = {
        let cart = cart.read();
        (cart.items().to_vec(), cart.formatted_total())
    };

    rsx! {
        section { class: "page cart",
            h1 { class: "page-title", "My cart" }
            CartList {
                items: items,
                total: total,
                on_remove: move |id: String| {
                    cart.write().remove(&id);
                },
            }
        }
    }
}
