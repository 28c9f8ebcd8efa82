//! Store Shell Layout
//!
//! Header shared by every page: store name, cart dropdown with item
//! count, and either the account menu or a sign-in link.

use dioxus::prelude::*;
use gamestore_ui::icons::ShoppingCartIcon;
use gamestore_ui::{ButtonLink, ButtonSize, CartList, Dropdown, UserDropdown};

use crate::app::Route;
use crate::context::{use_cart, use_session};

#[component]
pub fn StoreShell() -> Element {
    let cart = use_cart();
    let session = use_session();

    let (items, total, quantity) = {
        let cart = cart.read();
        (cart.items().to_vec(), cart.formatted_total(), cart.quantity())
    };
    let username = session.read().username.clone();

    rsx! {
        div { class: "store",
            header { class: "store-header",
                Link { to: Route::Home {}, class: "store-logo", "Game Store" }

                div { class: "store-header-actions",
                    div { class: "cart-dropdown",
                        Dropdown {
                            title: rsx! {
                                ShoppingCartIcon { size: 24 }
                                if quantity > 0 {
                                    span { class: "cart-badge", "aria-label": "Cart items", "{quantity}" }
                                }
                            },
                            CartList { items: items, total: total, has_button: true }
                        }
                    }

                    if let Some(name) = &username {
                        UserDropdown { username: name.clone() }
                    } else {
                        ButtonLink { to: Route::SignIn {}.to_string(), size: ButtonSize::Small, "Sign in" }
                    }
                }
            }

            main { class: "store-main",
                Outlet::<Route> {}
            }
        }
    }
}
