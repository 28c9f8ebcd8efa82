//! Home page - featured games with add/remove cart actions.

use dioxus::prelude::*;
use gamestore_core::{CartItem, Money};
use gamestore_ui::{Button, ButtonSize, ButtonVariant};

use crate::context::use_cart;

/// Games featured on the home page.
pub fn featured_games() -> Vec<CartItem> {
    vec![
        CartItem::new("red-dead-redemption-2", "Red Dead Redemption 2", Money::from_cents(21500))
            .with_img("https://source.unsplash.com/user/willianjusten/300x140"),
        CartItem::new("borderlands-3", "Borderlands 3", Money::from_cents(4999))
            .with_img("https://source.unsplash.com/user/willianjusten/300x141"),
        CartItem::new("cyberpunk-2077", "Cyberpunk 2077", Money::from_cents(5999))
            .with_img("https://source.unsplash.com/user/willianjusten/300x142"),
        CartItem::new("hades", "Hades", Money::ZERO),
    ]
}

#[component]
pub fn Home() -> Element {
    let mut cart = use_cart();
    let games = use_hook(featured_games);

    rsx! {
        section { class: "page home",
            h1 { class: "page-title", "Featured games" }
            div { class: "game-grid",
                for game in games {
                    {
                        let in_cart = cart.read().is_in_cart(&game.id);
                        let id = game.id.clone();
                        let item = game.clone();
                        rsx! {
                            article { key: "{game.id}", class: "game-card",
                                if !game.img.is_empty() {
                                    img { class: "game-card-image", src: "{game.img}", alt: "{game.title}" }
                                }
                                h2 { class: "game-card-title", "{game.title}" }
                                span { class: "game-card-price", "{game.price}" }
                                if in_cart {
                                    Button {
                                        variant: ButtonVariant::Minimal,
                                        size: ButtonSize::Small,
                                        onclick: move |_| { cart.write().remove(&id); },
                                        "Remove from cart"
                                    }
                                } else {
                                    Button {
                                        size: ButtonSize::Small,
                                        onclick: move |_| { cart.write().add(item.clone()); },
                                        "Add to cart"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
