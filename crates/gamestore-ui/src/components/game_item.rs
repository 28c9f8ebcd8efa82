//! Game Item Component
//!
//! One row of the cart: cover image, title and price.

use dioxus::prelude::*;
use gamestore_core::CartItem;

#[derive(Props, Clone, PartialEq)]
pub struct GameItemProps {
    pub item: CartItem,
    /// Shows a "Remove" action when set; called with the item id
    #[props(default)]
    pub on_remove: Option<EventHandler<String>>,
}

#[component]
pub fn GameItem(props: GameItemProps) -> Element {
    let item = &props.item;
    let id = item.id.clone();

    rsx! {
        div { class: "game-item",
            div { class: "game-item-content",
                if !item.img.is_empty() {
                    div { class: "game-item-image",
                        img { src: "{item.img}", alt: "{item.title}" }
                    }
                }
                div { class: "game-item-info",
                    h3 { class: "game-item-title", "{item.title}" }
                    span { class: "game-item-price", "{item.price}" }
                }
            }
            if let Some(handler) = props.on_remove {
                button {
                    class: "game-item-remove",
                    r#type: "button",
                    onclick: move |_| handler.call(id.clone()),
                    "Remove"
                }
            }
        }
    }
}
