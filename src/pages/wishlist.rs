//! Wishlist page.

use dioxus::prelude::*;
use gamestore_ui::Empty;

#[component]
pub fn Wishlist() -> Element {
    rsx! {
        section { class: "page wishlist",
            h1 { class: "page-title", "Wishlist" }
            Empty {
                title: "Your wishlist is empty".to_string(),
                description: "Games added to your wishlist will appear here.".to_string(),
                has_link: true,
            }
        }
    }
}
