//! Empty State Component
//!
//! Placeholder shown where a list has nothing to display, optionally
//! with a link back to the store.

use dioxus::prelude::*;

use super::{ButtonLink, ButtonSize};

#[derive(Props, Clone, PartialEq)]
pub struct EmptyProps {
    pub title: String,
    pub description: String,
    /// Render a "Go back to store" link
    #[props(default = false)]
    pub has_link: bool,
}

#[component]
pub fn Empty(props: EmptyProps) -> Element {
    rsx! {
        div { class: "empty",
            h2 { class: "empty-title", "{props.title}" }
            p { class: "empty-description", "{props.description}" }
            if props.has_link {
                ButtonLink { to: "/".to_string(), size: ButtonSize::Medium, "Go back to store" }
            }
        }
    }
}
