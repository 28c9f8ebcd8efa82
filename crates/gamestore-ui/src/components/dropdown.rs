//! Dropdown Component
//!
//! Collapsible menu shell: a title button and a content panel. Clicking
//! the title toggles the panel; clicking the backdrop closes it.

use dioxus::prelude::*;

/// Properties for the Dropdown component
#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    /// Content of the toggle button
    pub title: Element,
    /// Panel content
    pub children: Element,
    /// Start expanded
    #[props(default = false)]
    pub open: bool,
}

#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let initially_open = props.open;
    let mut is_open = use_signal(move || initially_open);
    let open = is_open();
    let hidden = !open;

    rsx! {
        div { class: if open { "dropdown open" } else { "dropdown" },
            button {
                class: "dropdown-title",
                r#type: "button",
                "aria-haspopup": "true",
                "aria-expanded": "{open}",
                onclick: move |_| is_open.set(!open),
                {props.title}
            }
            div {
                class: "dropdown-content",
                "aria-hidden": "{hidden}",
                {props.children}
            }
            // Backdrop to close dropdown when clicking outside
            if open {
                div {
                    class: "dropdown-overlay",
                    "aria-hidden": "true",
                    onclick: move |_| is_open.set(false),
                }
            }
        }
    }
}
