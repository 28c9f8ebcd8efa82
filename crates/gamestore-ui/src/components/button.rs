//! Button Components
//!
//! Storefront buttons in two looks:
//! - Primary: filled magenta call-to-action
//! - Minimal: transparent, text-only action
//!
//! `ButtonLink` renders the same styles on a router link, for actions
//! that navigate ("Buy it now", "Go back to store").

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call-to-action
    #[default]
    Primary,
    /// Transparent, text-only
    Minimal,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Minimal => "btn-minimal",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-small",
            ButtonSize::Medium => "btn-medium",
            ButtonSize::Large => "btn-large",
        }
    }
}

/// Combine variant, size, and any extra classes into one class string
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {} {}", variant.class(), size.class(), extra),
        None => format!("{} {}", variant.class(), size.class()),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         size: ButtonSize::Large,
///         onclick: move |_| add_to_cart(),
///         "Add to cart"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the ButtonLink component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonLinkProps {
    /// Route path to navigate to
    pub to: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    pub children: Element,
}

/// A router link styled as a button
#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let full_class = button_class(props.variant, props.size, None);

    rsx! {
        Link {
            class: "{full_class}",
            to: props.to.clone(),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Minimal.class(), "btn-minimal");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }

    #[test]
    fn button_class_combines_parts() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Large, None),
            "btn-primary btn-large"
        );
        assert_eq!(
            button_class(ButtonVariant::Minimal, ButtonSize::Small, Some("wide")),
            "btn-minimal btn-small wide"
        );
        assert_eq!(
            button_class(ButtonVariant::Minimal, ButtonSize::Small, Some("")),
            "btn-minimal btn-small"
        );
    }
}
