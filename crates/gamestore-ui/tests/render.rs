//! Server-side render tests for the storefront components.
//!
//! Each test mounts a component in a `VirtualDom`, renders it to HTML with
//! dioxus-ssr and checks the markup a user (or a screen reader) would see.
//! Components that render router links are mounted under a `Router`, which
//! falls back to an in-memory history starting at "/".

use dioxus::prelude::*;
use gamestore_core::{CartItem, Money};
use gamestore_ui::{
    render_password_field, use_password_field, CartList, Dropdown, GameItem, PasswordField,
    PasswordFieldProps, UserDropdown, EMPTY_CART_DESCRIPTION, EMPTY_CART_TITLE,
};

fn render_field(props: PasswordFieldProps) -> String {
    let mut dom = VirtualDom::new_with_props(PasswordField, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn labeled(label: &str) -> PasswordFieldProps {
    PasswordFieldProps {
        label: Some(label.to_string()),
        name: Some(label.to_string()),
        ..Default::default()
    }
}

fn sample_items() -> Vec<CartItem> {
    vec![
        CartItem::new("1", "Red Dead Redemption 2", Money(21500)).with_img("/img/rdr2.jpg"),
        CartItem::new("2", "Borderlands 3", Money(4999)),
    ]
}

// ============================================================================
// PasswordField
// ============================================================================

#[test]
fn toggle_is_present_but_hidden_when_empty() {
    let html = render_field(labeled("PasswordField"));

    assert!(html.contains(r#"role="img""#));
    assert!(html.contains(r#"aria-label="Show password""#));
    assert!(html.contains("visibility: hidden;"));
    assert!(!html.contains("visibility: visible;"));
}

#[test]
fn toggle_is_visible_with_initial_value() {
    let html = render_field(PasswordFieldProps {
        initial_value: Some("secret".to_string()),
        ..Default::default()
    });

    assert!(html.contains("visibility: visible;"));
    assert!(html.contains(r#"aria-label="Show password""#));
}

#[test]
fn input_starts_masked_with_test_id() {
    let html = render_field(PasswordFieldProps::default());

    assert!(html.contains(r#"data-testid="password-input""#));
    assert!(html.contains(r#"type="password""#));
}

#[test]
fn renders_with_label() {
    let html = render_field(PasswordFieldProps {
        label: Some("label".to_string()),
        name: Some("Label".to_string()),
        ..Default::default()
    });

    assert!(html.contains("<label"));
    assert!(html.contains(r#"for="Label""#));
    assert!(html.contains(r#"id="Label""#));
    assert!(html.contains(">label</label>"));
}

#[test]
fn renders_without_label() {
    let html = render_field(PasswordFieldProps::default());

    assert!(!html.contains("<label"));
}

#[test]
fn empty_label_renders_no_label_element() {
    let html = render_field(PasswordFieldProps {
        label: Some(String::new()),
        ..Default::default()
    });

    assert!(!html.contains("<label"));
}

#[test]
fn name_attribute_is_omitted_without_name() {
    let html = render_field(PasswordFieldProps::default());

    assert!(!html.contains(" name="));
    assert!(html.contains(r#"id="password-"#));
}

#[test]
fn name_attribute_is_rendered_when_set() {
    let html = render_field(PasswordFieldProps {
        name: Some("password".to_string()),
        ..Default::default()
    });

    assert!(html.contains(r#"name="password""#));
    assert!(html.contains(r#"id="password""#));
}

#[test]
fn renders_with_placeholder() {
    let html = render_field(PasswordFieldProps {
        placeholder: Some("hey you".to_string()),
        ..Default::default()
    });

    assert!(html.contains(r#"placeholder="hey you""#));
}

#[test]
fn enabled_field_is_in_tab_order() {
    let html = render_field(labeled("PasswordField"));

    assert!(html.contains(r#"tabindex="0""#));
}

#[test]
fn disabled_field_leaves_tab_order() {
    let html = render_field(PasswordFieldProps {
        disabled: true,
        ..labeled("PasswordField")
    });

    assert!(html.contains(r#"tabindex="-1""#));
    assert!(html.contains("password-field disabled"));
}

#[test]
fn renders_with_error() {
    let html = render_field(PasswordFieldProps {
        error: Some("Error message".to_string()),
        ..labeled("PasswordField")
    });

    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains(">Error message<"));
    assert!(html.contains("password-field has-error"));
}

#[test]
fn renders_with_loading() {
    let html = render_field(PasswordFieldProps {
        loading: Some("Validating...".to_string()),
        ..labeled("PasswordField")
    });

    assert!(html.contains(r#"role="status""#));
    assert!(html.contains(">Validating...<"));
}

#[test]
fn error_and_loading_can_coexist() {
    let html = render_field(PasswordFieldProps {
        error: Some("Too short".to_string()),
        loading: Some("Validating...".to_string()),
        ..Default::default()
    });

    assert!(html.contains("Too short"));
    assert!(html.contains("Validating..."));
}

// ============================================================================
// PasswordField input wiring
// ============================================================================

const TYPED: &str = "This is my new text";

/// Hosts a field, types `TYPED` one character at a time through the same
/// controller the `oninput` handler uses, and renders what the host saw.
fn typing_host(props: PasswordFieldProps, toggle_after: bool) -> Element {
    let mut seen = use_signal(Vec::<String>::new);
    let props = PasswordFieldProps {
        on_input_change: Some(EventHandler::new(move |value: String| {
            seen.write().push(value);
        })),
        ..props
    };

    let mut field = use_password_field(&props);
    use_hook(move || {
        for end in 1..=TYPED.len() {
            field.input(&TYPED[..end]);
        }
        if toggle_after {
            field.toggle();
        }
    });

    let calls = seen.read().len();
    let last = seen.read().last().cloned().unwrap_or_default();

    rsx! {
        {render_password_field(field, &props)}
        p { class: "calls", "calls={calls}" }
        p { class: "last", "last={last}" }
    }
}

fn typing_app() -> Element {
    typing_host(labeled("PasswordField"), false)
}

fn typing_then_toggle_app() -> Element {
    typing_host(labeled("PasswordField"), true)
}

fn disabled_typing_app() -> Element {
    typing_host(
        PasswordFieldProps {
            disabled: true,
            initial_value: Some("keep".to_string()),
            ..labeled("PasswordField")
        },
        false,
    )
}

#[test]
fn typing_notifies_host_once_per_character() {
    let html = render_app(typing_app);

    assert!(html.contains("calls=19"));
    assert!(html.contains("last=This is my new text"));
    assert!(html.contains(r#"value="This is my new text""#));
}

#[test]
fn typing_reveals_toggle() {
    let html = render_app(typing_app);

    assert!(html.contains("visibility: visible;"));
    assert!(!html.contains("visibility: hidden;"));
    assert!(html.contains(r#"aria-label="Show password""#));
    assert!(html.contains(r#"type="password""#));
}

#[test]
fn toggle_after_typing_unmasks() {
    let html = render_app(typing_then_toggle_app);

    assert!(html.contains(r#"aria-label="Hide password""#));
    assert!(html.contains(r#"type="text""#));
    assert!(html.contains("calls=19"));
}

#[test]
fn disabled_field_ignores_typing() {
    let html = render_app(disabled_typing_app);

    assert!(html.contains("calls=0"));
    assert!(html.contains(r#"value="keep""#));
    assert!(html.contains(r#"tabindex="-1""#));
}

// ============================================================================
// CartList / GameItem
// ============================================================================

fn full_cart() -> Element {
    rsx! {
        CartList { items: sample_items(), total: "$264.99".to_string() }
    }
}

#[test]
fn cart_list_shows_items_and_total() {
    let html = render_app(full_cart);

    assert!(html.contains("Red Dead Redemption 2"));
    assert!(html.contains("Borderlands 3"));
    assert!(html.contains("$215.00"));
    assert!(html.contains("Total:"));
    assert!(html.contains("$264.99"));
    assert!(!html.contains("Buy it now"));
}

#[derive(Clone, Debug, PartialEq, Routable)]
enum EmptyCartRoute {
    #[route("/")]
    EmptyCartPage {},
}

#[component]
fn EmptyCartPage() -> Element {
    rsx! {
        CartList { items: Vec::new(), total: Money::ZERO.to_string() }
    }
}

fn empty_cart_app() -> Element {
    rsx! { Router::<EmptyCartRoute> {} }
}

#[test]
fn empty_cart_links_back_to_store() {
    let html = render_app(empty_cart_app);

    assert!(html.contains(EMPTY_CART_TITLE));
    assert!(html.contains(EMPTY_CART_DESCRIPTION));
    assert!(html.contains("Go back to store"));
    assert!(html.contains(r#"href="/""#));
    assert!(!html.contains("Total:"));
}

#[derive(Clone, Debug, PartialEq, Routable)]
enum DropdownCartRoute {
    #[route("/")]
    DropdownCartPage {},
}

#[component]
fn DropdownCartPage() -> Element {
    rsx! {
        CartList { items: sample_items(), total: "$264.99".to_string(), has_button: true }
    }
}

fn dropdown_cart_app() -> Element {
    rsx! { Router::<DropdownCartRoute> {} }
}

#[test]
fn compact_cart_links_to_cart_page() {
    let html = render_app(dropdown_cart_app);

    assert!(!html.contains("Total:"));
    assert!(html.contains("$264.99"));
    assert!(html.contains("Buy it now"));
    assert!(html.contains(r#"href="/cart""#));
}

fn single_item() -> Element {
    rsx! {
        GameItem { item: sample_items().remove(0) }
    }
}

#[test]
fn game_item_renders_cover_and_price() {
    let html = render_app(single_item);

    assert!(html.contains(r#"src="/img/rdr2.jpg""#));
    assert!(html.contains(r#"alt="Red Dead Redemption 2""#));
    assert!(html.contains("$215.00"));
    assert!(!html.contains("Remove"));
}

// ============================================================================
// Dropdown
// ============================================================================

fn closed_dropdown() -> Element {
    rsx! {
        Dropdown { title: rsx! { "Account" },
            p { "Menu body" }
        }
    }
}

fn open_dropdown() -> Element {
    rsx! {
        Dropdown { title: rsx! { "Account" }, open: true,
            p { "Menu body" }
        }
    }
}

#[test]
fn dropdown_starts_collapsed() {
    let html = render_app(closed_dropdown);

    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("Account"));
    assert!(html.contains("Menu body"));
    assert!(!html.contains("dropdown-overlay"));
}

#[test]
fn dropdown_can_start_open() {
    let html = render_app(open_dropdown);

    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("dropdown open"));
    assert!(html.contains("dropdown-overlay"));
}

// ============================================================================
// UserDropdown
// ============================================================================

#[derive(Clone, Debug, PartialEq, Routable)]
enum AccountRoute {
    #[route("/")]
    AccountPage {},
}

#[component]
fn AccountPage() -> Element {
    rsx! {
        UserDropdown { username: "dave".to_string() }
    }
}

fn account_app() -> Element {
    rsx! { Router::<AccountRoute> {} }
}

#[test]
fn user_dropdown_lists_account_links() {
    let html = render_app(account_app);

    assert!(html.contains(">dave<"));
    for (title, href) in [
        ("My profile", "/profile/me"),
        ("Wishlist", "/wishlist"),
        ("Sign out", "/sign-out"),
    ] {
        assert!(html.contains(&format!(r#"title="{title}""#)), "missing {title}");
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
    assert!(html.contains(r#"aria-expanded="false""#));
}
