use dioxus::prelude::*;
use gamestore_core::CartStore;

use crate::components::StoreShell;
use crate::context::Session;
use crate::launch_config;
use crate::pages::{Cart, Home, Profile, SignIn, SignOut, Wishlist};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Featured games
/// - `/cart` - Full cart with total
/// - `/profile/me` - Account details and password change
/// - `/wishlist` - Saved games
/// - `/sign-in` - Sign in form
/// - `/sign-out` - Clears the local session and cart
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreShell)]
        #[route("/")]
        Home {},
        #[route("/cart")]
        Cart {},
        #[route("/profile/me")]
        Profile {},
        #[route("/wishlist")]
        Wishlist {},
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-out")]
        SignOut {},
}

/// Root application component.
///
/// Provides global styles, the cart store, the session and routing.
#[component]
pub fn App() -> Element {
    let launch = use_hook(launch_config);

    let seed_cart = launch.cart.clone();
    let cart: Signal<CartStore> = use_signal(move || seed_cart);
    let username = launch.username.clone();
    let session: Signal<Session> = use_signal(move || Session::new(username));

    use_context_provider(|| cart);
    use_context_provider(|| session);
    use_context_provider(|| launch.policy);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
