//! User Dropdown Component
//!
//! Account menu in the header: avatar, username and a chevron as the
//! dropdown title, with links to the profile, wishlist and sign-out pages.

use dioxus::prelude::*;
use gamestore_core::{account_links, AccountDestination};

use super::icons::{AccountCircleIcon, ChevronDownIcon, ExitToAppIcon, FavoriteBorderIcon};
use super::Dropdown;

fn render_link_icon(destination: AccountDestination) -> Element {
    match destination {
        AccountDestination::Profile => rsx! { AccountCircleIcon {} },
        AccountDestination::Wishlist => rsx! { FavoriteBorderIcon {} },
        AccountDestination::SignOut => rsx! { ExitToAppIcon {} },
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct UserDropdownProps {
    /// Display name of the signed-in user
    pub username: String,
}

#[component]
pub fn UserDropdown(props: UserDropdownProps) -> Element {
    rsx! {
        Dropdown {
            title: rsx! {
                AccountCircleIcon { size: 24 }
                span { class: "username", "{props.username}" }
                ChevronDownIcon { size: 24 }
            },
            nav { class: "user-nav",
                for link in account_links() {
                    Link {
                        key: "{link.title}",
                        to: link.path(),
                        class: "user-nav-link",
                        span { class: "user-nav-item", title: "{link.title}",
                            {render_link_icon(link.destination)}
                            span { "{link.title}" }
                        }
                    }
                }
            }
        }
    }
}
