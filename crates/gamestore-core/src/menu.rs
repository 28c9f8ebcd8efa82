//! Account menu entries shown in the user dropdown.

/// Where an account menu entry leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountDestination {
    Profile,
    Wishlist,
    SignOut,
}

impl AccountDestination {
    /// Route path for this destination
    pub fn path(self) -> &'static str {
        match self {
            AccountDestination::Profile => "/profile/me",
            AccountDestination::Wishlist => "/wishlist",
            AccountDestination::SignOut => "/sign-out",
        }
    }
}

/// One entry in the account menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountLink {
    pub title: &'static str,
    pub destination: AccountDestination,
}

impl AccountLink {
    pub fn path(&self) -> &'static str {
        self.destination.path()
    }
}

/// Entries of the account menu, in display order.
pub fn account_links() -> [AccountLink; 3] {
    [
        AccountLink {
            title: "My profile",
            destination: AccountDestination::Profile,
        },
        AccountLink {
            title: "Wishlist",
            destination: AccountDestination::Wishlist,
        },
        AccountLink {
            title: "Sign out",
            destination: AccountDestination::SignOut,
        },
    ]
}
