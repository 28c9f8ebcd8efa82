//! Page components for Game Store.

mod cart;
mod home;
mod profile;
mod sign_in;
mod sign_out;
mod wishlist;

pub use cart::Cart;
pub use home::Home;
pub use profile::Profile;
pub use sign_in::SignIn;
pub use sign_out::SignOut;
pub use wishlist::Wishlist;
