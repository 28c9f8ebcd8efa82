//! Reusable storefront components.

mod button;
mod cart_list;
mod dropdown;
mod empty;
mod game_item;
pub mod icons;
mod password_field;
mod user_dropdown;

pub use button::*;
pub use cart_list::*;
pub use dropdown::*;
pub use empty::*;
pub use game_item::*;
pub use password_field::*;
pub use user_dropdown::*;
