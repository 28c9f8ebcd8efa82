//! Visual theme for Game Store.

mod styles;

pub use styles::GLOBAL_STYLES;
