//! App-level components for Game Store.

mod store_shell;

pub use store_shell::StoreShell;
