#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod validation;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{bail, Context};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gamestore_core::{CartStore, PasswordPolicy};
use tracing_subscriber::EnvFilter;

/// Launch configuration, set once from command line
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// What the app starts with: who is signed in, what is in the cart, and
/// the rules new passwords are checked against.
#[derive(Clone, Debug, Default)]
pub struct LaunchConfig {
    pub username: Option<String>,
    pub cart: CartStore,
    pub policy: PasswordPolicy,
}

/// Get the launch configuration (set from command line or default)
pub fn launch_config() -> LaunchConfig {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Game Store - storefront desktop client
#[derive(Parser, Debug)]
#[command(name = "gamestore-desktop")]
#[command(about = "Game Store - browse games, manage your cart and account")]
struct Args {
    /// Start signed in under this display name
    #[arg(short, long)]
    username: Option<String>,

    /// JSON file to seed the cart from
    #[arg(short, long)]
    cart: Option<PathBuf>,

    /// Minimum length accepted for new passwords
    #[arg(long, default_value_t = gamestore_core::policy::DEFAULT_MIN_LENGTH)]
    min_password_length: usize,
}

fn load_cart(path: Option<&PathBuf>) -> CartStore {
    let Some(path) = path else {
        return CartStore::new();
    };
    match CartStore::load(path) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!("Failed to load cart seed {:?}: {}", path, e);
            CartStore::new()
        }
    }
}

fn build_config(args: &Args) -> anyhow::Result<LaunchConfig> {
    if args.min_password_length == 0 {
        bail!("--min-password-length must be at least 1");
    }

    let username = args
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(LaunchConfig {
        username,
        cart: load_cart(args.cart.as_ref()),
        policy: PasswordPolicy::default().with_min_length(args.min_password_length),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = build_config(&args).context("invalid launch options")?;

    tracing::info!(
        "Starting Game Store (user: {:?}, cart items: {})",
        config.username,
        config.cart.quantity()
    );

    if LAUNCH.set(config).is_err() {
        bail!("launch configuration already set");
    }

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Game Store")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["gamestore-desktop"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_start_signed_out_with_empty_cart() {
        let config = build_config(&args(&[])).unwrap();
        assert!(config.username.is_none());
        assert!(config.cart.is_empty());
        assert_eq!(config.policy.min_length, 8);
    }

    #[test]
    fn blank_username_is_signed_out() {
        let config = build_config(&args(&["--username", "   "])).unwrap();
        assert!(config.username.is_none());

        let config = build_config(&args(&["-u", "Willian"])).unwrap();
        assert_eq!(config.username.as_deref(), Some("Willian"));
    }

    #[test]
    fn zero_min_length_is_rejected() {
        assert!(build_config(&args(&["--min-password-length", "0"])).is_err());
    }

    #[test]
    fn missing_cart_seed_falls_back_to_empty() {
        let config = build_config(&args(&["--cart", "/nonexistent/cart.json"])).unwrap();
        assert!(config.cart.is_empty());
    }
}
