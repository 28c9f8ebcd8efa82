//! Cart store.
//!
//! The cart is an explicit store object: the app owns one `CartStore`,
//! provides it through context, and components read `items()` and the
//! derived `total()` from whatever store they are handed.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// An amount of US dollars, in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// `None` when the sum does not fit in a `u64` of cents.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Sum of `prices`, or `None` on overflow.
fn checked_total<'a>(prices: impl IntoIterator<Item = &'a CartItem>) -> Option<Money> {
    prices
        .into_iter()
        .try_fold(Money::ZERO, |total, item| total.checked_add(item.price))
}

/// A game sitting in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog id, unique within a cart
    pub id: String,
    pub title: String,
    /// Cover image URL
    #[serde(default)]
    pub img: String,
    pub price: Money,
}

impl CartItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            img: String::new(),
            price,
        }
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }
}

/// Ordered cart contents with a derived total.
///
/// The total of a store always fits in a `u64` of cents: seeds whose total
/// would overflow are rejected and `add` refuses items that would overflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a seed list, rejecting repeated ids and totals
    /// that do not fit.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(StoreError::DuplicateItem(item.id.clone()));
            }
        }
        if checked_total(&items).is_none() {
            return Err(StoreError::TotalOverflow);
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<CartItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Load a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), items = store.quantity(), "Loaded cart seed");
        Ok(store)
    }

    /// Append an item. Returns `false` if its id is already in the cart or
    /// its price would overflow the total.
    pub fn add(&mut self, item: CartItem) -> bool {
        if self.is_in_cart(&item.id) {
            tracing::debug!(id = %item.id, "Item already in cart");
            return false;
        }
        if self.total().checked_add(item.price).is_none() {
            tracing::warn!(id = %item.id, "Item price would overflow cart total");
            return false;
        }
        tracing::debug!(id = %item.id, title = %item.title, "Adding item to cart");
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        tracing::debug!(%id, "Removing item from cart");
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn total(&self) -> Money {
        // Construction and `add` keep the sum in range.
        checked_total(&self.items).unwrap_or(Money(u64::MAX))
    }

    /// Total as shown in the cart footer, e.g. `$215.00`.
    pub fn formatted_total(&self) -> String {
        self.total().to_string()
    }
}
