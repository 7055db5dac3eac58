//! Quantity controls offered by the cart view.
//!
//! Decrement stops at one and never removes a line. A direct edit to zero
//! (or below) and the remove action both delete it.

use toyshop_core::ProductId;

use super::{CartStore, StorageError};

/// A user action on one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit.
    Increment,
    /// Remove one unit, never going below one.
    Decrement,
    /// Replace the quantity with raw user input.
    SetQuantity(String),
    /// Drop the line.
    Remove,
}

impl CartAction {
    /// Apply the action to the line for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be written.
    pub fn apply(&self, store: &CartStore, id: &ProductId) -> Result<(), StorageError> {
        let current = store.get_cart().quantity(id);
        let next = match self {
            Self::Increment => i64::from(current) + 1,
            Self::Decrement => {
                let current = if current == 0 { 1 } else { i64::from(current) };
                (current - 1).max(1)
            }
            Self::SetQuantity(raw) => parse_quantity_input(raw),
            Self::Remove => 0,
        };
        store.update_qty(id, next)
    }
}

/// Parse a quantity typed by the user.
///
/// Reads an optional sign followed by leading digits, ignoring surrounding
/// whitespace and anything after the digits (`"3 pcs"` is 3). Input with no
/// leading digits falls back to 1.
#[must_use]
pub fn parse_quantity_input(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..end).unwrap_or_default();
    if digits.is_empty() {
        return 1;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -value } else { value }
}
