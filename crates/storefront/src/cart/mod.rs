//! Persistent cart store.
//!
//! Every operation reads the whole cart document, applies its change, and
//! writes the whole document back. Carts are small and there is a single
//! writer, so no locking or merging happens here; concurrent writers can
//! overwrite each other.
//!
//! Reads never fail: a missing document is an empty cart, and an unreadable
//! or corrupt document is logged and treated as empty as well.

pub mod actions;
pub mod storage;

use std::sync::Arc;

use toyshop_core::{Cart, ProductId};
use tracing::{debug, warn};

pub use actions::{CartAction, parse_quantity_input};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "toyshop_cart_v1";

/// Cart operations over a key-value backend.
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").field("key", &CART_KEY).finish()
    }
}

impl CartStore {
    /// Create a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Create a store that keeps the cart in memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Read the current cart.
    #[must_use]
    pub fn get_cart(&self) -> Cart {
        let raw = match self.storage.read(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart, using empty cart");
                return Cart::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored cart is corrupt, using empty cart");
            Cart::new()
        })
    }

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be serialized or written.
    pub fn set_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.write(CART_KEY, &raw)
    }

    /// Add `qty` to the quantity of `id`, removing the entry if it drops to zero or below.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be written.
    pub fn add_to_cart(&self, id: &ProductId, qty: i64) -> Result<(), StorageError> {
        let mut cart = self.get_cart();
        cart.add(id.clone(), qty);
        debug!(product_id = %id, delta = qty, quantity = cart.quantity(id), "Cart add");
        self.set_cart(&cart)
    }

    /// Set the quantity of `id`, removing the entry if `qty <= 0`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be written.
    pub fn update_qty(&self, id: &ProductId, qty: i64) -> Result<(), StorageError> {
        let mut cart = self.get_cart();
        cart.set(id.clone(), qty);
        debug!(product_id = %id, quantity = cart.quantity(id), "Cart update");
        self.set_cart(&cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the empty cart cannot be written.
    pub fn clear_cart(&self) -> Result<(), StorageError> {
        debug!("Cart cleared");
        self.set_cart(&Cart::new())
    }

    /// Total number of units in the cart, orphaned entries included.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.get_cart().count()
    }
}
