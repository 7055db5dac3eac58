//! The shopping cart and its resolved lines.
//!
//! A [`Cart`] maps product identifiers to positive quantities. Entries whose
//! quantity would drop to zero or below are removed instead of stored, so a
//! cart never contains a zero entry. The serialized form is a plain JSON
//! object, `{"<id>": <qty>, ...}`.
//!
//! Entries iterate in [`ProductId`] order: integer-like identifiers first,
//! numerically, then the rest.
//!
//! Cart entries are not reconciled against the catalog. Lines are resolved at
//! display time with [`cart_lines`], which skips identifiers the catalog no
//! longer carries; those entries stay in the cart and still count towards
//! [`Cart::count`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// Largest quantity stored for a single entry; larger requests are clamped.
pub const MAX_QUANTITY: u32 = 9_999;

/// Mapping of product identifier to desired quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity stored for `id`, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Whether the cart holds an entry for `id`.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains_key(id)
    }

    /// Add `delta` to the stored quantity (missing entries start at zero).
    ///
    /// The entry is removed if the result is zero or negative.
    pub fn add(&mut self, id: ProductId, delta: i64) {
        let next = i64::from(self.quantity(&id)).saturating_add(delta);
        self.set(id, next);
    }

    /// Set the quantity directly, removing the entry if `quantity <= 0`.
    ///
    /// Quantities above [`MAX_QUANTITY`] are clamped to it.
    pub fn set(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.items.remove(&id);
        } else {
            let quantity = u32::try_from(quantity).map_or(MAX_QUANTITY, |q| q.min(MAX_QUANTITY));
            self.items.insert(id, quantity);
        }
    }

    /// Remove the entry for `id`, if any.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.remove(id);
    }

    /// Sum of all stored quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.items.iter().map(|(id, &q)| (id, q))
    }
}

impl FromIterator<(ProductId, u32)> for Cart {
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .filter(|&(_, q)| q > 0)
                .map(|(id, q)| (id, q.min(MAX_QUANTITY)))
                .collect(),
        }
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Zero and negative entries are dropped like any other removed line.
        let entries = BTreeMap::<ProductId, i64>::deserialize(deserializer)?;
        let mut cart = Self::new();
        for (id, quantity) in entries {
            cart.set(id, quantity);
        }
        Ok(cart)
    }
}

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// Line price: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Join a cart against the catalog.
///
/// Entries whose identifier is not in `products` are skipped. When the
/// catalog lists an identifier more than once, the first product wins.
#[must_use]
pub fn cart_lines<'a>(cart: &Cart, products: &'a [Product]) -> Vec<CartLine<'a>> {
    cart.iter()
        .filter_map(|(id, quantity)| {
            products
                .iter()
                .find(|p| &p.id == id)
                .map(|product| CartLine { product, quantity })
        })
        .collect()
}

/// Sum of line subtotals.
#[must_use]
pub fn lines_total(lines: &[CartLine<'_>]) -> Price {
    lines.iter().map(CartLine::subtotal).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::from(s)
    }

    fn catalog() -> Vec<Product> {
        serde_json::from_str(
            r#"[
                {"id": "A", "name": "Pelota", "price": 50},
                {"id": "B", "name": "Muñeca", "price": 30},
                {"id": 7, "name": "Carrito", "price": 12.5}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sequential_adds_accumulate() {
        let mut cart = Cart::new();
        cart.add(id("A"), 2);
        cart.add(id("A"), 3);
        assert_eq!(cart.quantity(&id("A")), 5);
    }

    #[test]
    fn test_add_to_zero_or_below_removes_entry() {
        let mut cart = Cart::new();
        cart.add(id("A"), 2);
        cart.add(id("A"), -2);
        assert!(!cart.contains(&id("A")));

        cart.add(id("B"), 1);
        cart.add(id("B"), -5);
        assert!(!cart.contains(&id("B")));

        cart.add(id("C"), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.set(id("A"), 4);
        cart.set(id("A"), 0);
        assert!(!cart.contains(&id("A")));

        cart.set(id("B"), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_count_sums_quantities() {
        let mut cart = Cart::new();
        assert_eq!(cart.count(), 0);

        cart.set(id("A"), 2);
        cart.set(id("B"), 1);
        cart.set(id("gone"), 4);
        assert_eq!(cart.count(), 7);
    }

    #[test]
    fn test_serde_shape() {
        let mut cart = Cart::new();
        cart.set(id("A"), 2);
        cart.set(id("7"), 1);

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"7":1,"A":2}"#);

        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_lines_follow_numeric_id_order() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 10, "name": "Diez", "price": 1},
                {"id": 2, "name": "Dos", "price": 1},
                {"id": "z", "name": "Zeta", "price": 1}
            ]"#,
        )
        .unwrap();
        let cart: Cart = serde_json::from_str(r#"{"z": 1, "10": 1, "2": 1}"#).unwrap();

        let names: Vec<&str> = cart_lines(&cart, &products)
            .iter()
            .map(|line| line.product.name.as_str())
            .collect();
        assert_eq!(names, ["Dos", "Diez", "Zeta"]);
    }

    #[test]
    fn test_deserialize_drops_zero_entries() {
        let cart: Cart = serde_json::from_str(r#"{"A": 0, "B": 3}"#).unwrap();
        assert!(!cart.contains(&id("A")));
        assert_eq!(cart.quantity(&id("B")), 3);
    }

    #[test]
    fn test_deserialize_drops_negative_entries_keeps_rest() {
        let cart: Cart = serde_json::from_str(r#"{"A": -1, "B": 2}"#).unwrap();
        assert!(!cart.contains(&id("A")));
        assert_eq!(cart.quantity(&id("B")), 2);
    }

    #[test]
    fn test_deserialize_rejects_malformed_documents() {
        assert!(serde_json::from_str::<Cart>(r#"["A"]"#).is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"A": "two"}"#).is_err());
    }

    #[test]
    fn test_quantities_are_clamped() {
        let mut cart = Cart::new();
        cart.set(id("A"), i64::MAX);
        assert_eq!(cart.quantity(&id("A")), MAX_QUANTITY);

        cart.add(id("A"), 5);
        assert_eq!(cart.quantity(&id("A")), MAX_QUANTITY);

        let stored: Cart = serde_json::from_str(r#"{"B": 4294967295}"#).unwrap();
        assert_eq!(stored.quantity(&id("B")), MAX_QUANTITY);
    }

    #[test]
    fn test_huge_price_and_quantity_do_not_overflow() {
        let products: Vec<Product> =
            serde_json::from_str(r#"[{"id": "A", "name": "Oro", "price": 100000000000000000000}]"#)
                .unwrap();
        let mut cart = Cart::new();
        cart.set(id("A"), i64::MAX);

        let lines = cart_lines(&cart, &products);
        let total = lines_total(&lines);
        assert_eq!(total, lines[0].subtotal());
        assert!(total.to_string().starts_with('$'));
    }

    #[test]
    fn test_cart_lines_join_and_total() {
        let products = catalog();
        let mut cart = Cart::new();
        cart.set(id("A"), 2);
        cart.set(id("B"), 1);

        let lines = cart_lines(&cart, &products);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].subtotal(), Price::from(100_i64));
        assert_eq!(lines[1].subtotal(), Price::from(30_i64));
        assert_eq!(lines_total(&lines), Price::from(130_i64));
    }

    #[test]
    fn test_cart_lines_skip_orphans() {
        let products = catalog();
        let mut cart = Cart::new();
        cart.set(id("A"), 1);
        cart.set(id("discontinued"), 3);

        let lines = cart_lines(&cart, &products);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.name, "Pelota");
        // Orphans stay in the cart itself
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_cart_lines_match_numeric_ids_by_string() {
        let products = catalog();
        let mut cart = Cart::new();
        cart.set(id("7"), 2);

        let lines = cart_lines(&cart, &products);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].subtotal().to_string(), "$25.00");
    }
}
