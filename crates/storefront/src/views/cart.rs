//! Cart view: resolved lines, quantity controls and the grand total.

use toyshop_core::{Cart, Product, cart_lines, lines_total};

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Cart page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub cart_count: u64,
}

impl CartView {
    /// Whether the empty state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Build the cart view, skipping entries the catalog does not carry.
#[must_use]
pub fn render_cart(products: &[Product], cart: &Cart) -> CartView {
    let lines = cart_lines(cart, products);
    let total = lines_total(&lines);

    CartView {
        lines: lines
            .iter()
            .map(|line| CartLineView {
                id: line.product.id.to_string(),
                name: line.product.name.clone(),
                category: line.product.category_or_empty().to_string(),
                quantity: line.quantity,
                subtotal: line.subtotal().to_string(),
            })
            .collect(),
        total: total.to_string(),
        cart_count: cart.count(),
    }
}
