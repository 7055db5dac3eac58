//! Catalog view: one card per product.

use toyshop_core::{Cart, Product};

/// Price block for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    /// Current price, always shown.
    pub current: String,
    /// Struck-through original price, only for valid discounts.
    pub original: Option<String>,
}

/// Product card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: PriceDisplay,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    /// Units of this product currently in the cart.
    pub in_cart: u32,
}

/// Catalog page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub cards: Vec<ProductCard>,
    pub cart_count: u64,
}

/// Decide how a product's price is shown.
#[must_use]
pub fn render_price(product: &Product) -> PriceDisplay {
    PriceDisplay {
        current: product.price.to_string(),
        original: product.discounted_from().map(|old| old.to_string()),
    }
}

/// Build the catalog view for `products` with live cart quantities.
#[must_use]
pub fn render_catalog(products: &[Product], cart: &Cart) -> CatalogView {
    let cards = products
        .iter()
        .map(|p| ProductCard {
            id: p.id.to_string(),
            name: p.name.clone(),
            price: render_price(p),
            category: p.category_or_empty().to_string(),
            description: p.description_or_empty().to_string(),
            image: p.image_src().map(str::to_string),
            in_cart: cart.quantity(&p.id),
        })
        .collect();

    CatalogView {
        cards,
        cart_count: cart.count(),
    }
}
