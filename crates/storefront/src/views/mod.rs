//! View models for the catalog and cart pages.
//!
//! Views are rebuilt from scratch on every render: the current catalog and a
//! fresh read of the cart go in, display-ready data comes out. Text fields are
//! left raw here and escaped by the templates.

pub mod cart;
pub mod catalog;

pub use cart::{CartLineView, CartView, render_cart};
pub use catalog::{CatalogView, PriceDisplay, ProductCard, render_catalog, render_price};
