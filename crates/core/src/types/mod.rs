//! Core types for Toyshop.
//!
//! This module provides type-safe wrappers for the catalog and cart domain.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine, MAX_QUANTITY, cart_lines, lines_total};
pub use id::ProductId;
pub use price::{CURRENCY_CODE, LOCALE, Price, format_price};
pub use product::Product;
