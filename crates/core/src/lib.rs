//! Toyshop Core - Shared types library.
//!
//! This crate provides the domain types used across all Toyshop components:
//! - `storefront` - Local storefront server and view rendering
//! - `cli` - Terminal front end over the same cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage, no HTTP clients. Persistence lives in the storefront crate behind
//! a key-value trait.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, products, carts, and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
