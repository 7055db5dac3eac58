//! Toyshop Storefront library.
//!
//! This crate provides the storefront functionality as a library, so the
//! server binary, the CLI and the integration tests share one implementation.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog loading (remote or local, never cached)
//! - [`cart`] - Persistent cart store and quantity controls
//! - [`views`] - Catalog and cart view models
//! - [`checkout`] - Order message and messaging handoff link
//! - [`routes`] - HTTP handlers and router

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;
