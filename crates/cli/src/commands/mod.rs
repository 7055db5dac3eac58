//! CLI command implementations.
//!
//! Commands write their human-readable output to the provided writer and
//! report failures as [`CommandError`].

pub mod cart;
pub mod catalog;
pub mod checkout;

use std::sync::Arc;

use thiserror::Error;
use toyshop_core::ProductId;
use toyshop_storefront::cart::{CartStore, FileStore, StorageError};
use toyshop_storefront::catalog::{CatalogError, CatalogLoader, CatalogSource};
use toyshop_storefront::checkout::CheckoutError;
use toyshop_storefront::config::{CheckoutConfig, ConfigError, StorefrontConfig};

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid catalog source: {0}")]
    CatalogSource(#[from] url::ParseError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Product id must not be empty")]
    EmptyId,
}

/// Shared handles for every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub catalog: CatalogLoader,
    pub store: CartStore,
    pub checkout: CheckoutConfig,
}

impl Context {
    /// Load configuration and open the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if configuration is invalid or the cart
    /// directory cannot be opened.
    pub fn from_env(catalog_override: Option<&str>) -> Result<Self, CommandError> {
        let config = StorefrontConfig::from_env()?;
        let source = match catalog_override {
            Some(raw) => CatalogSource::parse(raw)?,
            None => config.catalog.clone(),
        };
        let storage = FileStore::open(&config.data_dir)?;

        Ok(Self::new(
            CatalogLoader::new(source),
            CartStore::new(Arc::new(storage)),
            config.checkout,
        ))
    }

    #[must_use]
    pub const fn new(catalog: CatalogLoader, store: CartStore, checkout: CheckoutConfig) -> Self {
        Self {
            catalog,
            store,
            checkout,
        }
    }
}

fn product_id(raw: &str) -> Result<ProductId, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::EmptyId);
    }
    Ok(ProductId::from(trimmed))
}
