//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::{CartStore, FileStore, KeyValueStore, StorageError};
use crate::catalog::CatalogLoader;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the catalog loader and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogLoader,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state over an explicit storage backend.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogLoader::new(config.catalog.clone());
        let cart = CartStore::new(storage);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Create application state persisting the cart under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be created.
    pub fn with_file_storage(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = FileStore::open(&config.data_dir)?;
        Ok(Self::new(config, Arc::new(storage)))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog loader.
    #[must_use]
    pub fn catalog(&self) -> &CatalogLoader {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
