//! Integration test harness for Toyshop.
//!
//! Tests drive the full storefront router in process with
//! `tower::ServiceExt::oneshot`, over a catalog written to a temporary file
//! and an in-memory cart store.
//!
//! ```bash
//! cargo test -p toyshop-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use tempfile::TempDir;
use toyshop_storefront::{
    cart::MemoryStore,
    catalog::CatalogSource,
    config::{CheckoutConfig, StorefrontConfig},
    routes,
    state::AppState,
};
use tower::ServiceExt;

/// Recipient used by every test storefront.
pub const RECIPIENT: &str = "525512345678";

/// A storefront wired to a temporary catalog file.
pub struct TestStorefront {
    pub state: AppState,
    pub catalog_path: PathBuf,
    _dir: TempDir,
}

impl TestStorefront {
    /// Storefront serving `catalog_json` from disk.
    pub fn new(catalog_json: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog_path = dir.path().join("products.json");
        std::fs::write(&catalog_path, catalog_json).expect("write catalog");
        Self::with_source(dir, CatalogSource::Local(catalog_path.clone()), catalog_path)
    }

    /// Storefront whose catalog file was never written.
    pub fn missing_catalog() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog_path = dir.path().join("missing.json");
        Self::with_source(dir, CatalogSource::Local(catalog_path.clone()), catalog_path)
    }

    /// Storefront reading the catalog from `source`.
    pub fn with_catalog_source(source: CatalogSource) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog_path = dir.path().join("unused.json");
        Self::with_source(dir, source, catalog_path)
    }

    fn with_source(dir: TempDir, catalog: CatalogSource, catalog_path: PathBuf) -> Self {
        let config = StorefrontConfig {
            host: [127, 0, 0, 1].into(),
            port: 0,
            catalog,
            data_dir: dir.path().join("data"),
            checkout: CheckoutConfig::new("https://wa.me", RECIPIENT).expect("checkout config"),
            sentry_dsn: None,
            sentry_environment: None,
        };
        let state = AppState::new(config, Arc::new(MemoryStore::default()));
        Self {
            state,
            catalog_path,
            _dir: dir,
        }
    }

    /// The full application router.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.router().oneshot(request).await.expect("infallible")
    }

    /// Send a urlencoded form POST.
    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request");
        self.router().oneshot(request).await.expect("infallible")
    }

    /// GET a page and return its body, asserting a 200 response.
    pub async fn page(&self, uri: &str) -> String {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_text(response).await
    }
}

/// Collect a response body as UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
}

/// Catalog used by most tests.
pub const CATALOG: &str = r#"[
    {"id": "A", "name": "Pelota", "price": 50, "category": "Deportes", "description": "Pelota de goma", "image": "img/pelota.jpg"},
    {"id": "B", "name": "Muñeca", "price": 30, "oldPrice": 45, "hasDiscount": true},
    {"id": 7, "name": "Yo-yo", "price": 12.5, "oldPrice": 20}
]"#;
