//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{CatalogView, render_catalog};

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub view: CatalogView,
    pub cart_count: u64,
}

/// Display the catalog with live cart quantities.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CatalogTemplate> {
    let products = state.catalog().load_catalog().await?;
    let view = render_catalog(&products, &state.cart().get_cart());

    Ok(CatalogTemplate {
        cart_count: view.cart_count,
        view,
    })
}
