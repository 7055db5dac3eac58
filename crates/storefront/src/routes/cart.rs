//! Cart route handlers.
//!
//! Every mutation is a form POST that updates the stored cart and redirects
//! back to the cart page, so the whole view and the count badge re-render from
//! the stored state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use toyshop_core::ProductId;
use tracing::instrument;

use crate::cart::CartAction;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{CartView, render_cart};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub qty: Option<i64>,
}

/// Single cart line form data.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub id: String,
}

/// Direct quantity edit form data.
///
/// The quantity stays raw text; unparsable input is handled by the cart action.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub id: String,
    #[serde(default)]
    pub qty: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub view: CartView,
    pub cart_count: u64,
    pub notice: Option<String>,
}

impl CartShowTemplate {
    /// Page for `view`, optionally with a user-facing notice.
    #[must_use]
    pub fn new(view: CartView, notice: Option<String>) -> Self {
        Self {
            cart_count: view.cart_count,
            view,
            notice,
        }
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

fn product_id(raw: &str) -> Result<ProductId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("missing product id".to_string()));
    }
    Ok(ProductId::from(trimmed))
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<CartShowTemplate> {
    let products = state.catalog().load_catalog().await?;
    let view = render_cart(&products, &state.cart().get_cart());
    Ok(CartShowTemplate::new(view, None))
}

/// Add an item from the catalog and re-render the catalog.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let id = product_id(&form.id)?;
    let qty = form.qty.unwrap_or(1);

    state.cart().add_to_cart(&id, qty)?;
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, qty, "Added to cart");

    Ok(Redirect::to("/catalog"))
}

fn apply(state: &AppState, raw_id: &str, action: CartAction) -> Result<Response> {
    let id = product_id(raw_id)?;
    action.apply(state.cart(), &id)?;
    tracing::info!(product_id = %id, ?action, "Cart line updated");
    Ok(Redirect::to("/cart").into_response())
}

/// Add one unit to a line.
#[instrument(skip(state))]
pub async fn increment(State(state): State<AppState>, Form(form): Form<LineForm>) -> Result<Response> {
    apply(&state, &form.id, CartAction::Increment)
}

/// Remove one unit from a line, keeping at least one.
#[instrument(skip(state))]
pub async fn decrement(State(state): State<AppState>, Form(form): Form<LineForm>) -> Result<Response> {
    apply(&state, &form.id, CartAction::Decrement)
}

/// Set a line's quantity from raw user input.
#[instrument(skip(state))]
pub async fn quantity(
    State(state): State<AppState>,
    Form(form): Form<QuantityForm>,
) -> Result<Response> {
    apply(&state, &form.id, CartAction::SetQuantity(form.qty))
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<LineForm>) -> Result<Response> {
    apply(&state, &form.id, CartAction::Remove)
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Redirect> {
    state.cart().clear_cart()?;
    tracing::info!("Cart cleared");
    Ok(Redirect::to("/cart"))
}

/// Get cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().cart_count(),
    }
}
