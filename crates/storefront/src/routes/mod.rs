//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Catalog page
//! GET  /catalog           - Catalog page
//!
//! # Cart (form POSTs redirect back to the page they came from)
//! GET  /cart              - Cart page
//! POST /cart/add          - Add to cart (redirects to /catalog)
//! POST /cart/increment    - Add one unit
//! POST /cart/decrement    - Remove one unit (floor of one)
//! POST /cart/quantity     - Set quantity from raw input
//! POST /cart/remove       - Remove line
//! POST /cart/clear        - Empty cart
//! GET  /cart/count        - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout          - Redirect to the messaging link
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/quantity", post(cart::quantity))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/catalog", get(catalog::index))
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::submit))
}

/// Build the storefront application with its middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
