//! Checkout route handler.

use axum::{
    Form,
    extract::State,
    http::{HeaderValue, header::REFERRER_POLICY},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::checkout::{CheckoutOutcome, CustomerDetails, EMPTY_CART_NOTICE, checkout};
use crate::error::{Result, add_breadcrumb};
use crate::routes::cart::CartShowTemplate;
use crate::state::AppState;
use crate::views::render_cart;

/// Hand the order off to the messaging link.
///
/// An empty cart re-renders the cart page with a notice instead.
#[instrument(skip(state, customer))]
pub async fn submit(
    State(state): State<AppState>,
    Form(customer): Form<CustomerDetails>,
) -> Result<Response> {
    let products = state.catalog().load_catalog().await?;
    let cart = state.cart().get_cart();

    match checkout(&products, &cart, &customer, &state.config().checkout)? {
        CheckoutOutcome::EmptyCart => {
            let view = render_cart(&products, &cart);
            Ok(CartShowTemplate::new(view, Some(EMPTY_CART_NOTICE.to_string())).into_response())
        }
        CheckoutOutcome::Handoff { url, .. } => {
            add_breadcrumb("checkout", "Order handed off", None);
            let mut response = Redirect::to(url.as_str()).into_response();
            response
                .headers_mut()
                .insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
            Ok(response)
        }
    }
}
