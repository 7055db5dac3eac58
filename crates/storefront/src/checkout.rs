//! Checkout handoff.
//!
//! There is no payment step. Checkout turns the cart into a readable order
//! message and hands it to an external messaging link, where the shop and the
//! customer arrange delivery and payment. An empty cart (after dropping
//! entries the catalog no longer carries) ends the flow with a notice.

use serde::Deserialize;
use thiserror::Error;
use toyshop_core::{Cart, CartLine, Product, cart_lines, lines_total};
use tracing::{info, instrument};
use url::Url;

use crate::config::CheckoutConfig;

/// Notice shown when checking out with nothing in the cart.
pub const EMPTY_CART_NOTICE: &str = "Tu carrito está vacío.";

const GREETING: &str = "Hola, quiero hacer un pedido:";
const CLOSING: &str = "¿Me apoyas a coordinar la entrega y forma de pago?";

/// Errors building the handoff link.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Invalid handoff URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Optional customer details appended to the order message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// The order summary sent through the messaging link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    parts: Vec<String>,
}

impl OrderMessage {
    /// Compose the message from resolved cart lines.
    ///
    /// Returns `None` when there are no lines.
    #[must_use]
    pub fn compose(lines: &[CartLine<'_>], customer: &CustomerDetails) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }

        let items = lines
            .iter()
            .map(|line| {
                format!(
                    "- {} (x{}) {}",
                    line.product.name,
                    line.quantity,
                    line.subtotal()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut parts = vec![
            GREETING.to_string(),
            items,
            format!("Total estimado: {}", lines_total(lines)),
        ];

        let fields = [
            ("Nombre", &customer.name),
            ("Zona", &customer.zone),
            ("Nota", &customer.note),
        ];
        for (label, value) in fields {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                parts.push(format!("{label}: {value}"));
            }
        }

        parts.push(CLOSING.to_string());
        Some(Self { parts })
    }

    /// Message text, one part per line.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.join("\n")
    }

    /// Build the messaging link carrying this message.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidUrl` if the configured base does not
    /// combine into a valid URL.
    pub fn handoff_url(&self, config: &CheckoutConfig) -> Result<Url, CheckoutError> {
        let base = config.messaging_base.as_str().trim_end_matches('/');
        let raw_text = self.text();
        let text = urlencoding::encode(&raw_text);
        let url = Url::parse(&format!("{base}/{}?text={text}", config.recipient))?;
        Ok(url)
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to order; show [`EMPTY_CART_NOTICE`] and stop.
    EmptyCart,
    /// Open this link in a new browsing context.
    Handoff { message: OrderMessage, url: Url },
}

/// Run checkout for the current cart.
///
/// # Errors
///
/// Returns `CheckoutError` if the handoff link cannot be built.
#[instrument(skip_all, fields(entries = cart.len()))]
pub fn checkout(
    products: &[Product],
    cart: &Cart,
    customer: &CustomerDetails,
    config: &CheckoutConfig,
) -> Result<CheckoutOutcome, CheckoutError> {
    let lines = cart_lines(cart, products);
    let Some(message) = OrderMessage::compose(&lines, customer) else {
        info!("Checkout attempted with empty cart");
        return Ok(CheckoutOutcome::EmptyCart);
    };

    let url = message.handoff_url(config)?;
    info!(lines = lines.len(), total = %lines_total(&lines), "Checkout handoff built");
    Ok(CheckoutOutcome::Handoff { message, url })
}
