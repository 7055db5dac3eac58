//! `toyshop checkout` - print the order message and messaging link.

use std::io::Write;

use toyshop_storefront::checkout::{CheckoutOutcome, CustomerDetails, EMPTY_CART_NOTICE, checkout};

use super::{CommandError, Context};

/// Run checkout and print the outcome.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be loaded, the link cannot be
/// built, or output fails.
pub async fn run(
    ctx: &Context,
    customer: &CustomerDetails,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let products = ctx.catalog.load_catalog().await?;
    let cart = ctx.store.get_cart();

    match checkout(&products, &cart, customer, &ctx.checkout)? {
        CheckoutOutcome::EmptyCart => writeln!(out, "{EMPTY_CART_NOTICE}")?,
        CheckoutOutcome::Handoff { message, url } => {
            writeln!(out, "{}", message.text())?;
            writeln!(out)?;
            writeln!(out, "{url}")?;
        }
    }
    Ok(())
}
