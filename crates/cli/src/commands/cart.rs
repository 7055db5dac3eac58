//! Cart commands: add, set, inc, dec, remove, clear, count, cart.

use std::io::Write;

use toyshop_storefront::cart::CartAction;
use toyshop_storefront::views::render_cart;

use super::{CommandError, Context, product_id};

/// Add `qty` units of `id`.
///
/// # Errors
///
/// Returns `CommandError` if the id is empty or the cart cannot be written.
pub fn add(ctx: &Context, id: &str, qty: i64, out: &mut impl Write) -> Result<(), CommandError> {
    let id = product_id(id)?;
    ctx.store.add_to_cart(&id, qty)?;
    report(ctx, &id, out)
}

/// Set the quantity of `id` from raw input.
///
/// # Errors
///
/// Returns `CommandError` if the id is empty or the cart cannot be written.
pub fn set(ctx: &Context, id: &str, qty: String, out: &mut impl Write) -> Result<(), CommandError> {
    apply(ctx, id, CartAction::SetQuantity(qty), out)
}

/// Add one unit of `id`.
///
/// # Errors
///
/// Returns `CommandError` if the id is empty or the cart cannot be written.
pub fn increment(ctx: &Context, id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    apply(ctx, id, CartAction::Increment, out)
}

/// Remove one unit of `id`, keeping at least one.
///
/// # Errors
///
/// Returns `CommandError` if the id is empty or the cart cannot be written.
pub fn decrement(ctx: &Context, id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    apply(ctx, id, CartAction::Decrement, out)
}

/// Remove the line for `id`.
///
/// # Errors
///
/// Returns `CommandError` if the id is empty or the cart cannot be written.
pub fn remove(ctx: &Context, id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    apply(ctx, id, CartAction::Remove, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CommandError` if the cart cannot be written.
pub fn clear(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    ctx.store.clear_cart()?;
    writeln!(out, "Carrito vacío.")?;
    Ok(())
}

/// Print the number of units in the cart.
///
/// # Errors
///
/// Returns `CommandError` if output fails.
pub fn count(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "{}", ctx.store.cart_count())?;
    Ok(())
}

/// Print cart lines and the total.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be loaded or output fails.
pub async fn show(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    let products = ctx.catalog.load_catalog().await?;
    let view = render_cart(&products, &ctx.store.get_cart());

    if view.is_empty() {
        writeln!(out, "Tu carrito está vacío.")?;
    }
    for line in &view.lines {
        writeln!(
            out,
            "[{}] {} x{} = {}",
            line.id, line.name, line.quantity, line.subtotal
        )?;
    }
    writeln!(out, "Total: {}", view.total)?;
    Ok(())
}

fn apply(
    ctx: &Context,
    id: &str,
    action: CartAction,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = product_id(id)?;
    action.apply(&ctx.store, &id)?;
    report(ctx, &id, out)
}

fn report(
    ctx: &Context,
    id: &toyshop_core::ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let cart = ctx.store.get_cart();
    match cart.quantity(id) {
        0 => writeln!(out, "[{id}] fuera del carrito · Carrito: {}", cart.count())?,
        qty => writeln!(out, "[{id}] x{qty} · Carrito: {}", cart.count())?,
    }
    Ok(())
}
