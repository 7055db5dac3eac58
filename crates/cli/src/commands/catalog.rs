//! `toyshop catalog` - list products with live cart quantities.

use std::io::Write;

use toyshop_storefront::views::render_catalog;

use super::{CommandError, Context};

/// Print one line per product.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be loaded or output fails.
pub async fn list(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    let products = ctx.catalog.load_catalog().await?;
    let view = render_catalog(&products, &ctx.store.get_cart());

    if view.cards.is_empty() {
        writeln!(out, "No hay productos disponibles.")?;
        return Ok(());
    }

    for card in &view.cards {
        let price = match &card.price.original {
            Some(original) => format!("{} (Antes {original})", card.price.current),
            None => card.price.current.clone(),
        };
        write!(out, "[{}] {} - {price}", card.id, card.name)?;
        if !card.category.is_empty() {
            write!(out, " · {}", card.category)?;
        }
        writeln!(out, " · En carrito: {}", card.in_cart)?;
    }
    writeln!(out, "Carrito: {} artículos", view.cart_count)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toyshop_core::ProductId;

    use super::super::test_support::{catalog_file, context, output};
    use super::*;

    #[tokio::test]
    async fn test_list_shows_prices_and_counts() {
        let file = catalog_file();
        let ctx = context(file.path());
        ctx.store.add_to_cart(&ProductId::from("A"), 2).unwrap();

        let mut buf = Vec::new();
        list(&ctx, &mut buf).await.unwrap();
        let text = output(buf);

        assert!(text.contains("[A] Pelota - $50.00 · Deportes · En carrito: 2"));
        assert!(text.contains("[B] Muñeca - $30.00 (Antes $45.00) · En carrito: 0"));
        assert!(text.ends_with("Carrito: 2 artículos\n"));
    }
}
