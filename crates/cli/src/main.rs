//! Toyshop CLI - Browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products with live cart quantities
//! toyshop catalog
//!
//! # Add two units of product 7, then show the cart
//! toyshop add 7 -q 2
//! toyshop cart
//!
//! # Build the WhatsApp order link
//! toyshop checkout --name "Ana" --zone "Coyoacán"
//! ```
//!
//! The CLI shares the storefront's configuration (`TOYSHOP_*` variables or a
//! `.env` file) and its persisted cart, so both front ends see the same cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "toyshop")]
#[command(author, version, about = "Toyshop catalog and cart tools")]
struct Cli {
    /// Catalog URL or file path (overrides `TOYSHOP_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog with cart quantities
    Catalog,
    /// Add units of a product to the cart
    Add {
        /// Product identifier
        id: String,

        /// Units to add (negative values take units away)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },
    /// Set a product's quantity (0 or less removes it; non-numeric input means 1)
    Set {
        /// Product identifier
        id: String,

        /// New quantity
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Add one unit to a cart line
    Inc {
        /// Product identifier
        id: String,
    },
    /// Remove one unit from a cart line, keeping at least one
    Dec {
        /// Product identifier
        id: String,
    },
    /// Remove a cart line
    Remove {
        /// Product identifier
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Print the number of units in the cart
    Count,
    /// Show cart lines and the total
    Cart,
    /// Build the order message and messaging link
    Checkout {
        /// Customer name
        #[arg(long)]
        name: Option<String>,

        /// Delivery zone
        #[arg(long)]
        zone: Option<String>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::from_env(cli.catalog.as_deref())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog => commands::catalog::list(&ctx, &mut out).await?,
        Commands::Add { id, qty } => commands::cart::add(&ctx, &id, qty, &mut out)?,
        Commands::Set { id, qty } => commands::cart::set(&ctx, &id, qty, &mut out)?,
        Commands::Inc { id } => commands::cart::increment(&ctx, &id, &mut out)?,
        Commands::Dec { id } => commands::cart::decrement(&ctx, &id, &mut out)?,
        Commands::Remove { id } => commands::cart::remove(&ctx, &id, &mut out)?,
        Commands::Clear => commands::cart::clear(&ctx, &mut out)?,
        Commands::Count => commands::cart::count(&ctx, &mut out)?,
        Commands::Cart => commands::cart::show(&ctx, &mut out).await?,
        Commands::Checkout { name, zone, note } => {
            let customer = toyshop_storefront::checkout::CustomerDetails { name, zone, note };
            commands::checkout::run(&ctx, &customer, &mut out).await?;
        }
    }
    Ok(())
}
