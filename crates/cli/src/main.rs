//! Commerce Bridge CLI - operator tools against the Squarespace Commerce API.
//!
//! Talks to Squarespace directly with the same configuration and client as
//! the bridge server, so no running bridge is needed.
//!
//! # Usage
//!
//! ```bash
//! # Probe configuration and upstream connectivity
//! cb-cli health
//!
//! # Catalog
//! cb-cli products list --limit 5 --category prints
//! cb-cli products get <product-id>
//! cb-cli products variants <product-id>
//!
//! # Orders
//! cb-cli orders list --status PENDING
//! cb-cli orders get <order-id>
//!
//! # Inventory
//! cb-cli inventory get <product-id>
//! cb-cli inventory set <product-id> 12
//!
//! # Customer profiles
//! cb-cli customers get <customer-id>
//! ```
//!
//! Results are printed to stdout as pretty JSON. Configuration comes from the
//! same environment variables (and `.env`) as the server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

mod commands;

use commands::{CommandError, Context};

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(author, version, about = "Commerce Bridge CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check configuration and upstream connectivity
    Health,
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Browse orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Read or set stock levels
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Look up customer profiles
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
}

/// Paging flags shared by list commands.
#[derive(Args)]
struct PageArgs {
    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u64>,

    /// Number of results to skip
    #[arg(short, long)]
    offset: Option<u64>,

    /// Site to query instead of the configured one
    #[arg(long)]
    site: Option<String>,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only products with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show a product
    Get {
        /// Product ID
        id: String,
    },
    /// Show a product's variants
    Variants {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only orders with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Only orders for this customer
        #[arg(long)]
        customer: Option<String>,
    },
    /// Show an order
    Get {
        /// Order ID
        id: String,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Show a product's stock level
    Get {
        /// Product ID
        id: String,
    },
    /// Set a product's stock quantity
    Set {
        /// Product ID
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Show a customer profile's address
    Get {
        /// Customer ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Health => commands::health::run(&ctx).await?,
        Commands::Products { action } => match action {
            ProductAction::List {
                page,
                category,
                tag,
            } => {
                let query = commerce_bridge::ProductQuery {
                    site_id: page.site,
                    limit: page.limit,
                    offset: page.offset,
                    category,
                    tag,
                };
                commands::products::list(&ctx, &query).await?;
            }
            ProductAction::Get { id } => commands::products::get(&ctx, &id).await?,
            ProductAction::Variants { id } => commands::products::variants(&ctx, &id).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List {
                page,
                status,
                customer,
            } => {
                let query = commerce_bridge::OrderQuery {
                    site_id: page.site,
                    limit: page.limit,
                    offset: page.offset,
                    status,
                    customer_id: customer,
                };
                commands::orders::list(&ctx, &query).await?;
            }
            OrderAction::Get { id } => commands::orders::get(&ctx, &id).await?,
        },
        Commands::Inventory { action } => match action {
            InventoryAction::Get { id } => commands::inventory::get(&ctx, &id).await?,
            InventoryAction::Set { id, quantity } => {
                commands::inventory::set(&ctx, &id, quantity).await?;
            }
        },
        Commands::Customers { action } => match action {
            CustomerAction::Get { id } => commands::customers::get(&ctx, &id).await?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_inventory_quantity() {
        let cli = Cli::try_parse_from(["cb-cli", "inventory", "set", "p1", "-3"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Inventory {
                action: InventoryAction::Set { quantity: -3, .. }
            })
        ));
    }

    #[test]
    fn test_parses_order_filters() {
        let cli = Cli::try_parse_from([
            "cb-cli", "orders", "list", "--limit", "5", "--status", "PENDING",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Orders {
                action: OrderAction::List {
                    page: PageArgs { limit: Some(5), .. },
                    ..
                }
            })
        ));
    }
}
