use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storecheck_core::{AppConfig, Money};
use storecheck_scanner::{extract_entries, select_cheapest, CategoryClient};

#[derive(Debug, Parser)]
#[command(name = "storecheck")]
#[command(about = "Storefront purchase-workflow price checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a category listing for the cheapest in-stock product.
    Scan {
        /// Category page URL; defaults to the configured category.
        #[arg(long)]
        url: Option<String>,

        /// Read the category page HTML from a local file instead of fetching.
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,
    },

    /// Derive the expected cart subtotal and shipping-inclusive total.
    Quote {
        /// Unit price, with or without a leading `$`.
        #[arg(long)]
        price: String,

        /// Quantity; defaults to the configured workflow quantity.
        #[arg(long)]
        quantity: Option<u32>,

        /// Flat shipping amount; defaults to the configured surcharge.
        #[arg(long)]
        shipping: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storecheck_core::load_app_config_from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { url, file } => run_scan(&config, url, file).await,
        Commands::Quote {
            price,
            quantity,
            shipping,
        } => run_quote(&config, &price, quantity, shipping),
    }
}

async fn run_scan(
    config: &AppConfig,
    url: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let html = match file {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let client = CategoryClient::new(
                config.request_timeout_secs,
                &config.user_agent,
                config.max_retries,
                config.retry_backoff_base_secs,
            )?;
            let target = url.as_deref().unwrap_or(&config.category_url);
            client.fetch_category_page(target).await?
        }
    };

    let entries = extract_entries(&html);
    tracing::info!(count = entries.len(), "extracted listing entries");

    let selection = select_cheapest(&entries)?;
    println!("{}", serde_json::to_string_pretty(&selection)?);
    Ok(())
}

fn run_quote(
    config: &AppConfig,
    price: &str,
    quantity: Option<u32>,
    shipping: Option<String>,
) -> anyhow::Result<()> {
    let price = Money::parse(price)?;
    let quantity = quantity.unwrap_or(config.default_quantity);
    let shipping = match shipping {
        Some(raw) => Money::parse(&raw)?,
        None => config.flat_shipping,
    };

    let subtotal = price.mul_quantity(quantity);
    let total = subtotal + shipping;

    let report = serde_json::json!({
        "price": price,
        "quantity": quantity,
        "subtotal": subtotal,
        "shipping": shipping,
        "total": total,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
