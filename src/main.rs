//! Demo: seeds a kitchen with orders, shows the board, moves a few orders
//! along and shows the board again.

use chrono::{Duration, Utc};
use clap::Parser;
use order_board::board::Transition;
use order_board::config::BoardConfig;
use order_board::model::{DeliveryType, OrderCreate, OrderItem};
use order_board::runtime::{setup_tracing, KitchenSystem};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board configuration file (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn seed_order(
    minutes_ago: i64,
    items: Vec<OrderItem>,
    total: i64,
    delivery_type: DeliveryType,
    branch: &str,
) -> OrderCreate {
    OrderCreate {
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        items,
        total: Decimal::new(total, 0),
        delivery_type,
        branch: branch.to_string(),
    }
}

fn seed_orders() -> Vec<OrderCreate> {
    vec![
        seed_order(
            35,
            vec![OrderItem::new("Casado de pollo", 2)],
            9000,
            DeliveryType::Pickup,
            "Centro",
        ),
        seed_order(
            18,
            vec![
                OrderItem::new("Arroz con camarones", 1),
                OrderItem::new("Fresco de cas", 1),
            ],
            7200,
            DeliveryType::Delivery,
            "Escazú",
        ),
        seed_order(
            4,
            vec![OrderItem::new("Gallo pinto", 3)],
            6600,
            DeliveryType::Pickup,
            "Centro",
        ),
        seed_order(
            0,
            vec![OrderItem::new("Empanadas", 4)],
            4000,
            DeliveryType::Delivery,
            "Heredia",
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing();

    let config = match cli.config {
        Some(path) => BoardConfig::from_file(path).await?,
        None => BoardConfig::default(),
    };
    info!(?config, "Starting kitchen");

    let mut system = KitchenSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let mut ids = Vec::new();
    async {
        for params in seed_orders() {
            ids.push(system.order_client.create_order(params).await?);
        }
        Ok::<_, order_board::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    system.refresh().await?;
    println!("{}", system.render(Utc::now()));

    // Start the oldest order, move the second one to preparation and then ready,
    // and cancel the newest.
    system.request(&ids[0], Transition::Advance);
    system.request(&ids[1], Transition::Advance);
    system.request(&ids[3], Transition::Cancel);

    // Commands are fire-and-forget; give them a moment before re-reading.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    system.refresh().await?;
    system.request(&ids[1], Transition::Advance);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    system.refresh().await?;

    println!("{}", system.render(Utc::now()));
    info!(last_updated = %system.board().last_updated(), "Board refreshed");

    system.shutdown().await?;
    Ok(())
}
