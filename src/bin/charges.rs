//! Price a file of orders and print each breakdown and the P&L summary.
//!
//! # Usage
//!
//! ```sh
//! # Optional: override the published rate cards.
//! export BROKERAGE_SCHEDULES="schedules.json"
//! cargo run --bin charges --features cli -- orders.json
//! ```
//!
//! `orders.json` is a JSON array of orders:
//!
//! ```json
//! [{ "symbol": "INFY", "quantity": 10, "price": "100", "side": "BUY", "broker": "Zerodha" }]
//! ```

use std::{env, fs, process};

use brokerage_rs::aggregator::aggregate;
use brokerage_rs::calculator::ChargeCalculator;
use brokerage_rs::registry::FeeScheduleRegistry;
use brokerage_rs::validation::OrderInput;

fn main() -> brokerage_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: charges <orders.json>");
        process::exit(2);
    };

    let registry = match env::var("BROKERAGE_SCHEDULES") {
        Ok(schedules) => {
            let json = fs::read_to_string(&schedules).unwrap_or_else(|e| {
                eprintln!("cannot read {schedules}: {e}");
                process::exit(2);
            });
            FeeScheduleRegistry::from_json(&json)?
        }
        Err(_) => FeeScheduleRegistry::standard(),
    };

    let json = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("cannot read {path}: {e}");
        process::exit(2);
    });
    let inputs: Vec<OrderInput> = serde_json::from_str(&json)?;
    let trades = inputs
        .iter()
        .map(OrderInput::validate)
        .collect::<brokerage_rs::Result<Vec<_>>>()?;

    let priced = ChargeCalculator::new(&registry).charge_all(trades)?;
    for (trade, charges) in &priced {
        println!(
            "{} {:?} {} @ {} ({})",
            trade.symbol, trade.side, trade.quantity, trade.price, trade.broker
        );
        println!("{}", serde_json::to_string_pretty(charges)?);
    }

    let summary = aggregate(&priced)?;
    println!("Summary:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
