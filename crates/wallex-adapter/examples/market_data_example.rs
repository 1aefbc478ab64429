/*
[INPUT]:  Market symbol (e.g., "BTCUSDT")
[OUTPUT]: Market data (markets, depth, trades, candles)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use chrono::{Duration, Utc};
use wallex_adapter::*;

/// Example: Query market data (no api key required)
#[tokio::main]
async fn main() {
    println!("=== Wallex Market Data Example ===\n");

    let client = match WallexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no api key needed for public endpoints)\n");

    let symbol = "BTCUSDT";

    println!("Querying markets...");
    match client.fetch_markets(RequestOptions::new()).await {
        Ok(markets) => println!("✓ {} markets listed", markets.result.symbols.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying depth for {}...", symbol);
    match client.fetch_order_book(symbol, RequestOptions::new()).await {
        Ok(depth) => println!(
            "✓ Depth: {} asks / {} bids",
            depth.result.ask.len(),
            depth.result.bid.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying latest trades for {}...", symbol);
    match client.fetch_trades(symbol, RequestOptions::new()).await {
        Ok(trades) => println!("✓ {} trades", trades.result.latest_trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying hourly candles for {}...", symbol);
    let now = Utc::now();
    let request = CandlesRequest::new(symbol, Resolution::OneHour, now - Duration::days(1), now);
    match client.fetch_ohlc(&request, RequestOptions::new()).await {
        Ok(candles) => println!("✓ {} candles (status {})", candles.t.len(), candles.s),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
