/*
[INPUT]:  WALLEX_API_KEY and order parameters
[OUTPUT]: Balances, order placement and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use rust_decimal::Decimal;
use std::str::FromStr;
use wallex_adapter::*;

/// Example: Trading operations (requires `WALLEX_API_KEY`)
///
/// Places a limit order far below market and cancels it right away.
#[tokio::main]
async fn main() {
    println!("=== Wallex Trading Example ===\n");

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid environment: {}", e);
            return;
        }
    };
    if config.api_key.is_none() {
        eprintln!("Set WALLEX_API_KEY to run this example");
        return;
    }

    let client = match WallexClient::with_config(config.with_detailed_errors(true)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.fetch_balance("USDT", RequestOptions::new()).await {
        Ok(Some(balance)) => println!("✓ USDT available: {}", balance.available()),
        Ok(None) => println!("✓ No USDT balance"),
        Err(e) => println!("✗ Error: {}", e),
    }

    let order_req = NewOrderRequest {
        symbol: "BTCUSDT".to_string(),
        order_type: OrderType::Limit,
        side: OrderSide::Buy,
        quantity: Decimal::from_str("0.0001").unwrap_or_default(),
        price: Some(Decimal::from_str("10000").unwrap_or_default()),
        client_id: Some(format!("example-{}", chrono::Utc::now().timestamp())),
    };
    println!("\nPlacing order: {:?}", order_req);

    let order = match client.create_order(&order_req, RequestOptions::new()).await {
        Ok(order) => {
            println!("✓ Order {} is {}", order.result.client_order_id, order.result.status);
            order.result
        }
        Err(WallexError::ApiDetailed(detail)) => {
            println!("✗ Rejected with HTTP {}: {}", detail.status_code, detail.message);
            return;
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    match client
        .cancel_order(&order.client_order_id, RequestOptions::new())
        .await
    {
        Ok(cancelled) => println!("✓ Cancelled, status {}", cancelled.result.status),
        Err(e) => println!("✗ Cancel failed: {}", e),
    }

    println!("\n✓ Trading example complete");
}
