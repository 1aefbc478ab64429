/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: JSON value of the endpoint result
[POS]:    Command layer - maps subcommands to read-only API calls
[UPDATE]: When adding or changing subcommands
*/

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use wallex_adapter::{
    CandlesRequest, OrderSide, RequestOptions, Resolution, TimePoint, WallexClient,
};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Markets with 24h stats
    Markets,
    /// Per-currency stats
    Currencies,
    /// Order book of one market
    Depth { symbol: String },
    /// Order books of every market
    DepthAll,
    /// Latest public trades of one market
    Trades { symbol: String },
    /// Candle history
    Ohlc {
        symbol: String,
        /// 1, 60, 180, 360, 720 or 1D
        #[arg(long, default_value = "60")]
        resolution: Resolution,
        /// Epoch seconds, YYYY-MM-DD or RFC 3339
        #[arg(long, value_parser = parse_time_point)]
        from: TimePoint,
        /// Epoch seconds, YYYY-MM-DD or RFC 3339
        #[arg(long, value_parser = parse_time_point)]
        to: TimePoint,
    },
    /// All account balances
    Balances,
    /// Balance of one asset
    Balance { asset: String },
    /// Open orders, optionally for one market
    OpenOrders {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Status of an order by client order id
    OrderStatus { id: String },
    /// OTC quote for one side of a market
    OtcPrice { symbol: String, side: OrderSide },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Markets => "markets",
            Command::Currencies => "currencies",
            Command::Depth { .. } => "depth",
            Command::DepthAll => "depth-all",
            Command::Trades { .. } => "trades",
            Command::Ohlc { .. } => "ohlc",
            Command::Balances => "balances",
            Command::Balance { .. } => "balance",
            Command::OpenOrders { .. } => "open-orders",
            Command::OrderStatus { .. } => "order-status",
            Command::OtcPrice { .. } => "otc-price",
        }
    }
}

/// Accepts epoch seconds, a calendar date (midnight UTC) or an RFC 3339 timestamp
pub fn parse_time_point(raw: &str) -> std::result::Result<TimePoint, String> {
    let raw = raw.trim();
    if let Ok(seconds) = raw.parse::<i64>() {
        return Ok(TimePoint::Epoch(seconds));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.into());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|at| TimePoint::DateTime(at.with_timezone(&Utc)))
        .map_err(|_| format!("expected epoch seconds, YYYY-MM-DD or RFC 3339, got {raw:?}"))
}

pub async fn execute(client: &WallexClient, command: Command) -> Result<Value> {
    let name = command.name();
    info!(command = name, "running command");

    let options = RequestOptions::new();
    let result = match command {
        Command::Markets => to_json(client.fetch_markets(options).await),
        Command::Currencies => to_json(client.fetch_currencies_stats(options).await),
        Command::Depth { symbol } => to_json(client.fetch_order_book(&symbol, options).await),
        Command::DepthAll => to_json(client.fetch_all_order_books(options).await),
        Command::Trades { symbol } => to_json(client.fetch_trades(&symbol, options).await),
        Command::Ohlc {
            symbol,
            resolution,
            from,
            to,
        } => {
            let request = CandlesRequest::new(symbol, resolution, from, to);
            to_json(client.fetch_ohlc(&request, options).await)
        }
        Command::Balances => to_json(client.fetch_balances(options).await),
        Command::Balance { asset } => {
            let balance = client.fetch_balance(&asset, options).await?;
            let balance = balance.ok_or_else(|| anyhow!("no balance for asset {asset}"))?;
            to_json(Ok(balance))
        }
        Command::OpenOrders { symbol } => {
            to_json(client.fetch_open_orders(symbol.as_deref(), options).await)
        }
        Command::OrderStatus { id } => to_json(client.fetch_order_status(&id, options).await),
        Command::OtcPrice { symbol, side } => {
            to_json(client.fetch_otc_price(&symbol, side, options).await)
        }
    };
    result.with_context(|| format!("{name} failed"))
}

fn to_json<T: Serialize>(result: wallex_adapter::Result<T>) -> Result<Value> {
    let value = result?;
    serde_json::to_value(value).context("encode result as json")
}
