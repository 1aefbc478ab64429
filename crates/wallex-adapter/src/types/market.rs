/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Public market data shapes (markets, currencies, depth, trades, candles)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Listing fields shared by spot and OTC markets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    pub symbol: String,
    pub base_asset: String,
    #[serde(rename = "baseAsset_png_icon", default)]
    pub base_asset_png_icon: String,
    #[serde(rename = "baseAsset_svg_icon", default)]
    pub base_asset_svg_icon: String,
    pub base_asset_precision: u32,
    pub quote_asset: String,
    #[serde(rename = "quoteAsset_png_icon", default)]
    pub quote_asset_png_icon: String,
    #[serde(rename = "quoteAsset_svg_icon", default)]
    pub quote_asset_svg_icon: String,
    pub quote_precision: u32,
    #[serde(default)]
    pub fa_name: String,
    #[serde(default)]
    pub en_name: String,
    #[serde(default)]
    pub fa_base_asset: String,
    #[serde(default)]
    pub en_base_asset: String,
    #[serde(default)]
    pub fa_quote_asset: String,
    #[serde(default)]
    pub en_quote_asset: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub step_size: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub tick_size: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub min_qty: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub min_notional: Decimal,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_zero_fee: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub symbols: BTreeMap<String, MarketSymbol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSymbol {
    #[serde(flatten)]
    pub info: PairInfo,
    pub stats: TickerStats,
}

/// 24h/7d ticker; the server reports `"-"` for windows without trades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerStats {
    #[serde(
        rename = "bidPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub bid_price: Option<Decimal>,
    #[serde(
        rename = "askPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub ask_price: Option<Decimal>,
    #[serde(rename = "24h_ch", default)]
    pub change_24h: Option<f64>,
    #[serde(rename = "7d_ch", default)]
    pub change_7d: Option<f64>,
    #[serde(
        rename = "24h_volume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub volume_24h: Option<Decimal>,
    #[serde(
        rename = "7d_volume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub volume_7d: Option<Decimal>,
    #[serde(
        rename = "24h_quoteVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub quote_volume_24h: Option<Decimal>,
    #[serde(
        rename = "24h_highPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub high_price_24h: Option<Decimal>,
    #[serde(
        rename = "24h_lowPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub low_price_24h: Option<Decimal>,
    #[serde(
        rename = "lastPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub last_price: Option<Decimal>,
    #[serde(
        rename = "lastQty",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub last_qty: Option<Decimal>,
    #[serde(rename = "lastTradeSide", default)]
    pub last_trade_side: String,
    #[serde(
        rename = "bidVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub bid_volume: Option<Decimal>,
    #[serde(
        rename = "askVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub ask_volume: Option<Decimal>,
    #[serde(rename = "bidCount", default)]
    pub bid_count: u64,
    #[serde(rename = "askCount", default)]
    pub ask_count: u64,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(
        rename = "24h_tmnVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub toman_volume_24h: Option<Decimal>,
}

/// Share of buy and sell volume, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    #[serde(rename = "SELL")]
    pub sell: f64,
    #[serde(rename = "BUY")]
    pub buy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyStats {
    pub key: String,
    pub name: String,
    pub name_en: String,
    pub rank: Option<u32>,
    pub dominance: Option<f64>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub ath: Option<f64>,
    pub atl: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub price: Option<f64>,
    pub daily_high_price: Option<f64>,
    pub daily_low_price: Option<f64>,
    pub weekly_high_price: Option<f64>,
    pub monthly_high_price: Option<f64>,
    pub yearly_high_price: Option<f64>,
    pub weekly_low_price: Option<f64>,
    pub monthly_low_price: Option<f64>,
    pub yearly_low_price: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_14d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub percent_change_60d: Option<f64>,
    pub percent_change_200d: Option<f64>,
    pub percent_change_1y: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_7d: Option<f64>,
    pub price_change_14d: Option<f64>,
    pub price_change_30d: Option<f64>,
    pub price_change_60d: Option<f64>,
    pub price_change_200d: Option<f64>,
    pub price_change_1y: Option<f64>,
    pub max_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    #[serde(rename = "type")]
    pub currency_type: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub quantity: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sum: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub ask: Vec<BookLevel>,
    #[serde(default)]
    pub bid: Vec<BookLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTrade {
    pub symbol: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub quantity: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sum: Decimal,
    pub is_buy_order: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trades {
    #[serde(rename = "latestTrades")]
    pub latest_trades: Vec<PublicTrade>,
}

/// UDF history reply; returned bare, without the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candles {
    pub s: String,
    #[serde(default)]
    pub t: Vec<i64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub c: Vec<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub o: Vec<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub h: Vec<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub l: Vec<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub v: Vec<Decimal>,
}
