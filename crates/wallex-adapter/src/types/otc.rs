/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: OTC market listing and quote shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market::PairInfo;
use super::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtcStats {
    #[serde(rename = "24h_ch", default)]
    pub change_24h: Option<f64>,
    #[serde(
        rename = "lastPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub last_price: Option<Decimal>,
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtcMarket {
    #[serde(flatten)]
    pub info: PairInfo,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_option",
        serialize_with = "serde_helpers::serialize_decimal_option"
    )]
    pub max_notional: Option<Decimal>,
    pub stats: OtcStats,
    #[serde(default)]
    pub buy_status: String,
    #[serde(default)]
    pub sell_status: String,
    #[serde(default)]
    pub exchange_status: String,
}

/// Quote valid until `price_expires_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtcPrice {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    pub price_expires_at: String,
}
