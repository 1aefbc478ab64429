/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Order status and fill shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub quantity: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee_coefficient: Decimal,
    pub fee_asset: String,
    pub timestamp: String,
    pub symbol: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sum: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub maker_fee_coefficient: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub taker_fee_coefficient: Decimal,
    #[serde(default)]
    pub is_buyer: bool,
}

/// Order as reported by the account order endpoints
///
/// `order_type`, `side` and `status` are kept as the server's strings; the
/// status vocabulary is wider than what can be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    pub client_order_id: String,
    #[serde(default)]
    pub transact_time: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub orig_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_sum: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sum: Decimal,
    #[serde(default)]
    pub executed_percent: f64,
    pub status: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub fills: Vec<Fill>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_deserializes_without_fills() {
        let value = json!({
            "symbol": "BTCUSDT",
            "type": "LIMIT",
            "side": "BUY",
            "clientOrderId": "my-order-1",
            "transactTime": 1_700_000_000,
            "price": "65000",
            "origQty": "0.5",
            "executedSum": "0",
            "executedQty": "0",
            "executedPrice": null,
            "sum": "32500",
            "executedPercent": 0,
            "status": "NEW",
            "active": true
        });

        let order: Order = serde_json::from_value(value).expect("order should deserialize");
        assert_eq!(order.client_order_id, "my-order-1");
        assert_eq!(order.executed_price, Decimal::ZERO);
        assert!(order.fills.is_empty());
    }
}
