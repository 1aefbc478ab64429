/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Account data shapes (profile, fees, banking, balances, transfers, trades)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::market::PublicTrade;
use super::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceItem {
    pub asset: String,
    #[serde(default)]
    pub asset_png_icon: String,
    #[serde(default)]
    pub asset_svg_icon: String,
    #[serde(rename = "faName", default)]
    pub fa_name: String,
    #[serde(default)]
    pub fiat: bool,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub value: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub locked: Decimal,
}

impl BalanceItem {
    /// Balance not held by open orders or pending withdrawals
    pub fn available(&self) -> Decimal {
        self.value - self.locked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    #[serde(default)]
    pub balances: BTreeMap<String, BalanceItem>,
}

impl Balances {
    pub fn get(&self, asset: &str) -> Option<&BalanceItem> {
        self.balances.get(asset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardNumber {
    pub id: i64,
    pub card_number: String,
    #[serde(default)]
    pub owners: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub is_default: i64,
}

/// Registered bank cards
///
/// The endpoint answers with a single card object; a list (or `null`) is
/// accepted too and always surfaces as a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<serde_helpers::OneOrMany<CardNumber>>")]
pub struct CardNumbers(pub Vec<CardNumber>);

impl From<Option<serde_helpers::OneOrMany<CardNumber>>> for CardNumbers {
    fn from(wire: Option<serde_helpers::OneOrMany<CardNumber>>) -> Self {
        CardNumbers(wire.map(serde_helpers::OneOrMany::into_vec).unwrap_or_default())
    }
}

impl CardNumbers {
    pub fn iter(&self) -> std::slice::Iter<'_, CardNumber> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Card flagged as the account default
    pub fn default_card(&self) -> Option<&CardNumber> {
        self.0.iter().find(|card| card.is_default == 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iban {
    pub id: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub withdraw_available_amount: Decimal,
    pub iban: String,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub status: String,
    #[serde(default)]
    pub is_default: i64,
    pub bank_details: Option<BankDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalDetail {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub value: Decimal,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyWithdrawal {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    pub tracking_code: String,
    pub created_at: String,
    pub status: String,
    pub iban: Iban,
    #[serde(default)]
    pub details: Vec<WithdrawalDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinType {
    pub key: String,
    pub name: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub coin_type: String,
    pub deposit_availability: String,
    pub withdrawal_availability: String,
    #[serde(default)]
    pub deposit_unavailability_reason: Value,
    #[serde(default)]
    pub withdrawal_unavailability_reason: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    #[serde(default)]
    pub message: Value,
    #[serde(rename = "type")]
    pub network_type: String,
    pub deposit_availability: String,
    pub withdrawal_availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    #[serde(default)]
    pub memo_base: bool,
    #[serde(default)]
    pub memo: Value,
}

/// One crypto deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoTransfer {
    pub asset: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(rename = "txHash", default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub block_explorer_link: Option<String>,
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default)]
    pub min_confirmation: u32,
    pub coin_type: Option<CoinType>,
    pub network: Option<Network>,
    pub status: String,
    pub time: String,
    pub wallet: Option<Wallet>,
    #[serde(default)]
    pub deposit_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    #[serde(flatten)]
    pub trade: PublicTrade,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    #[serde(
        rename = "feeCoefficient",
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee_coefficient: Decimal,
    #[serde(rename = "feeAsset", deserialize_with = "serde_helpers::deserialize_string_lenient")]
    pub fee_asset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrades {
    #[serde(rename = "AccountLatestTrades", default)]
    pub account_latest_trades: Vec<UserTrade>,
}

/// Per-pair maker/taker rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairFee {
    #[serde(
        rename = "makerFeeRate",
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub maker_fee_rate: Decimal,
    #[serde(
        rename = "takerFeeRate",
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub taker_fee_rate: Decimal,
    #[serde(default)]
    pub recent_days_sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeMetaData {
    #[serde(default)]
    pub levels: Vec<f64>,
    #[serde(rename = "coin_levels", default)]
    pub coin_levels: Vec<f64>,
    #[serde(default)]
    pub latest_trades_sum: f64,
    #[serde(default)]
    pub latest_tether_trades_sum: f64,
}

/// Fee schedule keyed by market symbol, plus account-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    #[serde(rename = "metaData")]
    pub meta_data: Option<FeeMetaData>,
    #[serde(default)]
    pub default: Vec<Value>,
    #[serde(flatten)]
    pub pairs: BTreeMap<String, Value>,
}

impl FeeSchedule {
    /// Rates for one market; `None` when absent or not a rate entry
    pub fn pair(&self, symbol: &str) -> Option<PairFee> {
        self.pairs
            .get(symbol)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub country: String,
    pub location: String,
    pub province: String,
    pub postal_code: String,
    pub house_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    pub area_code: String,
    pub main_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KycDetails {
    pub mobile_activation: bool,
    pub personal_info: bool,
    pub financial_info: bool,
    pub phone_number: bool,
    pub national_card: bool,
    pub face_recognition: bool,
    pub admin_approval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KycInfo {
    pub details: KycDetails,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMeta {
    pub disabled_features: Vec<String>,
}

/// Account profile; nested settings and verification status stay untyped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub tracking_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub face_image: String,
    pub birthday: String,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub mobile_number: String,
    pub verification: String,
    pub email: String,
    pub invite_code: String,
    pub avatar: Option<String>,
    pub commission: f64,
    pub settings: BTreeMap<String, Value>,
    pub is_legal: bool,
    pub status: BTreeMap<String, Value>,
    pub kyc_info: KycInfo,
    pub meta: ProfileMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_numbers_accept_single_object() {
        let value = json!({
            "id": 7,
            "card_number": "603799******1234",
            "owners": ["Owner"],
            "status": "CONFIRMED",
            "is_default": 1
        });

        let cards: CardNumbers = serde_json::from_value(value).expect("single card");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards.default_card().map(|card| card.id), Some(7));
    }

    #[test]
    fn card_numbers_accept_list_and_null() {
        let value = json!([
            {"id": 7, "card_number": "603799******1234", "status": "CONFIRMED", "is_default": 0},
            {"id": 8, "card_number": "610433******5678", "status": "PENDING", "is_default": 1}
        ]);
        let cards: CardNumbers = serde_json::from_value(value).expect("card list");
        assert_eq!(cards.iter().map(|card| card.id).collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(cards.default_card().map(|card| card.id), Some(8));

        let cards: CardNumbers = serde_json::from_value(json!(null)).expect("no cards");
        assert!(cards.is_empty());
    }

    #[test]
    fn balance_values_accept_strings_and_numbers() {
        let value = json!({
            "balances": {
                "USDT": {
                    "asset": "USDT",
                    "asset_png_icon": "https://cdn/usdt.png",
                    "asset_svg_icon": "https://cdn/usdt.svg",
                    "faName": "تتر",
                    "fiat": false,
                    "value": "150.5",
                    "locked": 20
                }
            }
        });

        let balances: Balances = serde_json::from_value(value).expect("balances should deserialize");
        let usdt = balances.get("USDT").expect("USDT present");
        assert_eq!(usdt.value, "150.5".parse().unwrap());
        assert_eq!(usdt.available(), "130.5".parse().unwrap());
        assert!(balances.get("BTC").is_none());
    }

    #[test]
    fn fee_schedule_exposes_pair_rates() {
        let value = json!({
            "BTCUSDT": {"makerFeeRate": "0.0015", "takerFeeRate": "0.002", "recent_days_sum": 0},
            "metaData": {
                "levels": [0, 1],
                "coin_levels": [0],
                "latestTradesSum": 0,
                "latestTetherTradesSum": 12.5
            },
            "default": []
        });

        let fees: FeeSchedule = serde_json::from_value(value).expect("fees should deserialize");
        let pair = fees.pair("BTCUSDT").expect("pair present");
        assert_eq!(pair.taker_fee_rate, "0.002".parse().unwrap());
        assert!(fees.pair("ETHUSDT").is_none());
        assert_eq!(
            fees.meta_data.map(|meta| meta.latest_tether_trades_sum),
            Some(12.5)
        );
    }

    #[test]
    fn user_trade_flattens_public_fields() {
        let value = json!({
            "symbol": "BTCUSDT",
            "quantity": "0.01",
            "price": "65000",
            "sum": "650",
            "isBuyOrder": true,
            "timestamp": "2024-01-01T00:00:00Z",
            "fee": "0.00001",
            "feeCoefficient": "0.001",
            "feeAsset": "BTC"
        });

        let trade: UserTrade = serde_json::from_value(value).expect("trade should deserialize");
        assert_eq!(trade.trade.symbol, "BTCUSDT");
        assert!(trade.trade.is_buy_order);
        assert_eq!(trade.fee_asset, "BTC");
    }
}
