/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs serialized into call payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::enums::{OrderSide, OrderType, Resolution};

/// A point in time sent on the wire as whole epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePoint {
    Epoch(i64),
    DateTime(DateTime<Utc>),
}

impl TimePoint {
    pub fn epoch_seconds(&self) -> i64 {
        match self {
            TimePoint::Epoch(seconds) => *seconds,
            TimePoint::DateTime(at) => at.timestamp(),
        }
    }
}

impl From<i64> for TimePoint {
    fn from(seconds: i64) -> Self {
        TimePoint::Epoch(seconds)
    }
}

impl From<DateTime<Utc>> for TimePoint {
    fn from(at: DateTime<Utc>) -> Self {
        TimePoint::DateTime(at)
    }
}

/// Calendar dates start at midnight UTC
impl From<NaiveDate> for TimePoint {
    fn from(date: NaiveDate) -> Self {
        TimePoint::DateTime(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.epoch_seconds())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlesRequest {
    pub symbol: String,
    pub resolution: Resolution,
    pub from: TimePoint,
    pub to: TimePoint,
}

impl CandlesRequest {
    pub fn new(
        symbol: impl Into<String>,
        resolution: Resolution,
        from: impl Into<TimePoint>,
        to: impl Into<TimePoint>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            resolution,
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(rename = "client_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOtcOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CryptoWithdrawalRequest {
    pub coin: String,
    pub network: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyWithdrawalRequest {
    pub iban: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Filters for the crypto withdrawal history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WithdrawalHistoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<TimePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymbolFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
}
