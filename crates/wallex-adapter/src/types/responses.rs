/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response envelope and per-endpoint result aliases
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::{
    Balances, CardNumbers, CryptoTransfer, FeeSchedule, Iban, MoneyWithdrawal, Profile, UserTrades,
};
use super::market::{CurrencyStats, MarketStats, OrderBook, Trades};
use super::order::Order;
use super::otc::{OtcMarket, OtcPrice};

/// Pagination info attached to list responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    pub count: u32,
    pub total_count: u32,
}

/// Uniform wrapper around every successful response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub result: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

pub type MarketsStatsResult = ApiResponse<MarketStats>;
pub type CurrenciesStatsResult = ApiResponse<Vec<CurrencyStats>>;
pub type OrderBookResult = ApiResponse<OrderBook>;
pub type AllOrderBooksResult = ApiResponse<BTreeMap<String, OrderBook>>;
pub type TradesResult = ApiResponse<Trades>;
pub type ProfileResult = ApiResponse<Profile>;
pub type FeesResult = ApiResponse<FeeSchedule>;
pub type CardNumbersResult = ApiResponse<CardNumbers>;
pub type IbansResult = ApiResponse<Vec<Iban>>;
pub type BalanceResult = ApiResponse<Balances>;
pub type MoneyWithdrawalResult = ApiResponse<MoneyWithdrawal>;
pub type CryptoWithdrawalResult = ApiResponse<CryptoTransfer>;
pub type CryptoWithdrawalHistoryResult = ApiResponse<Vec<CryptoTransfer>>;
pub type CryptoDepositResult = ApiResponse<Vec<CryptoTransfer>>;
pub type OrderResult = ApiResponse<Order>;
pub type OpenOrdersResult = ApiResponse<Vec<Order>>;
pub type UserTradesResult = ApiResponse<UserTrades>;
pub type OtcMarketsResult = ApiResponse<BTreeMap<String, OtcMarket>>;
pub type OtcPriceResult = ApiResponse<OtcPrice>;
