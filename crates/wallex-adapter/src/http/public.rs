/*
[INPUT]:  Symbol identifiers and candle query parameters
[OUTPUT]: Market data (markets, currency stats, depth, trades, candles)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{ApiVersion, RequestOptions, Result, WallexClient};
use crate::types::{
    AllOrderBooksResult, Candles, CandlesRequest, CurrenciesStatsResult, MarketsStatsResult,
    OrderBookResult, TradesResult,
};

impl WallexClient {
    /// List markets with their 24h stats
    ///
    /// GET /v1/markets
    pub async fn fetch_markets(&self, options: RequestOptions) -> Result<MarketsStatsResult> {
        self.get("markets", false, ApiVersion::V1, options).await
    }

    /// GET /v1/currencies/stats
    pub async fn fetch_currencies_stats(
        &self,
        options: RequestOptions,
    ) -> Result<CurrenciesStatsResult> {
        self.get("currencies/stats", false, ApiVersion::V1, options)
            .await
    }

    /// Order book for one market
    ///
    /// GET /v1/depth?symbol={symbol}
    pub async fn fetch_order_book(
        &self,
        symbol: &str,
        options: RequestOptions,
    ) -> Result<OrderBookResult> {
        let path = format!("depth?symbol={symbol}");
        self.get(&path, false, ApiVersion::V1, options).await
    }

    /// Order books for every market, keyed by symbol
    ///
    /// GET /v2/depth/all
    pub async fn fetch_all_order_books(
        &self,
        options: RequestOptions,
    ) -> Result<AllOrderBooksResult> {
        self.get("depth/all", false, ApiVersion::V2, options).await
    }

    /// Latest public trades for one market
    ///
    /// GET /v1/trades?symbol={symbol}
    pub async fn fetch_trades(&self, symbol: &str, options: RequestOptions) -> Result<TradesResult> {
        let path = format!("trades?symbol={symbol}");
        self.get(&path, false, ApiVersion::V1, options).await
    }

    /// Candle history; `from`/`to` go out as epoch seconds
    ///
    /// GET /v1/udf/history?symbol=..&resolution=..&from=..&to=..
    pub async fn fetch_ohlc(
        &self,
        request: &CandlesRequest,
        options: RequestOptions,
    ) -> Result<Candles> {
        let options = options.with_default_data(request)?;
        self.get("udf/history", false, ApiVersion::V1, options).await
    }
}
