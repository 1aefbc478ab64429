/*
[INPUT]:  OTC symbol, side and amount with the API key header
[OUTPUT]: OTC market listing, price quotes and OTC orders
[POS]:    HTTP layer - over-the-counter endpoints (require api key)
[UPDATE]: When adding new OTC endpoints or changing quote flow
*/

use crate::http::{ApiVersion, RequestOptions, Result, WallexClient};
use crate::types::{
    NewOtcOrderRequest, OrderResult, OrderSide, OtcMarketsResult, OtcPriceResult, SymbolFilter,
};

impl WallexClient {
    /// GET /v1/otc/markets
    pub async fn fetch_otc_markets(&self, options: RequestOptions) -> Result<OtcMarketsResult> {
        self.get("otc/markets", true, ApiVersion::V1, options).await
    }

    /// Quote for one side of an OTC market
    ///
    /// GET /v1/otc/price?symbol={symbol}&side={side}
    pub async fn fetch_otc_price(
        &self,
        symbol: &str,
        side: OrderSide,
        options: RequestOptions,
    ) -> Result<OtcPriceResult> {
        let filter = SymbolFilter {
            symbol: Some(symbol.to_string()),
            side: Some(side),
        };
        let options = options.with_default_data(&filter)?;
        self.get("otc/price", true, ApiVersion::V1, options).await
    }

    /// POST /v1/otc/orders
    pub async fn create_otc_order(
        &self,
        request: &NewOtcOrderRequest,
        options: RequestOptions,
    ) -> Result<OrderResult> {
        let options = options.with_default_data(request)?;
        self.post("otc/orders", true, ApiVersion::V1, options).await
    }
}
