/*
[INPUT]:  Order requests, client order ids and the API key header
[OUTPUT]: Order status, open orders and user trade history
[POS]:    HTTP layer - order endpoints (require api key)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{ApiVersion, RequestOptions, Result, WallexClient};
use crate::types::{
    NewOrderRequest, OpenOrdersResult, OrderResult, OrderSide, SymbolFilter, UserTradesResult,
};

impl WallexClient {
    /// Place a new order
    ///
    /// POST /v1/account/orders
    pub async fn create_order(
        &self,
        request: &NewOrderRequest,
        options: RequestOptions,
    ) -> Result<OrderResult> {
        let options = options.with_default_data(request)?;
        self.post("account/orders", true, ApiVersion::V1, options)
            .await
    }

    /// GET /v1/account/orders/{client_order_id}
    pub async fn fetch_order_status(
        &self,
        client_order_id: &str,
        options: RequestOptions,
    ) -> Result<OrderResult> {
        let path = format!("account/orders/{client_order_id}");
        self.get(&path, true, ApiVersion::V1, options).await
    }

    /// Cancel an order by its client order id
    ///
    /// DELETE /v1/account/orders/{client_order_id}
    pub async fn cancel_order(
        &self,
        client_order_id: &str,
        options: RequestOptions,
    ) -> Result<OrderResult> {
        let path = format!("account/orders/{client_order_id}");
        self.delete(&path, true, ApiVersion::V1, options).await
    }

    /// GET /v1/account/openOrders?symbol={symbol}
    pub async fn fetch_open_orders(
        &self,
        symbol: Option<&str>,
        options: RequestOptions,
    ) -> Result<OpenOrdersResult> {
        let filter = SymbolFilter {
            symbol: symbol.map(str::to_string),
            side: None,
        };
        let options = options.with_default_data(&filter)?;
        self.get("account/openOrders", true, ApiVersion::V1, options)
            .await
    }

    /// GET /v1/account/trades?symbol={symbol}&side={side}
    pub async fn fetch_user_trades(
        &self,
        symbol: Option<&str>,
        side: Option<OrderSide>,
        options: RequestOptions,
    ) -> Result<UserTradesResult> {
        let filter = SymbolFilter {
            symbol: symbol.map(str::to_string),
            side,
        };
        let options = options.with_default_data(&filter)?;
        self.get("account/trades", true, ApiVersion::V1, options)
            .await
    }
}
