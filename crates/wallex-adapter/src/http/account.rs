/*
[INPUT]:  Account queries, withdrawal requests and the API key header
[OUTPUT]: Account data (profile, fees, banking, balances, transfers)
[POS]:    HTTP layer - account endpoints (require api key)
[UPDATE]: When adding new account endpoints or changing payload fields
*/

use rust_decimal::Decimal;

use crate::http::{ApiVersion, RequestOptions, Result, WallexClient};
use crate::types::{
    BalanceItem, BalanceResult, CardNumbersResult, CryptoDepositResult,
    CryptoWithdrawalHistoryResult, CryptoWithdrawalRequest, CryptoWithdrawalResult, FeesResult,
    IbansResult, MoneyWithdrawalRequest, MoneyWithdrawalResult, PageRequest, ProfileResult,
    WithdrawalHistoryRequest,
};

impl WallexClient {
    /// GET /v1/account/profile
    pub async fn fetch_profile(&self, options: RequestOptions) -> Result<ProfileResult> {
        self.get("account/profile", true, ApiVersion::V1, options)
            .await
    }

    /// Maker/taker rates per market
    ///
    /// GET /v1/account/fee
    pub async fn fetch_account_fee(&self, options: RequestOptions) -> Result<FeesResult> {
        self.get("account/fee", true, ApiVersion::V1, options).await
    }

    /// GET /v1/account/card-numbers
    pub async fn fetch_card_numbers(&self, options: RequestOptions) -> Result<CardNumbersResult> {
        self.get("account/card-numbers", true, ApiVersion::V1, options)
            .await
    }

    /// GET /v1/account/ibans
    pub async fn fetch_ibans(&self, options: RequestOptions) -> Result<IbansResult> {
        self.get("account/ibans", true, ApiVersion::V1, options).await
    }

    /// All balances, keyed by asset
    ///
    /// GET /v1/account/balances
    pub async fn fetch_balances(&self, options: RequestOptions) -> Result<BalanceResult> {
        self.get("account/balances", true, ApiVersion::V1, options)
            .await
    }

    /// Balance of a single asset; `Ok(None)` when the account has no such asset
    pub async fn fetch_balance(
        &self,
        asset: &str,
        options: RequestOptions,
    ) -> Result<Option<BalanceItem>> {
        let mut balances = self.fetch_balances(options).await?;
        Ok(balances.result.balances.remove(asset))
    }

    /// Withdraw fiat to a registered IBAN
    ///
    /// POST /v1/account/money-withdrawal
    pub async fn money_withdrawal(
        &self,
        iban: i64,
        value: Decimal,
        options: RequestOptions,
    ) -> Result<MoneyWithdrawalResult> {
        let options = options.with_default_data(&MoneyWithdrawalRequest { iban, value })?;
        self.post("account/money-withdrawal", true, ApiVersion::V1, options)
            .await
    }

    /// POST /v1/account/crypto-withdrawal
    pub async fn crypto_withdrawal(
        &self,
        request: &CryptoWithdrawalRequest,
        options: RequestOptions,
    ) -> Result<CryptoWithdrawalResult> {
        let options = options.with_default_data(request)?;
        self.post("account/crypto-withdrawal", true, ApiVersion::V1, options)
            .await
    }

    /// GET /v1/account/crypto-deposit?page=..&per_page=..
    pub async fn fetch_crypto_deposit_history(
        &self,
        page: &PageRequest,
        options: RequestOptions,
    ) -> Result<CryptoDepositResult> {
        let options = options.with_default_data(page)?;
        self.get("account/crypto-deposit", true, ApiVersion::V1, options)
            .await
    }

    /// GET /v1/account/crypto-withdrawal?page=..&per_page=..&from=..&to=..
    pub async fn fetch_crypto_withdrawal_history(
        &self,
        request: &WithdrawalHistoryRequest,
        options: RequestOptions,
    ) -> Result<CryptoWithdrawalHistoryResult> {
        let options = options.with_default_data(request)?;
        self.get("account/crypto-withdrawal", true, ApiVersion::V1, options)
            .await
    }
}
