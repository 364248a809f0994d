use super::{
    app_types::{
        TransactionFilter, TransactionRecord, TransactionTodayStats, WalletAddressRequest,
        WalletInfo, WithdrawApplyRequest, WithdrawApplyResponse, WithdrawRecord,
    },
    client::ApiClient,
    types::{ApiError, ListRequest, PageQuery, PagedCollection},
};
use crate::validation::ensure_valid;

impl ApiClient {
    pub async fn wallet_info(&self) -> Result<WalletInfo, ApiError> {
        self.request_empty("/app/wallet/info").await
    }

    pub async fn set_wallet_address(&self, address: &str) -> Result<(), ApiError> {
        if address.trim().is_empty() {
            return Err(ApiError::validation("Wallet address is required"));
        }
        let body = WalletAddressRequest {
            address: address.trim().to_string(),
        };
        self.execute("/app/wallet/address", &body).await.map(|_| ())
    }

    pub async fn list_transactions(
        &self,
        query: &PageQuery,
        filter: &TransactionFilter,
    ) -> Result<PagedCollection<TransactionRecord>, ApiError> {
        self.request("/app/transaction/list", &ListRequest { query, filter })
            .await
    }

    pub async fn transaction_today_stats(&self) -> Result<TransactionTodayStats, ApiError> {
        self.request_empty("/app/transaction/today-stats").await
    }

    pub async fn apply_withdraw(
        &self,
        request: &WithdrawApplyRequest,
    ) -> Result<WithdrawApplyResponse, ApiError> {
        ensure_valid(request)?;
        self.request("/app/withdraw/apply", request).await
    }

    pub async fn list_withdrawals(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<WithdrawRecord>, ApiError> {
        self.request("/app/withdraw/list", query).await
    }
}
