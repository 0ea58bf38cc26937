use model::{Ack, DEFAULT_LIMIT, ListQuery, ListResult, Payout, ProcessPayoutRequest, Wallet};

use crate::error::ApiError;
use crate::http::ResourceClient;

#[derive(Debug, Clone, PartialEq)]
pub struct PayoutRepository {
    client: ResourceClient,
}

impl PayoutRepository {
    pub const PATH: &'static str = "/finance/admin/payouts";
    pub const WALLET_PATH: &'static str = "/finance/wallet";

    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    pub fn default_query() -> ListQuery {
        ListQuery::cursor(None, DEFAULT_LIMIT)
    }

    /// `GET /finance/admin/payouts` (cursor pagination; optional `status`).
    pub async fn list(&self, query: &ListQuery) -> Result<ListResult<Payout>, ApiError> {
        let envelope = self
            .client
            .get::<Vec<Payout>>(Self::PATH, query.to_params())
            .await?;
        Ok(ListResult::from_envelope(envelope, query))
    }

    /// `POST /finance/admin/payouts/{id}/process`
    pub async fn process(&self, id: &str, request: &ProcessPayoutRequest) -> Result<Ack, ApiError> {
        let path = super::record_path(Self::PATH, id, "/process");
        self.client.post(&path, request).await
    }

    /// `GET /finance/wallet`, with the transaction log embedded.
    pub async fn wallet(&self) -> Result<Wallet, ApiError> {
        let envelope = self.client.get::<Wallet>(Self::WALLET_PATH, Vec::new()).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use model::PayoutAction;
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_wallet_is_stable_without_mutation() {
        let mock = MockTransport::new();
        mock.on_data(
            Method::Get,
            "/finance/wallet",
            json!({
                "id": "w1",
                "userId": "u1",
                "balance": "1250000.00",
                "currency": "IDR",
                "transactions": [
                    {"id": "t1", "walletId": "w1", "amount": "250000", "type": "DEBIT", "category": "PAYOUT"}
                ]
            }),
        );
        let repo = PayoutRepository::new(mock.client());

        let first = repo.wallet().await.unwrap();
        let second = repo.wallet().await.unwrap();
        assert_eq!(first.balance, second.balance);
        assert_eq!(first.transactions, second.transactions);
        assert_eq!(mock.count(Method::Get, "/finance/wallet"), 2);
    }

    #[tokio::test]
    async fn test_process_omits_blank_notes() {
        let mock = MockTransport::new();
        mock.on_json(Method::Post, "/finance/admin/payouts/p1/process", 200, json!({"status": "success"}));
        let repo = PayoutRepository::new(mock.client());

        repo.process("p1", &ProcessPayoutRequest::new(PayoutAction::Approve, ""))
            .await
            .unwrap();
        assert_eq!(mock.last_request().unwrap().json_body(), Some(json!({"action": "APPROVE"})));
    }

    #[tokio::test]
    async fn test_list_status_filter() {
        let mock = MockTransport::new();
        mock.on_page(
            Method::Get,
            "/finance/admin/payouts",
            json!([{"id": "p1", "amount": 100, "status": "PENDING"}]),
            json!({"hasMore": false}),
        );
        let repo = PayoutRepository::new(mock.client());

        let query = PayoutRepository::default_query().with_filter("status", "PENDING");
        let page = repo.list(&query).await.unwrap();
        assert!(page.items[0].is_pending());
        assert_eq!(mock.last_request().unwrap().param("status"), Some("PENDING"));
    }
}
