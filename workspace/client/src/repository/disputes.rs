use model::{Ack, Dispute, ListQuery, ListResult, ResolveDisputeRequest};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::ResourceClient;

/// Page size of the dispute list screen.
pub const DISPUTE_LIST_LIMIT: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct DisputeRepository {
    client: ResourceClient,
}

impl DisputeRepository {
    pub const PATH: &'static str = "/disputes";

    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    pub fn default_query() -> ListQuery {
        ListQuery::cursor(None, DISPUTE_LIST_LIMIT)
    }

    /// `GET /disputes`. There is no single-dispute endpoint.
    pub async fn list(&self, query: &ListQuery) -> Result<ListResult<Dispute>, ApiError> {
        let envelope = self
            .client
            .get::<Vec<Dispute>>(Self::PATH, query.to_params())
            .await?;
        Ok(ListResult::from_envelope(envelope, query))
    }

    /// Every dispute the server has, in server order.
    ///
    /// Sends no `limit` and keeps whatever comes back, following `nextCursor`
    /// while `hasMore` holds. A repeated cursor ends the walk.
    pub async fn list_all(&self) -> Result<Vec<Dispute>, ApiError> {
        let mut disputes = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let params = cursor
                .iter()
                .map(|c| ("cursor".to_string(), c.clone()))
                .collect();
            let envelope = self.client.get::<Vec<Dispute>>(Self::PATH, params).await?;
            disputes.extend(envelope.data);

            let meta = envelope.meta.unwrap_or_default();
            let next = meta
                .next_cursor
                .filter(|c| !c.is_empty() && meta.has_more.unwrap_or(false));
            match next {
                Some(next) if seen.contains(&next) => {
                    warn!("Dispute cursor {} repeated, stopping", next);
                    break;
                }
                Some(next) => {
                    seen.push(next.clone());
                    cursor = Some(next);
                }
                None => break,
            }
        }
        debug!("Fetched {} disputes", disputes.len());
        Ok(disputes)
    }

    /// `POST /disputes/{id}/resolve`
    pub async fn resolve(&self, id: &str, request: &ResolveDisputeRequest) -> Result<Ack, ApiError> {
        let path = super::record_path(Self::PATH, id, "/resolve");
        self.client.post(&path, request).await
    }
}

#[cfg(test)]
mod tests {
    use model::Resolution;
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::{HttpResponse, Method};

    #[tokio::test]
    async fn test_resolve_body() {
        let mock = MockTransport::new();
        mock.on_json(Method::Post, "/disputes/d1/resolve", 200, json!({"status": "success"}));
        let repo = DisputeRepository::new(mock.client());

        let request = ResolveDisputeRequest::new(Resolution::RefundTenant, "Host admitted fault").unwrap();
        repo.resolve("d1", &request).await.unwrap();

        assert_eq!(
            mock.last_request().unwrap().json_body(),
            Some(json!({"resolution": "REFUND_TENANT", "adminNotes": "Host admitted fault"}))
        );
    }

    #[tokio::test]
    async fn test_list_without_meta() {
        let mock = MockTransport::new();
        mock.on_data(Method::Get, "/disputes", json!([{"id": "d1", "status": "OPEN"}]));
        let repo = DisputeRepository::new(mock.client());

        let page = repo.list(&DisputeRepository::default_query()).await.unwrap();
        assert_eq!(page.items[0].id, "d1");
        assert!(!page.can_go_next());
    }

    #[tokio::test]
    async fn test_list_all_sends_no_limit_and_keeps_every_row() {
        let mock = MockTransport::new();
        let rows: Vec<_> = (0..250).map(|i| json!({"id": format!("d{i}")})).collect();
        mock.on_data(Method::Get, "/disputes", json!(rows));
        let repo = DisputeRepository::new(mock.client());

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 250);
        assert_eq!(all[249].id, "d249");
        assert!(mock.last_request().unwrap().params.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_follows_cursor() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/disputes", |request| {
            let body = match request.param("cursor") {
                None => json!({
                    "status": "success",
                    "data": [{"id": "d1"}],
                    "meta": {"hasMore": true, "nextCursor": "c2"}
                }),
                Some(_) => json!({
                    "status": "success",
                    "data": [{"id": "d2"}],
                    "meta": {"hasMore": true, "nextCursor": "c2"}
                }),
            };
            HttpResponse::new(200, body.to_string())
        });
        let repo = DisputeRepository::new(mock.client());

        let ids: Vec<_> = repo.list_all().await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
        assert_eq!(mock.count(Method::Get, "/disputes"), 2);
    }
}
