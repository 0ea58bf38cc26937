use model::{Ack, DEFAULT_LIMIT, ListQuery, ListResult, Property, VerifyPropertyRequest};

use crate::error::ApiError;
use crate::http::ResourceClient;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRepository {
    client: ResourceClient,
}

impl PropertyRepository {
    pub const PATH: &'static str = "/admin/properties";

    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    pub fn default_query() -> ListQuery {
        ListQuery::paged(1, DEFAULT_LIMIT)
    }

    /// `GET /admin/properties` (page numbers; `status` and `search` filters).
    pub async fn list(&self, query: &ListQuery) -> Result<ListResult<Property>, ApiError> {
        let envelope = self
            .client
            .get::<Vec<Property>>(Self::PATH, query.to_params())
            .await?;
        Ok(ListResult::from_envelope(envelope, query))
    }

    /// `POST /admin/properties/{id}/verify`
    pub async fn verify(&self, id: &str, request: &VerifyPropertyRequest) -> Result<Ack, ApiError> {
        let path = super::record_path(Self::PATH, id, "/verify");
        self.client.post(&path, request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_pending_page_without_next() {
        let mock = MockTransport::new();
        mock.on_page(
            Method::Get,
            "/admin/properties",
            json!([{"id": "p1"}, {"id": "p2"}, {"id": "p3"}]),
            json!({"page": 1, "totalPages": 1, "totalData": 3, "hasNextPage": false, "hasPrevPage": false}),
        );
        let repo = PropertyRepository::new(mock.client());

        let query = PropertyRepository::default_query().with_filter("status", "PENDING");
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items.len(), 3);
        assert!(!page.can_go_next());
        assert!(!page.can_go_prev());
        let sent = mock.last_request().unwrap();
        assert_eq!(sent.param("page"), Some("1"));
        assert_eq!(sent.param("status"), Some("PENDING"));
    }

    #[tokio::test]
    async fn test_verify_posts_camel_case_body() {
        let mock = MockTransport::new();
        mock.on_json(
            Method::Post,
            "/admin/properties/p1/verify",
            200,
            json!({"status": "success", "message": "Property rejected"}),
        );
        let repo = PropertyRepository::new(mock.client());

        let request = VerifyPropertyRequest::reject("Photos are blurry").unwrap();
        let ack = repo.verify("p1", &request).await.unwrap();

        assert_eq!(ack.message, "Property rejected");
        assert_eq!(
            mock.last_request().unwrap().json_body(),
            Some(json!({"isVerified": false, "rejectionReason": "Photos are blurry"}))
        );
    }
}
