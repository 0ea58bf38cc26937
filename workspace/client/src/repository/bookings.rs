use model::{Booking, DEFAULT_LIMIT, ListQuery, ListResult};

use crate::error::ApiError;
use crate::http::ResourceClient;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRepository {
    client: ResourceClient,
}

impl BookingRepository {
    pub const PATH: &'static str = "/bookings";

    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    /// First cursor page with the default page size.
    pub fn default_query() -> ListQuery {
        ListQuery::cursor(None, DEFAULT_LIMIT)
    }

    /// `GET /bookings` (cursor pagination; `status` and `search` filters).
    pub async fn list(&self, query: &ListQuery) -> Result<ListResult<Booking>, ApiError> {
        let envelope = self
            .client
            .get::<Vec<Booking>>(Self::PATH, query.to_params())
            .await?;
        Ok(ListResult::from_envelope(envelope, query))
    }

    /// `GET /bookings/{id}`; an unknown id fails with a 404 `Http` error.
    pub async fn get(&self, id: &str) -> Result<Booking, ApiError> {
        let path = super::record_path(Self::PATH, id, "");
        let envelope = self.client.get::<Booking>(&path, Vec::new()).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_list_sends_cursor_params() {
        let mock = MockTransport::new();
        mock.on_page(
            Method::Get,
            "/bookings",
            json!([{"id": "b3"}, {"id": "b4"}]),
            json!({"nextCursor": "b4", "hasMore": true, "total": 9}),
        );
        let repo = BookingRepository::new(mock.client());

        let query = ListQuery::cursor(Some("b2".into()), 2).with_filter("status", "CONFIRMED");
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor(), Some("b4"));
        let sent = mock.last_request().unwrap();
        assert_eq!(sent.param("cursor"), Some("b2"));
        assert_eq!(sent.param("limit"), Some("2"));
        assert_eq!(sent.param("status"), Some("CONFIRMED"));
    }

    #[tokio::test]
    async fn test_get_unknown_booking_is_not_found() {
        let mock = MockTransport::new();
        mock.on_data(Method::Get, "/bookings/b1", json!({"id": "b1", "status": "PAID"}));
        let repo = BookingRepository::new(mock.client());

        assert_eq!(repo.get("b1").await.unwrap().status.as_deref(), Some("PAID"));
        assert!(repo.get("b404").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_encodes_id() {
        let mock = MockTransport::new();
        mock.on_data(Method::Get, "/bookings/b%2F1", json!({"id": "b/1"}));
        let repo = BookingRepository::new(mock.client());

        assert_eq!(repo.get("b/1").await.unwrap().id, "b/1");
        assert!(mock.last_request().unwrap().url.ends_with("/bookings/b%2F1"));
    }
}
