//! Seams between controllers and the repositories they drive.

use async_trait::async_trait;
use client::{
    ApiError, BookingRepository, DisputeRepository, PayoutRepository, PropertyRepository,
};
use model::{
    Ack, ActionDraft, Booking, Dispute, ListQuery, ListResult, Payout, ProcessDraft, Property,
    ResolveDraft, VerifyDraft,
};

/// Something a list view can page through.
#[async_trait(?Send)]
pub trait ListSource {
    type Item: Clone;

    async fn fetch(&self, query: &ListQuery) -> Result<ListResult<Self::Item>, ApiError>;
}

/// The state-changing call behind an action modal.
#[async_trait(?Send)]
pub trait Mutation {
    type Draft: ActionDraft;

    async fn apply(
        &self,
        id: &str,
        request: &<Self::Draft as ActionDraft>::Request,
    ) -> Result<Ack, ApiError>;
}

#[async_trait(?Send)]
impl ListSource for BookingRepository {
    type Item = Booking;

    async fn fetch(&self, query: &ListQuery) -> Result<ListResult<Booking>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl ListSource for PropertyRepository {
    type Item = Property;

    async fn fetch(&self, query: &ListQuery) -> Result<ListResult<Property>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl ListSource for DisputeRepository {
    type Item = Dispute;

    async fn fetch(&self, query: &ListQuery) -> Result<ListResult<Dispute>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl ListSource for PayoutRepository {
    type Item = Payout;

    async fn fetch(&self, query: &ListQuery) -> Result<ListResult<Payout>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl Mutation for PropertyRepository {
    type Draft = VerifyDraft;

    async fn apply(&self, id: &str, request: &model::VerifyPropertyRequest) -> Result<Ack, ApiError> {
        self.verify(id, request).await
    }
}

#[async_trait(?Send)]
impl Mutation for DisputeRepository {
    type Draft = ResolveDraft;

    async fn apply(&self, id: &str, request: &model::ResolveDisputeRequest) -> Result<Ack, ApiError> {
        self.resolve(id, request).await
    }
}

#[async_trait(?Send)]
impl Mutation for PayoutRepository {
    type Draft = ProcessDraft;

    async fn apply(&self, id: &str, request: &model::ProcessPayoutRequest) -> Result<Ack, ApiError> {
        self.process(id, request).await
    }
}
