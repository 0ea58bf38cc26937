//! HTTP access to the rental platform's admin API.
//!
//! [`ResourceClient`] is the single access point: it owns the base URL and
//! default headers, attaches the bearer token from an injected
//! [`CredentialProvider`], and turns every failure into an [`ApiError`].
//! The wire itself sits behind [`Transport`], so the same client runs in the
//! browser, in the CLI and against an in-memory mock.
//!
//! The repository adapters in [`repository`] map each resource family onto
//! typed operations.

pub mod credentials;
pub mod error;
pub mod http;
pub mod repository;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use credentials::{CredentialProvider, NoCredentials, StaticToken};
pub use error::{ApiError, TransportError};
pub use http::ResourceClient;
pub use repository::{
    BookingRepository, DisputeRepository, PayoutRepository, PropertyRepository, Repositories,
};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
