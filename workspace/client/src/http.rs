use std::fmt;
use std::rc::Rc;

use model::Envelope;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::credentials::CredentialProvider;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Entry point for every call against the admin API.
///
/// Cloning is cheap; clones share the transport and credential provider.
#[derive(Clone)]
pub struct ResourceClient {
    base_url: Rc<str>,
    default_headers: Rc<Vec<(String, String)>>,
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialProvider>,
}

impl ResourceClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialProvider>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            default_headers: Rc::new(vec![(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            transport,
            credentials,
        }
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.default_headers).push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a resource path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<Envelope<T>, ApiError> {
        self.request(Method::Get, path, params, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| {
            error!("Failed to serialize body for POST {}: {}", path, e);
            ApiError::Encode(e.to_string())
        })?;
        self.request(Method::Post, path, Vec::new(), Some(body)).await
    }

    /// Sends one request and decodes the envelope of a 2xx answer.
    ///
    /// A 401 notifies the credential provider and fails with
    /// [`ApiError::Unauthenticated`]; nothing is cleared here.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<Envelope<T>, ApiError> {
        let request = self.prepare(method, path, params, body);
        debug!("{} {} (params: {:?})", method, request.url, request.params);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("{} {} - Network error: {}", method, path, e);
                return Err(ApiError::from(e));
            }
        };

        self.handle(method, path, response)
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<String>,
    ) -> HttpRequest {
        let mut headers = self.default_headers.as_ref().clone();
        if let Some(token) = self.credentials.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        HttpRequest {
            method,
            path: format!("/{}", path.trim_start_matches('/')),
            url: self.url(path),
            params,
            headers,
            body,
        }
    }

    fn handle<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: HttpResponse,
    ) -> Result<Envelope<T>, ApiError> {
        if response.status == 401 {
            warn!("{} {} - Unauthenticated", method, path);
            self.credentials.on_unauthorized();
            return Err(ApiError::Unauthenticated { body: response.body });
        }

        if !response.is_success() {
            error!("{} {} - HTTP error: {}", method, path, response.status);
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        match serde_json::from_str::<Envelope<T>>(&response.body) {
            Ok(envelope) => {
                info!("{} {} - Success", method, path);
                Ok(envelope)
            }
            Err(e) => {
                error!("{} {} - Failed to parse response: {}", method, path, e);
                Err(ApiError::Decode(e.to_string()))
            }
        }
    }
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ResourceClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.credentials, &other.credentials)
    }
}
