use std::rc::Rc;

use async_trait::async_trait;
use client::{
    CredentialProvider, HttpRequest, HttpResponse, Method, Repositories, ResourceClient, Transport,
    TransportError,
};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::window;

use crate::settings;

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Browser `fetch` through gloo-net
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        if !request.params.is_empty() {
            builder = builder.query(
                request
                    .params
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => {
                let prepared = builder.body(body).map_err(|e| {
                    log::error!("{} {} - Failed to build request: {}", request.method, request.path, e);
                    TransportError::new(e.to_string())
                })?;
                prepared.send().await
            }
            None => builder.send().await,
        };

        let response = sent.map_err(|e| {
            log::error!("{} {} - Request failed: {}", request.method, request.path, e);
            TransportError::new(e.to_string())
        })?;

        let status = response.status();
        log::trace!("{} {} - Response {} received", request.method, request.path, status);
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse::new(status, body))
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Bearer token kept in `localStorage`.
///
/// The token is read on every request so a value saved from the settings
/// screen takes effect without a reload.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageCredentials;

impl LocalStorageCredentials {
    pub fn stored_token() -> Option<String> {
        storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.trim().is_empty())
    }

    pub fn save_token(token: &str) -> Result<(), wasm_bindgen::JsValue> {
        if let Some(storage) = storage() {
            if token.trim().is_empty() {
                storage.remove_item(TOKEN_KEY)?;
            } else {
                storage.set_item(TOKEN_KEY, token.trim())?;
            }
        }
        Ok(())
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        Self::stored_token()
    }

    fn on_unauthorized(&self) {
        log::warn!("Server rejected the stored token; update it on the settings page");
    }
}

/// Repository bundle pointed at the configured backend
pub fn repositories() -> Repositories {
    let base_url = settings::current().api_base_url;
    log::debug!("Creating API client for {}", base_url);
    let client = ResourceClient::new(
        base_url,
        Rc::new(GlooTransport),
        Rc::new(LocalStorageCredentials),
    );
    Repositories::new(client)
}
