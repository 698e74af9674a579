//! REST client for the catalog backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to `ApiError::Transport`, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into two classes. `Http` means a response arrived with a
//! non-2xx status and carries the leniently decoded error body. `Transport`
//! means no usable response: the request never completed, or a success body
//! could not be decoded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Credentials, ErrorBody, LoginResponse, ProductListResponse, RegisterResponse};
use crate::config::ClientConfig;

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";
pub const PRODUCTS_PATH: &str = "/products/";

/// A failed catalog API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16, body: ErrorBody },
    /// No usable response was received.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// `Authorization` header value for a bearer `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fixed message shown for transport failures.
pub fn network_error_message(config: &ClientConfig) -> String {
    format!("Network error. Please check if the server is running on {}", config.api_base)
}

/// The three backend operations the client performs.
///
/// Pages talk to [`HttpCatalogApi`]; the state flows are generic over this
/// trait so they can run against an in-process fake.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// `POST /register` with a JSON credentials body.
    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError>;

    /// `POST /login` with a JSON credentials body.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /products/` authenticated with `token`.
    async fn list_products(&self, token: &str) -> Result<ProductListResponse, ApiError>;
}

/// Browser fetch implementation of [`CatalogApi`].
#[derive(Clone, Debug, Default)]
pub struct HttpCatalogApi {
    config: ClientConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn post_credentials<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.url(path))
            .header("accept", "application/json")
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_response(resp).await
    }
}

#[cfg(not(feature = "csr"))]
fn not_available() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("catalog request failed: {e}");
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("{} returned {status}", resp.url());
        return Err(ApiError::Http { status, body: ErrorBody::from_text(&text) });
    }
    resp.json::<T>().await.map_err(transport)
}

impl CatalogApi for HttpCatalogApi {
    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_credentials(REGISTER_PATH, credentials).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(not_available())
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_credentials(LOGIN_PATH, credentials).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(not_available())
        }
    }

    async fn list_products(&self, token: &str) -> Result<ProductListResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.url(PRODUCTS_PATH))
                .header("Authorization", &bearer_header(token))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(not_available())
        }
    }
}
