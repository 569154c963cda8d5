//
//  adacord-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the Adacord API
//!
//! This module provides the core HTTP client shared by all resource
//! clients. It handles authentication header injection, the fixed request
//! timeout, JSON (de)serialization, and the uniform translation of
//! non-success responses into [`ApiError`].
//!
//! ## Features
//!
//! - Bearer-token injection via [`BearerAuth`], suppressible per request
//!   for the unauthenticated user endpoints
//! - Fixed 10-second timeout on every request
//! - 4xx/5xx responses decoded and raised as [`ApiError::Api`] with the
//!   server's error body preserved verbatim
//! - Custom `adacord/<version>` User-Agent header
//!
//! ## Status Handling
//!
//! Exactly the 4xx and 5xx classes trigger [`ApiError::Api`]. Redirects are
//! resolved by the HTTP layer and are never reported as failures. No retry
//! or backoff is performed here beyond what the transport library does on
//! its own: a single failed attempt is a single reported failure.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::common::ApiError;
use crate::auth::BearerAuth;

/// Fixed timeout applied to every request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the central Adacord API.
pub const API_BASE: &str = "https://api.adacord.com";

/// Version path segment of the current API generation.
pub const API_VERSION: &str = "v1";

/// Builds versioned request URLs for one API host.
///
/// Resource clients own their URL construction; this type is the single
/// place where the base, the version segment, and the endpoint path are
/// joined. Two host forms exist:
///
/// - the central API, `https://api.adacord.com/v1/...`
///   (see [`ApiRoutes::api`])
/// - a resolved bucket's dedicated host, `https://<bucket>.adacrd.in/v1/...`,
///   derived from the bucket's canonical URL (see [`ApiRoutes::for_host`])
///
/// # Example
///
/// ```rust
/// use adacord_cli::api::ApiRoutes;
///
/// let routes = ApiRoutes::api();
/// assert_eq!(routes.url_for("/test"), "https://api.adacord.com/v1/test");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: String,
    version: &'static str,
}

impl ApiRoutes {
    /// Routes for the central API at [`API_BASE`].
    pub fn api() -> Self {
        Self::for_host(API_BASE)
    }

    /// Routes for an arbitrary host, e.g. a bucket's dedicated endpoint.
    pub fn for_host(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: API_VERSION,
        }
    }

    /// The base URL without version or endpoint.
    pub fn base(&self) -> &str {
        self.base.trim_end_matches('/')
    }

    /// Joins the base, version segment, and endpoint into a full URL.
    ///
    /// The join is exact: no double slashes, no missing segments,
    /// regardless of whether the endpoint carries a leading slash. An
    /// empty (or `"/"`) endpoint addresses the versioned root itself.
    pub fn url_for(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            format!("{}/{}", self.base(), self.version)
        } else {
            format!("{}/{}/{}", self.base(), self.version, endpoint)
        }
    }
}

/// The HTTP client shared by all resource clients.
///
/// Wraps a connection-pooled `reqwest::Client` configured with the fixed
/// timeout and one [`BearerAuth`]. The client is stateless across requests
/// except for the resolve-once token cache inside its authenticator, so a
/// single instance can back any number of concurrent calls.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use adacord_cli::api::HttpClient;
/// use adacord_cli::auth::{BearerAuth, CredentialStore};
///
/// // From the stored login credential:
/// let store = CredentialStore::from_config_dir()?;
/// let client = HttpClient::new(BearerAuth::new(move || store.token()))?;
///
/// // From a literal token (scripted use):
/// let scripted = HttpClient::with_token("1234")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct HttpClient {
    http: Client,
    auth: BearerAuth,
}

impl HttpClient {
    /// Creates a client that signs requests with the given authenticator.
    pub fn new(auth: BearerAuth) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { http, auth })
    }

    /// Creates a client preconfigured with a literal bearer token,
    /// bypassing the credential-provider indirection entirely.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(BearerAuth::with_token(token))
    }

    /// Makes an authenticated GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] for any 4xx/5xx response
    /// - [`ApiError::Network`] for connection failures, timeouts, or a
    ///   2xx body that does not deserialize into `T`
    /// - [`ApiError::Credential`] when no token can be resolved
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(url), true).await?;
        Ok(response.json().await?)
    }

    /// Makes an authenticated POST request with a JSON body and decodes
    /// the JSON response.
    pub async fn post<T, B>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(self.http.post(url).json(body), true).await?;
        Ok(response.json().await?)
    }

    /// Makes a POST request without attaching credentials.
    ///
    /// Used by the open user endpoints: account creation, login, password
    /// reset, and verification-mail requests.
    pub async fn post_unauthenticated<T, B>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(self.http.post(url).json(body), false).await?;
        Ok(response.json().await?)
    }

    /// Makes an authenticated DELETE request and decodes the JSON
    /// confirmation payload.
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.execute(self.http.delete(url), true).await?;
        Ok(response.json().await?)
    }

    /// Sends a request, optionally signing it, and checks the status.
    ///
    /// On 4xx/5xx the response body is decoded as JSON and carried in
    /// [`ApiError::Api`] unmodified; a body that is not JSON is wrapped as
    /// a JSON string so nothing the server said is lost. On success the
    /// response is returned for the caller to decode.
    async fn execute(
        &self,
        request: RequestBuilder,
        authenticate: bool,
    ) -> Result<Response, ApiError> {
        let request = if authenticate {
            self.auth.apply(request)?
        } else {
            request
        };

        let response = request.send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text));
            tracing::debug!(status = status.as_u16(), %body, "request failed");
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
