//
//  adacord-cli
//  api/adacord.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The top-level API entry point.
//!
//! [`AdacordApi`] composes one transport and one set of routes and hands
//! out the resource clients. There is no process-wide default instance:
//! commands construct a facade where they need one and pass it down, so
//! every credential decision is visible at the call site.
//!
//! # Example
//!
//! ```rust,no_run
//! use adacord_cli::api::AdacordApi;
//!
//! # async fn example() -> Result<(), adacord_cli::api::ApiError> {
//! // Interactive use: token comes from the stored login credential.
//! let api = AdacordApi::new()?;
//! for bucket in api.buckets().list().await? {
//!     println!("{}  {}", bucket.uuid, bucket.name);
//! }
//!
//! // Scripted use: literal token, credential store never touched.
//! let api = AdacordApi::with_token("1234")?;
//! # Ok(())
//! # }
//! ```

use crate::api::buckets::{Bucket, BucketHandle, BucketsClient};
use crate::api::client::{ApiRoutes, HttpClient};
use crate::api::common::ApiError;
use crate::api::tokens::ApiTokensClient;
use crate::api::users::UserClient;
use crate::auth::{BearerAuth, CredentialStore};

/// Facade over the Adacord API.
///
/// Owns the shared [`HttpClient`] and the central [`ApiRoutes`]. Resource
/// clients are constructed per call through the factory methods — they are
/// cheap views borrowing the facade's transport, so building one is not
/// more expensive than passing a reference around.
pub struct AdacordApi {
    http: HttpClient,
    routes: ApiRoutes,
}

impl AdacordApi {
    /// Creates a facade using the default credential provider, which reads
    /// the token stored by `adacord user login` on first need.
    ///
    /// A missing or corrupt credential store does not fail here; it
    /// surfaces as [`ApiError::Credential`] on the first authenticated
    /// call.
    pub fn new() -> Result<Self, ApiError> {
        let store = CredentialStore::from_config_dir()?;
        let auth = BearerAuth::new(move || store.token());
        Ok(Self::with_client(HttpClient::new(auth)?))
    }

    /// Creates a facade over a pre-built transport.
    pub fn with_client(http: HttpClient) -> Self {
        Self {
            http,
            routes: ApiRoutes::api(),
        }
    }

    /// Creates a facade from a literal bearer token, bypassing the local
    /// credential store entirely.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self::with_client(HttpClient::with_token(token)?))
    }

    /// Overrides the central API base URL.
    ///
    /// Intended for tests and alternate deployments; the version segment
    /// is unchanged.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.routes = ApiRoutes::for_host(base);
        self
    }

    /// The user resource client.
    pub fn user(&self) -> UserClient<'_> {
        UserClient::new(&self.http, &self.routes)
    }

    /// The buckets resource client.
    pub fn buckets(&self) -> BucketsClient<'_> {
        BucketsClient::new(&self.http, &self.routes)
    }

    /// The account-scoped API tokens resource client.
    pub fn api_tokens(&self) -> ApiTokensClient<'_> {
        ApiTokensClient::new(&self.http, &self.routes)
    }

    /// Fetches a bucket and binds it to its dedicated host.
    ///
    /// One round trip; the returned handle delegates lifecycle and token
    /// operations back to the buckets client scoped to this bucket.
    pub async fn bucket(&self, bucket: &str) -> Result<BucketHandle<'_>, ApiError> {
        self.buckets().resolve(bucket).await
    }

    /// Convenience pass-through for [`BucketsClient::create`].
    pub async fn create_bucket(
        &self,
        description: &str,
        schemaless: bool,
    ) -> Result<Bucket, ApiError> {
        self.buckets().create(description, schemaless).await
    }

    /// Convenience pass-through for [`BucketsClient::get`].
    pub async fn get_bucket(&self, bucket: &str) -> Result<Bucket, ApiError> {
        self.buckets().get(bucket).await
    }
}
