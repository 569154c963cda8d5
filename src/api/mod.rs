//
//  adacord-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Adacord data bucket service.
//!
//! ## Architecture
//!
//! - [`client`]: core transport — authentication injection, fixed timeout,
//!   uniform non-success translation, versioned URL construction
//! - [`common`]: the error taxonomy and shared payload types
//! - [`users`]: account registration, login, password reset
//! - [`buckets`]: bucket lifecycle, token sub-resource, ingestion, query
//! - [`tokens`]: account-scoped API token management
//! - [`adacord`]: the [`AdacordApi`] facade tying it all together
//!
//! ## Usage
//!
//! ```rust,no_run
//! use adacord_cli::api::AdacordApi;
//!
//! # async fn example() -> Result<(), adacord_cli::api::ApiError> {
//! let api = AdacordApi::new()?;
//! let bucket = api.create_bucket("crash reports", true).await?;
//! println!("created {} at {}", bucket.uuid, bucket.url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every remote failure is an [`ApiError::Api`] carrying the HTTP status
//! code and the server's JSON error body verbatim; resource clients never
//! catch or reshape it. Transport and local-credential failures use the
//! other [`ApiError`] variants. See [`common`] for the full contract.

pub mod adacord;
pub mod buckets;
pub mod client;
pub mod common;
pub mod tokens;
pub mod users;

pub use adacord::AdacordApi;
pub use buckets::{Bucket, BucketHandle, BucketsClient};
pub use client::{ApiRoutes, HttpClient, API_BASE, API_VERSION, HTTP_TIMEOUT};
pub use common::{ApiError, Row};
pub use tokens::{ApiToken, ApiTokensClient};
pub use users::{LoginSession, UserClient};
