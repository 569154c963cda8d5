//
//  adacord-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Adacord Client
//!
//! This module provides the shared foundation for all API interactions:
//! the unified error taxonomy and the row payload type used by the data
//! ingestion and query endpoints.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Row`] - A single flat record pushed to or fetched from a bucket
//!
//! # Error Contract
//!
//! Every remote failure — authentication, validation, not-found, server
//! errors — surfaces as [`ApiError::Api`] carrying the HTTP status code and
//! the decoded JSON error body exactly as the server sent it. Callers
//! distinguish cases by inspecting the status code or body, not by matching
//! distinct error types.
//!
//! Failures that prevent the request from ever reaching the status check
//! (connection refused, timeouts, undecodable success bodies) surface as
//! [`ApiError::Network`], and a credential provider that cannot produce a
//! token surfaces as [`ApiError::Credential`]. Neither is ever conflated
//! with a server-reported failure.
//!
//! # Example
//!
//! ```rust
//! use adacord_cli::api::ApiError;
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Api { status_code: 404, .. }) => println!("Not found"),
//!         Err(ApiError::Api { status_code, body }) => {
//!             println!("Server said {status_code}: {body}")
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

use crate::auth::CredentialError;

/// A single flat record in a bucket: field name to JSON value.
///
/// Rows are relayed to and from the service without reshaping; the core
/// never interprets field names or values.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Unified error type for all Adacord API operations.
///
/// # Variants
///
/// | Variant | Meaning | Source |
/// |---------|---------|--------|
/// | `Api` | The server answered with a 4xx/5xx status | remote |
/// | `Network` | The request never produced a usable response | transport |
/// | `Credential` | No token could be resolved locally | local config |
///
/// # Notes
///
/// - The `Network` variant converts automatically from `reqwest::Error`.
/// - The `Credential` variant converts automatically from
///   [`CredentialError`], so the credential store and the transport share
///   one error channel without losing the distinction.
/// - Redirect (3xx) responses are not treated as failures; the transport
///   lets the HTTP layer resolve them.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server reported a failure (any 4xx or 5xx response).
    ///
    /// The body is the decoded JSON error payload, preserved verbatim —
    /// its structure is server-defined and is never reshaped by the client.
    #[error("API error ({status_code}): {body}")]
    Api {
        /// The numeric HTTP status code of the failed response.
        status_code: u16,
        /// The decoded JSON error body, exactly as the server sent it.
        body: serde_json::Value,
    },

    /// A transport-level error: connection failure, timeout, or a response
    /// body that could not be decoded.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The credential provider could not produce a token.
    ///
    /// This is a local configuration problem (missing or corrupt credential
    /// store), distinct from an authentication failure reported by the
    /// server, which arrives as [`ApiError::Api`] with a 401 status.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// A bucket payload advertised a canonical endpoint URL that does not
    /// parse, so no dedicated-host client could be built for it.
    #[error("invalid bucket endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl ApiError {
    /// Returns the HTTP status code if this is a server-reported failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
