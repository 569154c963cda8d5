//
//  adacord-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module decouples *how a token is obtained* from *how it is attached
//! to a request*.
//!
//! ## Components
//!
//! - [`TokenProvider`]: a zero-argument operation producing a bearer token,
//!   typically a closure over the [`CredentialStore`].
//! - [`BearerAuth`]: the authenticator. It resolves its provider lazily on
//!   first use, caches the token for its whole lifetime, and injects an
//!   `Authorization: Bearer <token>` header into outgoing requests.
//! - [`CredentialStore`] / [`Credentials`]: the locally persisted login
//!   credential (see [`store`]).
//!
//! ## Resolve-Once Contract
//!
//! A [`BearerAuth`] invokes its provider at most once, no matter how many
//! requests it signs. There is no expiry or refresh logic: a token that
//! expires mid-session surfaces as an authentication error from the server
//! on the next call. The first resolution is guarded by a
//! single-initialization cell, so concurrent first use cannot invoke the
//! provider twice.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adacord_cli::auth::{BearerAuth, CredentialStore};
//!
//! // Default provider: read the stored login credential on first use.
//! let store = CredentialStore::from_config_dir()?;
//! let auth = BearerAuth::new(move || store.token());
//!
//! // Literal token, no store involved:
//! let scripted = BearerAuth::with_token("1234");
//! # Ok::<(), adacord_cli::auth::CredentialError>(())
//! ```

mod store;

pub use store::{CredentialError, CredentialStore, Credentials};

use once_cell::sync::OnceCell;
use reqwest::RequestBuilder;

/// A zero-argument operation that produces a bearer token.
///
/// Providers run local work only (reading the credential store, returning a
/// captured literal); they never perform network I/O.
pub type TokenProvider = Box<dyn Fn() -> Result<String, CredentialError> + Send + Sync>;

/// Injects a cached bearer token into outgoing requests.
///
/// The token is resolved from the provider on first need and cached for the
/// lifetime of the authenticator. Applying the authenticator to a request
/// mutates headers only; it performs no validation and no network I/O.
pub struct BearerAuth {
    provider: TokenProvider,
    token: OnceCell<String>,
}

impl BearerAuth {
    /// Creates an authenticator that resolves its token lazily from the
    /// given provider.
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn() -> Result<String, CredentialError> + Send + Sync + 'static,
    {
        Self {
            provider: Box::new(provider),
            token: OnceCell::new(),
        }
    }

    /// Creates an authenticator for a literal token.
    ///
    /// The cache is pre-filled, so the provider indirection (and with it the
    /// local credential store) is never consulted. Used for scripted,
    /// non-interactive access.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            provider: Box::new(|| Err(CredentialError::Missing)),
            token: OnceCell::with_value(token.into()),
        }
    }

    /// Returns the bearer token, resolving it on first call.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`CredentialError`] when no token can be
    /// produced. A failed resolution is not cached; the next call retries.
    pub fn token(&self) -> Result<&str, CredentialError> {
        self.token
            .get_or_try_init(|| (self.provider)())
            .map(String::as_str)
    }

    /// Applies the credential to an outgoing request.
    ///
    /// Sets the `Authorization` header to `Bearer <token>` and returns the
    /// builder for chaining.
    pub fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, CredentialError> {
        Ok(request.bearer_auth(self.token()?))
    }
}

impl std::fmt::Debug for BearerAuth {
    // Never print the token itself.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("resolved", &self.token.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_token_resolves_from_provider() {
        let auth = BearerAuth::new(|| Ok("test".to_string()));
        assert_eq!(auth.token().unwrap(), "test");
    }

    #[test]
    fn test_provider_invoked_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let auth = BearerAuth::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("test".to_string())
        });

        assert_eq!(auth.token().unwrap(), "test");
        assert_eq!(auth.token().unwrap(), "test");
        assert_eq!(auth.token().unwrap(), "test");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_token_bypasses_provider() {
        // The literal constructor's provider would fail if consulted.
        let auth = BearerAuth::with_token("1234");
        assert_eq!(auth.token().unwrap(), "1234");
    }

    #[test]
    fn test_provider_failure_propagates() {
        let auth = BearerAuth::new(|| Err(CredentialError::Missing));
        assert!(matches!(auth.token(), Err(CredentialError::Missing)));
    }
}
