//
//  adacord-cli
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User account operations.
//!
//! All operations in this module address endpoints that are deliberately
//! unauthenticated: they are how a user obtains a credential in the first
//! place. Nothing here attaches an `Authorization` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use adacord_cli::api::AdacordApi;
//!
//! # async fn example() -> Result<(), adacord_cli::api::ApiError> {
//! let api = AdacordApi::with_token("unused-for-login")?;
//! let session = api.user().login("dev@example.com", "hunter2").await?;
//! println!("token: {}", session.access_token);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiRoutes, HttpClient};
use crate::api::common::ApiError;

/// Token payload returned by a successful login.
///
/// Extra fields the service may add are ignored; only `access_token` is
/// required.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSession {
    /// The bearer token to present on authenticated calls.
    pub access_token: String,

    /// Refresh token, when the service issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// E-mail address the session belongs to.
    #[serde(default)]
    pub user_email: Option<String>,

    /// Token lifetime in seconds, relayed as the service sends it.
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Serialize)]
struct EmailPasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

/// Resource client for user account operations.
///
/// A cheap view over the shared transport; construct one per use via
/// [`AdacordApi::user`](crate::api::AdacordApi::user).
#[derive(Clone, Copy)]
pub struct UserClient<'a> {
    http: &'a HttpClient,
    routes: &'a ApiRoutes,
}

impl<'a> UserClient<'a> {
    pub(crate) fn new(http: &'a HttpClient, routes: &'a ApiRoutes) -> Self {
        Self { http, routes }
    }

    /// Registers a new account.
    ///
    /// The server sends a verification mail to the given address; the
    /// account payload it returns carries no secrets and is discarded.
    pub async fn create(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let data = EmailPasswordRequest { email, password };
        self.http
            .post_unauthenticated::<serde_json::Value, _>(&self.routes.url_for("/users"), &data)
            .await?;
        Ok(())
    }

    /// Exchanges e-mail and password for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        let data = EmailPasswordRequest { email, password };
        self.http
            .post_unauthenticated(&self.routes.url_for("/users/token"), &data)
            .await
    }

    /// Asks the server to send a password-reset mail.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let data = EmailRequest { email };
        self.http
            .post_unauthenticated::<serde_json::Value, _>(
                &self.routes.url_for("/users/password-reset"),
                &data,
            )
            .await?;
        Ok(())
    }

    /// Asks the server to re-send the verification mail.
    pub async fn request_verification_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let data = EmailPasswordRequest { email, password };
        self.http
            .post_unauthenticated::<serde_json::Value, _>(
                &self.routes.url_for("/users/email-verification"),
                &data,
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::AdacordApi;

    fn api_against(server: &mockito::Server) -> AdacordApi {
        AdacordApi::with_token("test")
            .unwrap()
            .with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_login_returns_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/token")
            .match_header("authorization", mockito::Matcher::Missing)
            .match_body(mockito::Matcher::Json(json!({
                "email": "dev@example.com",
                "password": "hunter2"
            })))
            .with_status(200)
            .with_body(
                r#"{"access_token":"tok-1","refresh_token":"ref-1","user_email":"dev@example.com","expires_in":"3600"}"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let session = api.user().login("dev@example.com", "hunter2").await.unwrap();

        assert_eq!(session.access_token, "tok-1");
        assert_eq!(session.refresh_token.as_deref(), Some("ref-1"));
        assert_eq!(session.user_email.as_deref(), Some("dev@example.com"));
        assert_eq!(session.expires_in.as_deref(), Some("3600"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_tolerates_minimal_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/users/token")
            .with_status(200)
            .with_body(r#"{"access_token":"tok-1","unexpected_field":true}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let session = api.user().login("dev@example.com", "pw").await.unwrap();

        assert_eq!(session.access_token, "tok-1");
        assert!(session.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_create_posts_without_credentials() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(201)
            .with_body(r#"{"email":"dev@example.com"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        api.user().create("dev@example.com", "hunter2").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_password_reset_failure_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/users/password-reset")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let err = api
            .user()
            .request_password_reset("dev@example.com")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
    }
}
