//
//  adacord-cli
//  api/tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Account-scoped API token management.
//!
//! API tokens authenticate machine access to the service. They exist in
//! two scopes: bucket-scoped tokens managed through the buckets resource
//! (see [`BucketsClient`](crate::api::BucketsClient)), and the
//! account-scoped tokens managed here at `/tokens`, which work against
//! every bucket the account owns. The two surfaces are deliberately
//! parallel; the only difference is the missing bucket segment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiRoutes, HttpClient};
use crate::api::common::ApiError;

/// An issued API token.
///
/// Constructed only by deserializing server payloads. Unknown fields are
/// ignored; a missing `uuid` or `token` is a decoding error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiToken {
    /// Stable identifier, assigned server-side.
    pub uuid: String,

    /// The secret token value. Shown once at creation; handle with care.
    pub token: String,

    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// When the token was created.
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub(crate) struct CreateTokenRequest<'a> {
    pub description: Option<&'a str>,
}

/// Resource client for account-scoped API tokens.
///
/// A cheap view over the shared transport; construct one per use via
/// [`AdacordApi::api_tokens`](crate::api::AdacordApi::api_tokens).
#[derive(Clone, Copy)]
pub struct ApiTokensClient<'a> {
    http: &'a HttpClient,
    routes: &'a ApiRoutes,
}

impl<'a> ApiTokensClient<'a> {
    pub(crate) fn new(http: &'a HttpClient, routes: &'a ApiRoutes) -> Self {
        Self { http, routes }
    }

    /// Issues a new account-scoped token.
    pub async fn create(&self, description: Option<&str>) -> Result<ApiToken, ApiError> {
        let data = CreateTokenRequest { description };
        self.http.post(&self.routes.url_for("/tokens"), &data).await
    }

    /// Lists all account-scoped tokens, in server order.
    pub async fn list(&self) -> Result<Vec<ApiToken>, ApiError> {
        self.http.get(&self.routes.url_for("/tokens")).await
    }

    /// Revokes a token by uuid, returning the server's confirmation
    /// payload verbatim.
    pub async fn delete(&self, token_uuid: &str) -> Result<serde_json::Value, ApiError> {
        self.http
            .delete(&self.routes.url_for(&format!("/tokens/{token_uuid}")))
            .await
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
    async fn test_create_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/tokens")
            .match_body(mockito::Matcher::Json(json!({"description": "ci token"})))
            .with_status(200)
            .with_body(
                r#"{"uuid":"tok-uuid-1","token":"s3cret","description":"ci token","created_at":"2026-02-01T10:00:00Z"}"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let token = api.api_tokens().create(Some("ci token")).await.unwrap();

        assert_eq!(token.uuid, "tok-uuid-1");
        assert_eq!(token.token, "s3cret");
        assert_eq!(token.description.as_deref(), Some("ci token"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_preserves_server_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/tokens")
            .with_status(200)
            .with_body(
                r#"[
                    {"uuid":"b","token":"t2","created_at":"2026-02-02T00:00:00Z"},
                    {"uuid":"a","token":"t1","created_at":"2026-02-01T00:00:00Z"}
                ]"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let tokens = api.api_tokens().list().await.unwrap();

        let uuids: Vec<_> = tokens.iter().map(|t| t.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation_verbatim() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/v1/tokens/tok-uuid-1")
            .with_status(200)
            .with_body(r#"{"uuid":"tok-uuid-1"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let confirmation = api.api_tokens().delete("tok-uuid-1").await.unwrap();

        assert_eq!(confirmation, json!({"uuid": "tok-uuid-1"}));
    }
}
