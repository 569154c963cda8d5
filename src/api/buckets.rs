//
//  adacord-cli
//  api/buckets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Bucket lifecycle, token, ingestion, and query operations.
//!
//! # Overview
//!
//! Buckets are the central resource of the service: named containers for
//! ingested rows, queryable with a SQL-like string. This module provides
//!
//! - [`Bucket`]: the deserialized resource representation
//! - [`BucketsClient`]: the collection-level resource client
//!   (create/list/get/delete, token sub-resource, query, data push/fetch)
//! - [`BucketHandle`]: a resolved bucket bound to its dedicated host, with
//!   delegations back to the collection client
//!
//! # Addressing
//!
//! Buckets are keyed by uuid; the server also resolves names wherever it
//! can, so bucket references are passed through as opaque strings. Every
//! collection-level operation addresses the central API
//! (`/v1/buckets/{ref}/...`). A resolved [`BucketHandle`] additionally
//! talks to the bucket's own endpoint (`https://<bucket>.adacrd.in/v1/...`,
//! taken from the payload's canonical `url` field) for direct ingestion
//! and query.
//!
//! # Example
//!
//! ```rust,no_run
//! use adacord_cli::api::AdacordApi;
//!
//! # async fn example() -> Result<(), adacord_cli::api::ApiError> {
//! let api = AdacordApi::new()?;
//!
//! let bucket = api.buckets().create("sensor readings", true).await?;
//! println!("ingest at {}", bucket.url);
//!
//! let handle = api.bucket(&bucket.uuid).await?;
//! let result = handle.query("select * from readings").await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

use crate::api::client::{ApiRoutes, HttpClient};
use crate::api::common::{ApiError, Row};
use crate::api::tokens::{ApiToken, CreateTokenRequest};

/// Deserializes a flag the service emits either as a JSON boolean or as
/// the strings `"true"`/`"false"`.
fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean, got {other:?}"
            ))),
        },
    }
}

/// A data bucket as represented by the server.
///
/// Constructed only by deserializing server payloads — callers never build
/// one by hand. Unknown fields the server adds are ignored; a payload
/// missing `uuid`, `name`, or `url` fails to decode.
///
/// # Fields
///
/// * `uuid` - Stable identifier, assigned server-side
/// * `name` - Human-readable name
/// * `description` - Optional free-text description
/// * `url` - Canonical ingestion/query endpoint for this bucket
/// * `schemaless` - Whether the bucket accepts rows without a schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    /// Stable identifier, assigned server-side.
    pub uuid: String,

    /// Human-readable name of the bucket.
    pub name: String,

    /// Optional description of the bucket's purpose.
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical URL of the bucket's dedicated ingestion/query endpoint.
    pub url: String,

    /// Whether the bucket enforces no schema on incoming rows.
    /// The service emits this both as a boolean and as a string.
    #[serde(default, deserialize_with = "bool_from_any")]
    pub schemaless: bool,
}

#[derive(Serialize)]
struct CreateBucketRequest<'a> {
    description: &'a str,
    schemaless: bool,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct PushRowsRequest<'a> {
    data: &'a [Row],
}

/// Resource client for the buckets collection.
///
/// A cheap `Copy` view over the shared transport; construct one per use
/// via [`AdacordApi::buckets`](crate::api::AdacordApi::buckets). All
/// methods issue exactly one round trip and propagate errors unchanged.
#[derive(Clone, Copy)]
pub struct BucketsClient<'a> {
    http: &'a HttpClient,
    routes: &'a ApiRoutes,
}

impl<'a> BucketsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient, routes: &'a ApiRoutes) -> Self {
        Self { http, routes }
    }

    fn bucket_url(&self, bucket: &str, suffix: &str) -> String {
        self.routes.url_for(&format!("/buckets/{bucket}{suffix}"))
    }

    /// Creates a new bucket.
    pub async fn create(&self, description: &str, schemaless: bool) -> Result<Bucket, ApiError> {
        let data = CreateBucketRequest {
            description,
            schemaless,
        };
        self.http.post(&self.routes.url_for("/buckets"), &data).await
    }

    /// Lists all buckets of the account, preserving server order.
    pub async fn list(&self) -> Result<Vec<Bucket>, ApiError> {
        self.http.get(&self.routes.url_for("/buckets")).await
    }

    /// Fetches a single bucket by reference (uuid, or name where the
    /// server resolves it).
    pub async fn get(&self, bucket: &str) -> Result<Bucket, ApiError> {
        self.http.get(&self.bucket_url(bucket, "")).await
    }

    /// Deletes a bucket, returning the server's confirmation payload
    /// verbatim.
    pub async fn delete(&self, bucket: &str) -> Result<Value, ApiError> {
        self.http.delete(&self.bucket_url(bucket, "")).await
    }

    /// Issues a token scoped to one bucket.
    pub async fn create_token(
        &self,
        bucket: &str,
        description: Option<&str>,
    ) -> Result<ApiToken, ApiError> {
        let data = CreateTokenRequest { description };
        self.http
            .post(&self.bucket_url(bucket, "/tokens"), &data)
            .await
    }

    /// Lists the tokens scoped to one bucket, in server order.
    pub async fn get_tokens(&self, bucket: &str) -> Result<Vec<ApiToken>, ApiError> {
        self.http.get(&self.bucket_url(bucket, "/tokens")).await
    }

    /// Revokes a bucket-scoped token.
    pub async fn delete_token(&self, bucket: &str, token_uuid: &str) -> Result<Value, ApiError> {
        self.http
            .delete(&self.bucket_url(bucket, &format!("/tokens/{token_uuid}")))
            .await
    }

    /// Runs a query against one bucket, relaying the result payload as
    /// the server reports it.
    pub async fn query(&self, bucket: &str, query: &str) -> Result<Value, ApiError> {
        let data = QueryRequest { query };
        self.http.post(&self.bucket_url(bucket, "/query"), &data).await
    }

    /// Runs a query across all buckets of the account.
    pub async fn query_account(&self, query: &str) -> Result<Value, ApiError> {
        let data = QueryRequest { query };
        self.http
            .post(&self.routes.url_for("/buckets/query"), &data)
            .await
    }

    /// Pushes rows into a bucket through the central API.
    ///
    /// Partial acceptance is reported exactly as the server reports it;
    /// the client infers nothing beyond relaying the response.
    pub async fn push_data(&self, bucket: &str, rows: &[Row]) -> Result<Value, ApiError> {
        let data = PushRowsRequest { data: rows };
        self.http.post(&self.bucket_url(bucket, "/data"), &data).await
    }

    /// Fetches all rows of a bucket through the central API.
    pub async fn get_data(&self, bucket: &str) -> Result<Vec<Row>, ApiError> {
        self.http.get(&self.bucket_url(bucket, "/data")).await
    }

    /// Fetches a bucket and binds it to its dedicated host.
    pub async fn resolve(&self, bucket: &str) -> Result<BucketHandle<'a>, ApiError> {
        let bucket = self.get(bucket).await?;
        self.handle(bucket)
    }

    /// Binds an already-fetched bucket to its dedicated host.
    ///
    /// The endpoint is taken from the payload's canonical `url` field and
    /// validated here so a malformed server value surfaces at resolve time
    /// rather than on first use.
    pub fn handle(&self, bucket: Bucket) -> Result<BucketHandle<'a>, ApiError> {
        let endpoint = Url::parse(&bucket.url)?;
        let routes = ApiRoutes::for_host(endpoint.as_str());
        Ok(BucketHandle {
            bucket,
            routes,
            router: *self,
        })
    }
}

/// A resolved bucket bound to its dedicated host.
///
/// Owns the deserialized [`Bucket`] plus a non-owning back-reference to
/// the [`BucketsClient`] that produced it. The back-reference is a
/// borrowed view tied to the facade's transport: the handle cannot
/// outlive it and cannot reconfigure it. Lifecycle and token operations
/// delegate to the collection client pre-scoped to this bucket's uuid;
/// ingestion and query go straight to the bucket's own endpoint.
pub struct BucketHandle<'a> {
    bucket: Bucket,
    routes: ApiRoutes,
    router: BucketsClient<'a>,
}

impl<'a> BucketHandle<'a> {
    /// The resolved bucket payload.
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    /// Base URL of the bucket's dedicated endpoint.
    pub fn endpoint(&self) -> &str {
        self.routes.base()
    }

    /// Deletes this bucket. Equivalent to
    /// [`BucketsClient::delete`] with this bucket's uuid.
    pub async fn delete(&self) -> Result<Value, ApiError> {
        self.router.delete(&self.bucket.uuid).await
    }

    /// Issues a token scoped to this bucket.
    pub async fn create_token(&self, description: Option<&str>) -> Result<ApiToken, ApiError> {
        self.router.create_token(&self.bucket.uuid, description).await
    }

    /// Lists this bucket's tokens.
    pub async fn get_tokens(&self) -> Result<Vec<ApiToken>, ApiError> {
        self.router.get_tokens(&self.bucket.uuid).await
    }

    /// Revokes one of this bucket's tokens.
    pub async fn delete_token(&self, token_uuid: &str) -> Result<Value, ApiError> {
        self.router.delete_token(&self.bucket.uuid, token_uuid).await
    }

    /// Pushes rows through the central API, scoped to this bucket.
    pub async fn push_data(&self, rows: &[Row]) -> Result<Value, ApiError> {
        self.router.push_data(&self.bucket.uuid, rows).await
    }

    /// Fetches all rows through the central API, scoped to this bucket.
    pub async fn get_data(&self) -> Result<Vec<Row>, ApiError> {
        self.router.get_data(&self.bucket.uuid).await
    }

    /// Runs a query directly against the bucket's dedicated endpoint.
    pub async fn query(&self, query: &str) -> Result<Value, ApiError> {
        let data = QueryRequest { query };
        self.router
            .http
            .post(&self.routes.url_for("/query"), &data)
            .await
    }

    /// Pushes rows directly to the bucket's dedicated endpoint.
    pub async fn push(&self, rows: &[Row]) -> Result<Value, ApiError> {
        let data = PushRowsRequest { data: rows };
        self.router.http.post(&self.routes.url_for("/"), &data).await
    }

    /// Fetches every row from the bucket's dedicated endpoint.
    pub async fn fetch_all(&self) -> Result<Vec<Row>, ApiError> {
        self.router.http.get(&self.routes.url_for("/")).await
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
    async fn test_create_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/buckets")
            .match_body(mockito::Matcher::Json(json!({
                "description": "d",
                "schemaless": false
            })))
            .with_status(200)
            .with_body(
                r#"{"uuid":"123","name":"buckety","url":"https://your-bucket.ada.in","schemaless":"false","description":"fake bucket"}"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let bucket = api.buckets().create("d", false).await.unwrap();

        assert_eq!(bucket.uuid, "123");
        assert_eq!(bucket.name, "buckety");
        assert_eq!(bucket.description.as_deref(), Some("fake bucket"));
        assert_eq!(bucket.url, "https://your-bucket.ada.in");
        assert!(!bucket.schemaless);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_preserves_server_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets")
            .with_status(200)
            .with_body(
                r#"[
                    {"uuid":"2","name":"second","url":"https://second.adacrd.in"},
                    {"uuid":"1","name":"first","url":"https://first.adacrd.in"},
                    {"uuid":"3","name":"third","url":"https://third.adacrd.in"}
                ]"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let buckets = api.buckets().list().await.unwrap();

        let uuids: Vec<_> = buckets.iter().map(|b| b.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["2", "1", "3"]);
    }

    #[tokio::test]
    async fn test_payload_with_extra_fields_still_decodes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets/123")
            .with_status(200)
            .with_body(
                r#"{
                    "uuid":"123",
                    "name":"buckety",
                    "url":"https://your-bucket.ada.in",
                    "schemaless":true,
                    "enabled_google_pubsub_sa":"svc@project.iam",
                    "unexpected_field":{"nested":1}
                }"#,
            )
            .create_async()
            .await;

        let api = api_against(&server);
        let bucket = api.buckets().get("123").await.unwrap();

        assert_eq!(bucket.uuid, "123");
        assert_eq!(bucket.name, "buckety");
        assert!(bucket.schemaless);
        assert!(bucket.description.is_none());
    }

    #[tokio::test]
    async fn test_payload_missing_required_field_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets/123")
            .with_status(200)
            .with_body(r#"{"name":"buckety","url":"https://your-bucket.ada.in"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let err = api.buckets().get("123").await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_get_not_found_propagates_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets/unknown")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let err = api.buckets().get("unknown").await.unwrap_err();

        match err {
            ApiError::Api { status_code, body } => {
                assert_eq!(status_code, 404);
                assert_eq!(body, json!({"error": "not found"}));
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_delete_delegates_by_uuid() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets/123")
            .with_status(200)
            .with_body(format!(
                r#"{{"uuid":"123","name":"buckety","url":"{}"}}"#,
                server.url()
            ))
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", "/v1/buckets/123")
            .with_status(200)
            .with_body(r#"{"uuid":"123"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let handle = api.bucket("123").await.unwrap();
        let confirmation = handle.delete().await.unwrap();

        assert_eq!(confirmation, json!({"uuid": "123"}));
        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_handle_query_uses_dedicated_endpoint() {
        let mut server = mockito::Server::new_async().await;
        // The bucket's canonical url points at the mock server, so the
        // dedicated-host form resolves there too.
        server
            .mock("GET", "/v1/buckets/123")
            .with_status(200)
            .with_body(format!(
                r#"{{"uuid":"123","name":"buckety","url":"{}"}}"#,
                server.url()
            ))
            .create_async()
            .await;
        let query_mock = server
            .mock("POST", "/v1/query")
            .match_body(mockito::Matcher::Json(json!({"query": "select * from t"})))
            .with_status(200)
            .with_body(r#"[{"field":"value"}]"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let handle = api.bucket("123").await.unwrap();
        let result = handle.query("select * from t").await.unwrap();

        assert_eq!(result, json!([{"field": "value"}]));
        query_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_handle_push_and_fetch_roundtrip_rows() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/buckets/123")
            .with_status(200)
            .with_body(format!(
                r#"{{"uuid":"123","name":"buckety","url":"{}"}}"#,
                server.url()
            ))
            .create_async()
            .await;
        let push_mock = server
            .mock("POST", "/v1")
            .match_body(mockito::Matcher::Json(
                json!({"data": [{"sensor": "a", "value": 1}]}),
            ))
            .with_status(200)
            .with_body(r#"{"accepted":1}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/v1")
            .with_status(200)
            .with_body(r#"[{"sensor":"a","value":1}]"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let handle = api.bucket("123").await.unwrap();

        let row: Row = json!({"sensor": "a", "value": 1})
            .as_object()
            .unwrap()
            .clone();
        let result = handle.push(&[row]).await.unwrap();
        assert_eq!(result, json!({"accepted": 1}));
        push_mock.assert_async().await;

        let rows = handle.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["sensor"], json!("a"));
    }

    #[tokio::test]
    async fn test_centralized_push_and_query() {
        let mut server = mockito::Server::new_async().await;
        let push_mock = server
            .mock("POST", "/v1/buckets/123/data")
            .with_status(200)
            .with_body(r#"{"accepted":2}"#)
            .create_async()
            .await;
        let query_mock = server
            .mock("POST", "/v1/buckets/123/query")
            .match_body(mockito::Matcher::Json(json!({"query": "select 1"})))
            .with_status(200)
            .with_body(r#"[]"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let rows: Vec<Row> = vec![
            json!({"a": 1}).as_object().unwrap().clone(),
            json!({"a": 2}).as_object().unwrap().clone(),
        ];
        let pushed = api.buckets().push_data("123", &rows).await.unwrap();
        assert_eq!(pushed, json!({"accepted": 2}));
        push_mock.assert_async().await;

        let result = api.buckets().query("123", "select 1").await.unwrap();
        assert_eq!(result, json!([]));
        query_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bucket_token_lifecycle() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/buckets/123/tokens")
            .with_status(200)
            .with_body(
                r#"{"uuid":"t1","token":"s3cret","created_at":"2026-02-01T10:00:00Z"}"#,
            )
            .create_async()
            .await;
        server
            .mock("GET", "/v1/buckets/123/tokens")
            .with_status(200)
            .with_body(
                r#"[{"uuid":"t1","token":"s3cret","created_at":"2026-02-01T10:00:00Z"}]"#,
            )
            .create_async()
            .await;
        server
            .mock("DELETE", "/v1/buckets/123/tokens/t1")
            .with_status(200)
            .with_body(r#"{"uuid":"t1"}"#)
            .create_async()
            .await;

        let api = api_against(&server);
        let buckets = api.buckets();

        let token = buckets.create_token("123", None).await.unwrap();
        assert_eq!(token.uuid, "t1");
        assert!(token.description.is_none());

        let tokens = buckets.get_tokens("123").await.unwrap();
        assert_eq!(tokens.len(), 1);

        let confirmation = buckets.delete_token("123", "t1").await.unwrap();
        assert_eq!(confirmation, json!({"uuid": "t1"}));
    }
}
