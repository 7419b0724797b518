//! reqwest implementation of the remote collection client.
//!
//! [`StrapiClient`] speaks the backend's REST conventions: `/api/{path}`
//! URLs, a `{ "data": ..., "meta": ... }` response envelope, bodies
//! wrapped in `{ "data": ... }` on write, and bearer auth from a shared
//! [`Session`]. A 401 clears the session before the error propagates.
//! There is no automatic retry and no cancellation beyond the configured
//! request timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use xtrawrkx_core::DbId;

use crate::collection::Collection;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::query::Query;
use crate::session::Session;

/// HTTP client for the xtrawrkx Strapi backend.
pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl StrapiClient {
    /// Create a client with a fresh, unauthenticated [`Session`].
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Self::with_session(config, Session::new())
    }

    /// Create a client sharing an existing session handle.
    pub fn with_session(config: &ClientConfig, session: Session) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client injects credentials from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach credentials, send, and classify any failure.
    async fn send(&self, builder: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("backend returned 401, clearing session credentials");
            self.session.clear();
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::debug!(status = status.as_u16(), "request rejected by backend");
        Err(ApiError::classify(status.as_u16(), &body))
    }

    async fn decode(response: reqwest::Response) -> ApiResult<Value> {
        Ok(response.json::<Value>().await?)
    }

    /// `GET /api/{path}` with query parameters. Returns the full
    /// response body (envelope included).
    pub async fn get(&self, path: &str, query: &Query) -> ApiResult<Value> {
        tracing::debug!(path, "GET");
        let builder = self.http.get(self.url(path)).query(query.pairs());
        Self::decode(self.send(builder).await?).await
    }

    /// `POST /api/{path}` with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        tracing::debug!(path, "POST");
        let builder = self.http.post(self.url(path)).json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// `PUT /api/{path}` with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        tracing::debug!(path, "PUT");
        let builder = self.http.put(self.url(path)).json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// `PATCH /api/{path}` with a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> ApiResult<Value> {
        tracing::debug!(path, "PATCH");
        let builder = self.http.patch(self.url(path)).json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// `DELETE /api/{path}`. The response body is discarded.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        tracing::debug!(path, "DELETE");
        let builder = self.http.delete(self.url(path));
        self.send(builder).await?;
        Ok(())
    }

    /// `POST /api/{path}` with a multipart form (file upload).
    pub async fn upload(&self, path: &str, form: reqwest::multipart::Form) -> ApiResult<Value> {
        tracing::debug!(path, "POST multipart");
        let builder = self.http.post(self.url(path)).multipart(form);
        Self::decode(self.send(builder).await?).await
    }
}

/// Pull the `data` array out of a list-response envelope.
fn data_array(mut body: Value) -> ApiResult<Vec<Value>> {
    match body.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(envelope_error("a `data` array", &body)),
    }
}

/// Pull the `data` object out of a singleton-response envelope.
fn data_object(mut body: Value) -> ApiResult<Value> {
    match body.get_mut("data").map(Value::take) {
        Some(data @ Value::Object(_)) => Ok(data),
        _ => Err(envelope_error("a `data` object", &body)),
    }
}

fn envelope_error(expected: &str, body: &Value) -> ApiError {
    ApiError::Unexpected {
        status: 200,
        body: format!("expected {expected} in the response envelope, got: {body}"),
    }
}

#[async_trait]
impl Collection for StrapiClient {
    async fn list(&self, path: &str, query: &Query) -> ApiResult<Vec<Value>> {
        data_array(self.get(path, query).await?)
    }

    async fn get(&self, path: &str, id: DbId, query: &Query) -> ApiResult<Value> {
        data_object(StrapiClient::get(self, &format!("{path}/{id}"), query).await?)
    }

    async fn create(&self, path: &str, data: Value) -> ApiResult<Value> {
        data_object(self.post(path, &json!({ "data": data })).await?)
    }

    async fn update(&self, path: &str, id: DbId, data: Value) -> ApiResult<Value> {
        data_object(
            self.put(&format!("{path}/{id}"), &json!({ "data": data }))
                .await?,
        )
    }

    async fn remove(&self, path: &str, id: DbId) -> ApiResult<()> {
        self.delete(&format!("{path}/{id}")).await
    }

    async fn count(&self, path: &str, query: &Query) -> ApiResult<u64> {
        // One-row page: the total comes back in the pagination meta.
        let probe = query.clone().paginate(1, 1);
        let body = StrapiClient::get(self, path, &probe).await?;
        body.get("meta")
            .and_then(|meta| meta.get("pagination"))
            .and_then(|p| p.get("total"))
            .and_then(Value::as_u64)
            .ok_or_else(|| envelope_error("`meta.pagination.total`", &body))
    }
}
