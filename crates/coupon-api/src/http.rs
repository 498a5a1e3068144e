//! Request and response interception shared by every call group.
//!
//! Outgoing: attach `Authorization: Bearer <token>` when the store holds a
//! credential. Incoming: 401 clears the store and fires the unauthorized
//! signal exactly once, other non-success statuses become
//! [`ApiError::Status`], and bodies decode into the caller's type.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ApiClient, Endpoint, error::ApiError};

impl ApiClient {
    /// Send a request and return the successful response.
    pub(crate) async fn execute(
        &self,
        endpoint: &Endpoint,
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let credential = self.store.token();
        tracing::debug!(
            method = %endpoint.method,
            path = %endpoint.path,
            authenticated = credential.is_some(),
            "api request"
        );

        let mut request = self
            .http
            .request(endpoint.method.clone(), endpoint.url(&self.base_url));
        if let Some(credential) = &credential {
            request = request.header(AUTHORIZATION, credential.bearer());
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request.send().await?;
        self.check_response(endpoint, resp).await
    }

    async fn check_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(status, &body);

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = %endpoint.path, "backend rejected the session; logging out");
            if let Err(error) = self.store.clear() {
                tracing::warn!(%error, "failed to clear session store");
            }
            self.signal.notify();
            return Err(ApiError::Unauthorized { message });
        }

        tracing::debug!(path = %endpoint.path, status = status.as_u16(), %message, "api error");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Body-less call decoded into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let resp = self.execute(endpoint, None).await?;
        decode(resp).await
    }

    /// JSON-body call decoded into `T`.
    pub(crate) async fn call_with<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = self.execute(endpoint, Some(body)).await?;
        decode(resp).await
    }

    /// Body-less call returning the raw response text.
    pub(crate) async fn call_text(&self, endpoint: &Endpoint) -> Result<String, ApiError> {
        let resp = self.execute(endpoint, None).await?;
        Ok(resp.text().await?)
    }
}

/// Decode a success body. An empty body decodes as JSON `null`.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let text = resp.text().await?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pick the most useful message out of an error body.
///
/// Order: `error` field, first `errors[].msg`, raw body, reason phrase.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(message) = value
            .get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|first| first.get("msg"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }
    }

    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Unwrap a `{ "<key>": [...] }` list envelope. Missing or non-array → empty.
pub(crate) fn list_field(mut value: Value, key: &str) -> Vec<Value> {
    match value.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Unwrap a `{ "<key>": {...} }` object envelope, or return the body as-is.
pub(crate) fn object_field(mut value: Value, key: &str) -> Value {
    match value.get_mut(key).map(Value::take) {
        Some(inner) if !inner.is_null() => inner,
        _ => value,
    }
}
