//! Authentication calls, and the [`AuthBackend`] seam for the session context.

use async_trait::async_trait;
use coupon_auth::AuthBackend;
use coupon_core::payloads::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use coupon_core::{LoginResponse, MeResponse, UserProfile};
use serde_json::Value;

use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn login() -> Endpoint {
    Endpoint::post("/auth/login")
}

#[must_use]
pub fn me() -> Endpoint {
    Endpoint::get("/auth/me")
}

#[must_use]
pub fn register() -> Endpoint {
    Endpoint::post("/auth/register")
}

#[must_use]
pub fn change_password() -> Endpoint {
    Endpoint::patch("/auth/change-password")
}

impl ApiClient {
    /// `POST /auth/login`. Sent without a bearer token when none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.call_with(&login(), &body).await
    }

    /// `GET /auth/me`: the profile behind the stored credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// body without a `user`.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let resp: MeResponse = self.call(&me()).await?;
        Ok(resp.user)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.call_with(&register(), request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<Value, ApiError> {
        self.call_with(&change_password(), request).await
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    type Error = ApiError;

    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResponse, ApiError> {
        Self::login(self, identifier, secret).await
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.me().await
    }
}
