//! Staff account management.

use coupon_core::enums::AccountStatus;
use coupon_core::payloads::{CreateUserRequest, ResetPasswordRequest, UserStatusUpdate};
use serde_json::Value;

use crate::endpoint::segment;
use crate::http::{list_field, object_field};
use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn list(client_id: Option<&str>) -> Endpoint {
    Endpoint::get("/users").with_client_id(client_id)
}

#[must_use]
pub fn create() -> Endpoint {
    Endpoint::post("/users")
}

#[must_use]
pub fn update_status(id: &str) -> Endpoint {
    Endpoint::patch(format!("/users/{}/status", segment(id)))
}

#[must_use]
pub fn reset_password(id: &str) -> Endpoint {
    Endpoint::patch(format!("/users/{}/reset-password", segment(id)))
}

#[must_use]
pub fn delete(id: &str) -> Endpoint {
    Endpoint::delete(format!("/users/{}", segment(id)))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn list_users(&self, client_id: Option<&str>) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&list(client_id)).await?;
        Ok(list_field(body, "users"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&create(), request).await?;
        Ok(object_field(body, "user"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_user_status(
        &self,
        id: &str,
        status: AccountStatus,
    ) -> Result<Value, ApiError> {
        self.call_with(&update_status(id), &UserStatusUpdate { status })
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn reset_user_password(&self, id: &str, new_password: &str) -> Result<Value, ApiError> {
        let body = ResetPasswordRequest {
            new_password: new_password.to_string(),
        };
        self.call_with(&reset_password(id), &body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_user(&self, id: &str) -> Result<Value, ApiError> {
        self.call(&delete(id)).await
    }
}
