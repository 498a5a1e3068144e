//! Tenant (restaurant client) management. Admin only on the backend side.

use coupon_core::payloads::ClientPayload;
use serde_json::Value;

use crate::endpoint::segment;
use crate::http::{list_field, object_field};
use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn list() -> Endpoint {
    Endpoint::get("/clients")
}

#[must_use]
pub fn get(id: &str) -> Endpoint {
    Endpoint::get(format!("/clients/{}", segment(id)))
}

#[must_use]
pub fn create() -> Endpoint {
    Endpoint::post("/clients")
}

#[must_use]
pub fn update(id: &str) -> Endpoint {
    Endpoint::patch(format!("/clients/{}", segment(id)))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn list_clients(&self) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&list()).await?;
        Ok(list_field(body, "clients"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn get_client(&self, id: &str) -> Result<Value, ApiError> {
        let body: Value = self.call(&get(id)).await?;
        Ok(object_field(body, "client"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&create(), payload).await?;
        Ok(object_field(body, "client"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_client(&self, id: &str, payload: &ClientPayload) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&update(id), payload).await?;
        Ok(object_field(body, "client"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn create_and_update_share_collection_path() {
        assert_eq!(create().method, Method::POST);
        assert_eq!(create().path, "/clients");
        assert_eq!(update("c1").method, Method::PATCH);
        assert_eq!(update("c1").path, "/clients/c1");
        assert_eq!(get("c1"), Endpoint::get("/clients/c1"));
    }
}
