//! Campaign calls.

use coupon_core::payloads::{CampaignFilter, CampaignPayload};
use serde_json::Value;

use crate::endpoint::segment;
use crate::http::{list_field, object_field};
use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn list(filter: &CampaignFilter) -> Endpoint {
    Endpoint::get("/campaigns").with_query(filter.query_pairs())
}

#[must_use]
pub fn get(id: &str) -> Endpoint {
    Endpoint::get(format!("/campaigns/{}", segment(id)))
}

#[must_use]
pub fn create() -> Endpoint {
    Endpoint::post("/campaigns/create")
}

#[must_use]
pub fn update(id: &str) -> Endpoint {
    Endpoint::patch(format!("/campaigns/{}/update", segment(id)))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn list_campaigns(&self, filter: &CampaignFilter) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&list(filter)).await?;
        Ok(list_field(body, "campaigns"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn get_campaign(&self, id: &str) -> Result<Value, ApiError> {
        let body: Value = self.call(&get(id)).await?;
        Ok(object_field(body, "campaign"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn create_campaign(&self, payload: &CampaignPayload) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&create(), payload).await?;
        Ok(object_field(body, "campaign"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_campaign(
        &self,
        id: &str,
        payload: &CampaignPayload,
    ) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&update(id), payload).await?;
        Ok(object_field(body, "campaign"))
    }
}
