//! Dashboard metrics and redemption logs.

use serde_json::Value;

use crate::http::{list_field, object_field};
use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn dashboard(client_id: Option<&str>) -> Endpoint {
    Endpoint::get("/analytics/dashboard").with_client_id(client_id)
}

#[must_use]
pub fn redemptions(client_id: Option<&str>) -> Endpoint {
    Endpoint::get("/analytics/redemptions").with_client_id(client_id)
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn dashboard(&self, client_id: Option<&str>) -> Result<Value, ApiError> {
        let body: Value = self.call(&dashboard(client_id)).await?;
        Ok(object_field(body, "dashboard"))
    }

    /// Redemption log entries, newest first as ordered by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn redemption_logs(&self, client_id: Option<&str>) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&redemptions(client_id)).await?;
        Ok(list_field(body, "logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn client_id_is_optional() {
        assert_eq!(
            dashboard(Some("c1")).url("http://x/api"),
            "http://x/api/analytics/dashboard?clientId=c1"
        );
        assert_eq!(
            redemptions(None).url("http://x/api"),
            "http://x/api/analytics/redemptions"
        );
    }
}
