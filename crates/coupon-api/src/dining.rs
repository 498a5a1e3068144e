//! Dining visits: submission (which issues coupons) and CSV export.

use coupon_core::payloads::{DiningExportFilter, DiningVisit};
use serde_json::Value;

use crate::{ApiClient, ApiError, Endpoint};

#[must_use]
pub fn submit() -> Endpoint {
    Endpoint::post("/dining")
}

#[must_use]
pub fn export_csv(filter: &DiningExportFilter) -> Endpoint {
    Endpoint::get("/dining/export/csv").with_query(filter.query_pairs())
}

impl ApiClient {
    /// Submit a visit. The response describes any coupons issued for it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn submit_dining(&self, visit: &DiningVisit) -> Result<Value, ApiError> {
        self.call_with(&submit(), visit).await
    }

    /// Raw CSV text of the visits matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn export_dining_csv(&self, filter: &DiningExportFilter) -> Result<String, ApiError> {
        self.call_text(&export_csv(filter)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_renders_date_range() {
        let filter = DiningExportFilter {
            client_id: Some("c1".into()),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 31),
        };
        assert_eq!(
            export_csv(&filter).url("http://x/api"),
            "http://x/api/dining/export/csv?clientId=c1&from=2024-01-01&to=2024-01-31"
        );
    }
}
