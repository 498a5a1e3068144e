//! Coupon lookup, listing and redemption.

use coupon_core::payloads::{CouponFilter, RedeemRequest};
use serde_json::Value;

use crate::endpoint::segment;
use crate::http::{list_field, object_field};
use crate::{ApiClient, ApiError, Endpoint};

/// Active coupons held by one customer, optionally scoped to a tenant.
#[must_use]
pub fn by_customer(mobile: &str, client_id: Option<&str>) -> Endpoint {
    Endpoint::get(format!("/coupons/customer/{}/coupons", segment(mobile.trim())))
        .with_client_id(client_id)
}

#[must_use]
pub fn list(filter: &CouponFilter) -> Endpoint {
    Endpoint::get("/coupons").with_query(filter.query_pairs())
}

#[must_use]
pub fn redeem() -> Endpoint {
    Endpoint::post("/coupons/redeem")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn customer_coupons(
        &self,
        mobile: &str,
        client_id: Option<&str>,
    ) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&by_customer(mobile, client_id)).await?;
        Ok(list_field(body, "coupons"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn list_coupons(&self, filter: &CouponFilter) -> Result<Vec<Value>, ApiError> {
        let body: Value = self.call(&list(filter)).await?;
        Ok(list_field(body, "coupons"))
    }

    /// Redeem a coupon against an invoice. Returns the redemption record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (e.g. the backend refusing an already-used coupon).
    pub async fn redeem_coupon(&self, request: &RedeemRequest) -> Result<Value, ApiError> {
        let body: Value = self.call_with(&redeem(), request).await?;
        Ok(object_field(body, "redemption"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::enums::CouponStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn customer_lookup_encodes_mobile() {
        let endpoint = by_customer(" +91 98765 ", Some("c1"));
        assert_eq!(
            endpoint.url("http://x/api"),
            "http://x/api/coupons/customer/%2B91%2098765/coupons?clientId=c1"
        );
    }

    #[test]
    fn customer_lookup_without_tenant_has_no_query() {
        assert!(by_customer("9876543210", None).query.is_empty());
    }

    #[test]
    fn list_forwards_filters() {
        let endpoint = list(&CouponFilter {
            client_id: Some("c1".into()),
            status: Some(CouponStatus::Used),
            customer_name: Some(String::new()),
            customer_mobile: None,
        });
        assert_eq!(
            endpoint.url("http://x/api"),
            "http://x/api/coupons?clientId=c1&status=USED"
        );
    }
}
