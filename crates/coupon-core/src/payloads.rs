//! Request payloads and list filters sent to the backend.
//!
//! Field names follow the backend's camelCase JSON. Optional fields are
//! skipped when absent so the backend applies its own defaults. Filters
//! render into query pairs; empty filters render no pairs at all.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AccountStatus, CampaignStatus, CouponStatus, OrderType, Role};
use crate::errors::CoreError;

/// Minimum password length accepted by the user forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a new password against the length rule and its confirmation.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the password is too short or the
/// confirmation does not match.
pub fn validate_password_pair(password: &str, confirmation: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirmation {
        return Err(CoreError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// Create/update body for a campaign. Defaults mirror a fresh campaign form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub campaign_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption_end_date: Option<NaiveDate>,
    pub slab_step_amount: f64,
    pub min_bill_amount: f64,
    pub allow_multiple_coupons: bool,
    pub max_coupons_per_invoice: u32,
    pub allow_partial_redemption: bool,
    pub require_bill_greater_than_coupon: bool,
    pub order_type_allowed: Vec<OrderType>,
    pub status: CampaignStatus,
}

impl Default for CampaignPayload {
    fn default() -> Self {
        Self {
            campaign_name: String::new(),
            client_id: None,
            collection_start_date: None,
            collection_end_date: None,
            redemption_start_date: None,
            redemption_end_date: None,
            slab_step_amount: 500.0,
            min_bill_amount: 500.0,
            allow_multiple_coupons: false,
            max_coupons_per_invoice: 1,
            allow_partial_redemption: false,
            require_bill_greater_than_coupon: true,
            order_type_allowed: OrderType::ALL.to_vec(),
            status: CampaignStatus::Draft,
        }
    }
}

impl CampaignPayload {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the campaign name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.campaign_name.trim().is_empty() {
            return Err(CoreError::Validation("campaign name is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub status: Option<CampaignStatus>,
}

impl CampaignFilter {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.status
            .map(|status| vec![("status", status.as_str().to_string())])
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Coupons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CouponFilter {
    pub client_id: Option<String>,
    pub status: Option<CouponStatus>,
    pub customer_name: Option<String>,
    pub customer_mobile: Option<String>,
}

impl CouponFilter {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = non_empty(self.client_id.as_deref()) {
            pairs.push(("clientId", id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(name) = non_empty(self.customer_name.as_deref()) {
            pairs.push(("customerName", name.to_string()));
        }
        if let Some(mobile) = non_empty(self.customer_mobile.as_deref()) {
            pairs.push(("customerMobile", mobile.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub coupon_id: String,
    pub invoice_no: String,
    pub bill_amount: f64,
    /// Only sent by admins, who act across tenants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl RedeemRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the invoice number is blank or the
    /// bill amount is not a positive number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.invoice_no.trim().is_empty() {
            return Err(CoreError::Validation("invoice number is required".into()));
        }
        if !(self.bill_amount.is_finite() && self.bill_amount > 0.0) {
            return Err(CoreError::Validation("bill amount must be positive".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Clients (tenants)
// ---------------------------------------------------------------------------

/// Create/update body for a tenant, optionally provisioning its login user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub name: String,
    #[serde(default)]
    pub pos_api_key: String,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_login_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_login_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_login_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub client_id: String,
}

impl CreateUserRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a required field is blank or the
    /// password is shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if [&self.email, &self.password, &self.name, &self.client_id]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(CoreError::Validation(
                "Please fill all required fields".into(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Dining
// ---------------------------------------------------------------------------

/// A dining visit submitted by a cashier; the backend issues coupons from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningVisit {
    pub customer_name: String,
    pub phone: String,
    pub bill_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl DiningVisit {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the phone is blank or the bill
    /// amount is not a positive number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.phone.trim().is_empty() {
            return Err(CoreError::Validation("phone is required".into()));
        }
        if !(self.bill_amount.is_finite() && self.bill_amount > 0.0) {
            return Err(CoreError::Validation("bill amount must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiningExportFilter {
    pub client_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DiningExportFilter {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = non_empty(self.client_id.as_deref()) {
            pairs.push(("clientId", id.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.to_string()));
        }
        pairs
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
