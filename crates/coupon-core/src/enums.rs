//! Role and status enums for the coupon loyalty backend.
//!
//! All enums use the backend's `SCREAMING_SNAKE_CASE` spelling on the wire.
//! `FromStr` accepts the wire spelling case-insensitively so CLI arguments
//! like `cashier` or `dine_in` parse without ceremony.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated user. Fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Client,
    Cashier,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Client, Self::Cashier];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Client => "CLIENT",
            Self::Cashier => "CASHIER",
        }
    }

    /// Whether users of this role belong to a tenant and carry a `clientId`.
    #[must_use]
    pub const fn is_tenant_scoped(self) -> bool {
        matches!(self, Self::Client | Self::Cashier)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown role '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// CampaignStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Ended,
}

impl CampaignStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Active, Self::Paused, Self::Ended];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Ended => "ENDED",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown campaign status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// CouponStatus
// ---------------------------------------------------------------------------

/// Status of an issued coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    Active,
    Used,
    Expired,
}

impl CouponStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Used, Self::Expired];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Used => "USED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CouponStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown coupon status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// AccountStatus
// ---------------------------------------------------------------------------

/// Activation status shared by tenants and users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl AccountStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// The opposite status (used by the user status toggle).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Active, Self::Inactive]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown account status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// OrderType
// ---------------------------------------------------------------------------

/// Order channel a campaign may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    pub const ALL: [Self; 3] = [Self::DineIn, Self::Takeaway, Self::Delivery];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DineIn => "DINE_IN",
            Self::Takeaway => "TAKEAWAY",
            Self::Delivery => "DELIVERY",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown order type '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_upper_case() {
        let json = serde_json::to_string(&Role::Cashier).unwrap();
        assert_eq!(json, "\"CASHIER\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("client".parse::<Role>().unwrap(), Role::Client);
        assert_eq!(" Cashier ".parse::<Role>().unwrap(), Role::Cashier);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn only_admin_is_not_tenant_scoped() {
        assert!(!Role::Admin.is_tenant_scoped());
        assert!(Role::Client.is_tenant_scoped());
        assert!(Role::Cashier.is_tenant_scoped());
    }

    #[test]
    fn order_type_uses_snake_wire_names() {
        let json = serde_json::to_string(&OrderType::DineIn).unwrap();
        assert_eq!(json, "\"DINE_IN\"");
        assert_eq!("dine_in".parse::<OrderType>().unwrap(), OrderType::DineIn);
    }

    #[test]
    fn account_status_toggles() {
        assert_eq!(AccountStatus::Active.toggled(), AccountStatus::Inactive);
        assert_eq!(AccountStatus::Inactive.toggled(), AccountStatus::Active);
    }

    #[test]
    fn campaign_status_defaults_to_draft() {
        assert_eq!(CampaignStatus::default(), CampaignStatus::Draft);
        assert_eq!("paused".parse::<CampaignStatus>().unwrap(), CampaignStatus::Paused);
    }

    #[test]
    fn coupon_status_rejects_unknown() {
        let err = "redeemed".parse::<CouponStatus>().unwrap_err();
        assert!(err.to_string().contains("unknown coupon status"));
    }
}
