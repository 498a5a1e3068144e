//! Route table: every screen, its path, and who may see it.

use coupon_core::Role;

const TENANT_ROLES: &[Role] = &[Role::Admin, Role::Client];
const STAFF_ROLES: &[Role] = &[Role::Admin, Role::Client, Role::Cashier];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Campaigns,
    CampaignNew,
    CampaignEdit(String),
    Clients,
    Redeem,
    Redemptions,
    Coupons,
    Dining,
    Users,
    Login,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".into(),
            Self::Campaigns => "/campaigns".into(),
            Self::CampaignNew => "/campaigns/new".into(),
            Self::CampaignEdit(id) => format!("/campaigns/{id}/edit"),
            Self::Clients => "/clients".into(),
            Self::Redeem => "/redeem".into(),
            Self::Redemptions => "/redemptions".into(),
            Self::Coupons => "/coupons".into(),
            Self::Dining => "/dining".into(),
            Self::Users => "/users".into(),
            Self::Login => "/login".into(),
        }
    }

    /// Roles allowed to render the route. `None` means any authenticated user.
    #[must_use]
    pub const fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::CampaignNew | Self::CampaignEdit(_) | Self::Coupons | Self::Users => {
                Some(TENANT_ROLES)
            }
            Self::Clients => Some(ADMIN_ONLY),
            Self::Dining => Some(STAFF_ROLES),
            Self::Dashboard
            | Self::Campaigns
            | Self::Redeem
            | Self::Redemptions
            | Self::Login => None,
        }
    }

    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Campaigns => "Campaigns",
            Self::CampaignNew => "New Campaign",
            Self::CampaignEdit(_) => "Edit Campaign",
            Self::Clients => "Clients",
            Self::Redeem => "Redeem",
            Self::Redemptions => "Redemptions",
            Self::Coupons => "Coupons",
            Self::Dining => "Dining",
            Self::Users => "Users",
            Self::Login => "Login",
        }
    }

    /// Map a path to its route. Trailing slashes are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Self::Dashboard,
            ["campaigns"] => Self::Campaigns,
            ["campaigns", "new"] => Self::CampaignNew,
            ["campaigns", id, "edit"] => Self::CampaignEdit((*id).to_string()),
            ["clients"] => Self::Clients,
            ["redeem"] => Self::Redeem,
            ["redemptions"] => Self::Redemptions,
            ["coupons"] => Self::Coupons,
            ["dining"] => Self::Dining,
            ["users"] => Self::Users,
            ["login"] => Self::Login,
            _ => return None,
        };
        Some(route)
    }
}

/// Navigation entries shown to a role, in display order.
#[must_use]
pub fn navigation_for(role: Role) -> Vec<Route> {
    match role {
        Role::Cashier => vec![Route::Dining],
        Role::Client => vec![
            Route::Dashboard,
            Route::Campaigns,
            Route::Coupons,
            Route::Dining,
            Route::Redeem,
            Route::Redemptions,
            Route::Users,
        ],
        Role::Admin => vec![
            Route::Dashboard,
            Route::Campaigns,
            Route::Coupons,
            Route::Dining,
            Route::Redeem,
            Route::Redemptions,
            Route::Clients,
            Route::Users,
        ],
    }
}
