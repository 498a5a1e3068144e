use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Cached identity of the logged-in user.
///
/// Produced by the login and "who am I" endpoints, persisted next to the
/// bearer token, and consumed by the route guard for role decisions.
/// The backend is Mongo-backed, so `id` also accepts `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Tenant the user belongs to. Only meaningful for `CLIENT` and `CASHIER`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// The tenant this user is scoped to, if the role is tenant-scoped.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        if self.role.is_tenant_scoped() {
            self.client_id.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        allowed.contains(&self.role)
    }
}

/// Body of `POST /auth/login`.
///
/// Both fields are optional on the wire so that a response missing either one
/// can be detected and rejected as a contract violation instead of a decode
/// error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_accepts_mongo_id() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id":"65f0","name":"Ravi","role":"CASHIER","clientId":"c1","extra":true}"#,
        )
        .unwrap();
        assert_eq!(
            profile,
            UserProfile {
                id: "65f0".into(),
                name: "Ravi".into(),
                role: Role::Cashier,
                client_id: Some("c1".into()),
                email: None,
            }
        );
    }

    #[test]
    fn profile_omits_absent_client_id() {
        let profile = UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            role: Role::Admin,
            client_id: None,
            email: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("clientId").is_none());
        assert_eq!(json["role"], "ADMIN");
    }

    #[test]
    fn tenant_id_ignores_client_id_on_admin() {
        let admin = UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            role: Role::Admin,
            client_id: Some("c9".into()),
            email: None,
        };
        assert_eq!(admin.tenant_id(), None);

        let client = UserProfile {
            role: Role::Client,
            ..admin
        };
        assert_eq!(client.tenant_id(), Some("c9"));
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let parsed: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("abc"));
        assert!(parsed.user.is_none());
    }
}
