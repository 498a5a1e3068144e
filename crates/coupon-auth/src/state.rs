use coupon_core::{Role, UserProfile};

/// Authentication state of the session context.
///
/// ```text
/// anonymous ──(stored token at startup)──→ restoring ──(who-am-i ok)──→ authenticated
///     ↑                                        │                            │
///     └──────────(who-am-i failed)─────────────┘                            │
///     └──────────────────(logout / 401 anywhere)────────────────────────────┘
/// anonymous ──(login)──→ authenticated
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Restoring,
    Authenticated(UserProfile),
}

impl SessionState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|profile| profile.role)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Restoring => "restoring",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_restoring_is_loading() {
        assert!(!SessionState::Anonymous.is_loading());
        assert!(SessionState::Restoring.is_loading());
        assert!(SessionState::Restoring.user().is_none());
    }

    #[test]
    fn authenticated_exposes_role() {
        let state = SessionState::Authenticated(UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            role: Role::Cashier,
            client_id: Some("c1".into()),
            email: None,
        });
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Cashier));
        assert_eq!(state.as_str(), "authenticated");
    }
}
