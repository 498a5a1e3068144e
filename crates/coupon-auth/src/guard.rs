//! Route authorization guard.
//!
//! Pure decision function over the session state; nothing here touches the
//! store or the network.

use coupon_core::Role;

use crate::routes::Route;
use crate::state::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/";

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is still being restored; show neither content nor redirect.
    Loading,
    /// Navigate elsewhere, replacing the current history entry when `replace`.
    Redirect { to: &'static str, replace: bool },
    Render,
}

impl GuardDecision {
    const fn redirect(to: &'static str) -> Self {
        Self::Redirect { to, replace: true }
    }

    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether a protected view may render.
    ///
    /// `allowed_roles` of `None` admits any authenticated role.
    #[must_use]
    pub fn decide(state: &SessionState, allowed_roles: Option<&[Role]>) -> GuardDecision {
        match state {
            SessionState::Restoring => GuardDecision::Loading,
            SessionState::Anonymous => GuardDecision::redirect(LOGIN_PATH),
            SessionState::Authenticated(profile) => match allowed_roles {
                Some(roles) if !profile.has_role(roles) => {
                    tracing::debug!(role = %profile.role, "role not permitted for route");
                    GuardDecision::redirect(LANDING_PATH)
                }
                _ => GuardDecision::Render,
            },
        }
    }

    #[must_use]
    pub fn decide_route(state: &SessionState, route: &Route) -> GuardDecision {
        if route.requires_auth() {
            Self::decide(state, route.allowed_roles())
        } else {
            Self::login_view(state)
        }
    }

    /// Resolve a raw path first. Unknown paths redirect to the landing page.
    #[must_use]
    pub fn decide_path(state: &SessionState, path: &str) -> GuardDecision {
        Route::resolve(path).map_or_else(
            || GuardDecision::redirect(LANDING_PATH),
            |route| Self::decide_route(state, &route),
        )
    }

    /// The login view bounces an already-authenticated session to the landing page.
    #[must_use]
    pub const fn login_view(state: &SessionState) -> GuardDecision {
        if state.is_authenticated() {
            GuardDecision::redirect(LANDING_PATH)
        } else {
            GuardDecision::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::UserProfile;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated(UserProfile {
            id: "u1".into(),
            name: "Test".into(),
            role,
            client_id: (role != Role::Admin).then(|| "c1".to_string()),
            email: None,
        })
    }

    const TENANT: &[Role] = &[Role::Admin, Role::Client];

    #[test]
    fn restoring_shows_loading() {
        assert_eq!(
            RouteGuard::decide(&SessionState::Restoring, Some(TENANT)),
            GuardDecision::Loading
        );
        assert_eq!(
            RouteGuard::decide(&SessionState::Restoring, None),
            GuardDecision::Loading
        );
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(
            RouteGuard::decide(&SessionState::Anonymous, None),
            GuardDecision::Redirect {
                to: "/login",
                replace: true
            }
        );
    }

    #[rstest]
    #[case(Role::Cashier, GuardDecision::Redirect { to: "/", replace: true })]
    #[case(Role::Admin, GuardDecision::Render)]
    #[case(Role::Client, GuardDecision::Render)]
    fn tenant_routes_gate_by_role(#[case] role: Role, #[case] expected: GuardDecision) {
        assert_eq!(RouteGuard::decide(&signed_in(role), Some(TENANT)), expected);
    }

    #[rstest]
    #[case(Role::Admin)]
    #[case(Role::Client)]
    #[case(Role::Cashier)]
    fn no_role_set_admits_everyone(#[case] role: Role) {
        assert!(RouteGuard::decide(&signed_in(role), None).is_render());
    }

    #[rstest]
    #[case("/clients", Role::Admin, true)]
    #[case("/clients", Role::Client, false)]
    #[case("/dining", Role::Cashier, true)]
    #[case("/users", Role::Cashier, false)]
    #[case("/campaigns/abc/edit", Role::Client, true)]
    #[case("/campaigns/new", Role::Cashier, false)]
    #[case("/redemptions", Role::Cashier, true)]
    fn route_table_decisions(#[case] path: &str, #[case] role: Role, #[case] renders: bool) {
        assert_eq!(
            RouteGuard::decide_path(&signed_in(role), path).is_render(),
            renders
        );
    }

    #[test]
    fn unknown_path_redirects_to_landing() {
        assert_eq!(
            RouteGuard::decide_path(&signed_in(Role::Admin), "/nowhere"),
            GuardDecision::Redirect {
                to: "/",
                replace: true
            }
        );
    }

    #[test]
    fn login_view_bounces_authenticated_sessions() {
        assert_eq!(
            RouteGuard::decide_route(&signed_in(Role::Client), &Route::Login),
            GuardDecision::Redirect {
                to: "/",
                replace: true
            }
        );
        assert!(RouteGuard::decide_route(&SessionState::Anonymous, &Route::Login).is_render());
    }
}
