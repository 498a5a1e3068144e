use std::sync::Arc;

use anyhow::{Context, bail};
use coupon_api::ApiClient;
use coupon_auth::guard::LOGIN_PATH;
use coupon_auth::{
    GuardDecision, Route, RouteGuard, SessionContext, SessionState, UnauthorizedSignal,
};
use coupon_config::CouponConfig;
use coupon_core::{Role, UserProfile};

use crate::bootstrap;

/// Shared resources for one `cpn` invocation: one store, one signal, one
/// gateway client and one session context wired together.
pub struct AppContext {
    pub config: CouponConfig,
    pub api: ApiClient,
    pub session: Arc<SessionContext<ApiClient>>,
}

impl AppContext {
    pub fn init(config: CouponConfig) -> anyhow::Result<Self> {
        let store = bootstrap::open_store(&config)?;
        let signal = UnauthorizedSignal::new();
        let api = ApiClient::from_config(&config.backend, Arc::clone(&store), signal.clone())
            .context("failed to create API client")?;
        let session = Arc::new(SessionContext::new(api.clone(), store));
        session.attach(&signal);

        Ok(Self {
            config,
            api,
            session,
        })
    }

    /// Restore the session and check it against `route`.
    ///
    /// Returns the profile allowed to proceed, or an error explaining why
    /// the command may not run.
    pub async fn authorize(&self, route: &Route) -> anyhow::Result<UserProfile> {
        let state = self.session.initialize().await;
        let decision = RouteGuard::decide_route(&state, route);
        admit(&state, &decision, route)
    }

    /// Restore the session and require any authenticated role.
    pub async fn authenticated(&self) -> anyhow::Result<UserProfile> {
        let state = self.session.initialize().await;
        let decision = RouteGuard::decide(&state, None);
        admit(&state, &decision, &Route::Dashboard)
    }
}

/// Turn a guard decision into a command outcome.
pub fn admit(
    state: &SessionState,
    decision: &GuardDecision,
    route: &Route,
) -> anyhow::Result<UserProfile> {
    match decision {
        GuardDecision::Render => state
            .user()
            .cloned()
            .context("not logged in. Run 'cpn auth login' first."),
        GuardDecision::Loading => bail!("session is still being restored; try again"),
        GuardDecision::Redirect { to, .. } if *to == LOGIN_PATH => {
            bail!("not logged in. Run 'cpn auth login' first.")
        }
        GuardDecision::Redirect { .. } => {
            let role = state.role().map_or("unknown", Role::as_str);
            bail!(
                "role {role} is not permitted to access {} ({})",
                route.label(),
                route.path()
            )
        }
    }
}
