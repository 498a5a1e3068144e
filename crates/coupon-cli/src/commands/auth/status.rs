use coupon_auth::navigation_for;
use coupon_core::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: &'static str,
    authenticated: bool,
    user: Option<UserProfile>,
    /// Paths this user may open, in menu order.
    navigation: Vec<String>,
    backend: String,
    env: String,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.session.initialize().await;
    let navigation = state
        .role()
        .map(|role| navigation_for(role).into_iter().map(|route| route.path()).collect())
        .unwrap_or_default();

    output(
        &AuthStatusResponse {
            state: state.as_str(),
            authenticated: state.is_authenticated(),
            user: state.user().cloned(),
            navigation,
            backend: ctx.api.base_url().to_string(),
            env: ctx.config.backend.env.to_string(),
        },
        flags.format,
    )
}
