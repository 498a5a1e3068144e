use anyhow::anyhow;
use coupon_api::ApiError;
use coupon_auth::{GuardDecision, Route, RouteGuard, SessionError};
use coupon_core::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::prompt::secret_or_stdin;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    already_logged_in: bool,
    user: UserProfile,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.force {
        let state = ctx.session.initialize().await;
        if let (GuardDecision::Redirect { .. }, Some(user)) =
            (RouteGuard::decide_route(&state, &Route::Login), state.user())
        {
            return output(
                &AuthLoginResponse {
                    authenticated: true,
                    already_logged_in: true,
                    user: user.clone(),
                },
                flags.format,
            );
        }
    }

    let password = secret_or_stdin(args.password.as_deref(), "password")?;
    let email = args.email.trim();
    let attempt = if args.force {
        ctx.session.relogin(email, &password).await
    } else {
        ctx.session.login(email, &password).await
    };
    let user = attempt.map_err(login_error)?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            already_logged_in: false,
            user,
        },
        flags.format,
    )
}

fn login_error(error: SessionError<ApiError>) -> anyhow::Error {
    match error {
        SessionError::Backend(api) => anyhow!("login failed: {}", api.display_message()),
        other => anyhow::Error::new(other).context("login failed"),
    }
}
