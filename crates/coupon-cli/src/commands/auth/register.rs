use coupon_core::payloads::{RegisterRequest, validate_password_pair};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::RegisterArgs;
use crate::context::AppContext;
use crate::output::output;

/// Public: no session required.
pub async fn handle(args: &RegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_password_pair(&args.password, &args.confirm)?;

    let request = RegisterRequest {
        email: args.email.trim().to_string(),
        password: args.password.clone(),
        name: args.name.trim().to_string(),
        role: args.role,
        client_id: args.client_id.clone().filter(|id| !id.trim().is_empty()),
    };
    let response = ctx.api.register(&request).await?;
    output(&response, flags.format)
}
