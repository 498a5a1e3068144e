use coupon_core::payloads::{ChangePasswordRequest, validate_password_pair};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::ChangePasswordArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &ChangePasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_password_pair(&args.new_password, &args.confirm)?;
    ctx.authenticated().await?;

    let response = ctx
        .api
        .change_password(&ChangePasswordRequest {
            current_password: args.current.clone(),
            new_password: args.new_password.clone(),
        })
        .await?;
    output(&response, flags.format)
}
