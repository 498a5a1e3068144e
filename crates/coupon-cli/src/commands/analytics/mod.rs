use coupon_auth::Route;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalyticsCommands;
use crate::context::{AppContext, scope_client};
use crate::output::output;

/// Handle `cpn analytics <subcommand>`.
pub async fn handle(
    action: &AnalyticsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnalyticsCommands::Dashboard { client_id } => {
            let profile = ctx.authorize(&Route::Dashboard).await?;
            let scoped = scope_client(&profile, client_id.as_deref())?;
            output(&ctx.api.dashboard(scoped.as_deref()).await?, flags.format)
        }
        AnalyticsCommands::Redemptions { client_id } => {
            let profile = ctx.authorize(&Route::Redemptions).await?;
            let scoped = scope_client(&profile, client_id.as_deref())?;
            let logs = ctx.api.redemption_logs(scoped.as_deref()).await?;
            output(&logs, flags.format)
        }
    }
}
