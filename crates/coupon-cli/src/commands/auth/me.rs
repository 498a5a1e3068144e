use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.authenticated().await?;
    let profile = ctx.api.me().await?;
    output(&profile, flags.format)
}
