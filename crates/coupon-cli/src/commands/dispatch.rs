use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Campaign { action } => commands::campaign::handle(&action, ctx, flags).await,
        Commands::Coupon { action } => commands::coupon::handle(&action, ctx, flags).await,
        Commands::Client { action } => commands::client::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Analytics { action } => commands::analytics::handle(&action, ctx, flags).await,
        Commands::Dining { action } => commands::dining::handle(&action, ctx, flags).await,
    }
}
