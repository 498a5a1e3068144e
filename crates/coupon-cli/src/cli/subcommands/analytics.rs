use clap::Subcommand;

/// Analytics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Dashboard metrics.
    Dashboard {
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Redemption log.
    Redemptions {
        #[arg(long)]
        client_id: Option<String>,
    },
}
