use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

/// Dining visit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DiningCommands {
    /// Submit a dining visit; the backend issues coupons for it.
    Submit {
        #[arg(long)]
        customer_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        bill: f64,
        /// Visit time (RFC 3339). Defaults to the backend's clock.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Export visits as CSV.
    Export {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        client_id: Option<String>,
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}
