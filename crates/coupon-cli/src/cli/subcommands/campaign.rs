use chrono::NaiveDate;
use clap::{Args, Subcommand};
use coupon_core::enums::{CampaignStatus, OrderType};

/// Campaign commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CampaignCommands {
    /// List campaigns.
    List {
        #[arg(long)]
        status: Option<CampaignStatus>,
    },
    /// Get a campaign by ID.
    Get { id: String },
    /// Create a campaign.
    Create(CampaignArgs),
    /// Replace a campaign's settings.
    Update {
        id: String,
        #[command(flatten)]
        campaign: CampaignArgs,
    },
}

/// Campaign settings. Unset values fall back to the form defaults.
#[derive(Clone, Debug, Args)]
pub struct CampaignArgs {
    #[arg(long)]
    pub name: String,
    /// Owning client (admins only; others use their own).
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long)]
    pub collection_start: Option<NaiveDate>,
    #[arg(long)]
    pub collection_end: Option<NaiveDate>,
    #[arg(long)]
    pub redemption_start: Option<NaiveDate>,
    #[arg(long)]
    pub redemption_end: Option<NaiveDate>,
    /// Bill amount per coupon slab.
    #[arg(long)]
    pub slab_step: Option<f64>,
    #[arg(long)]
    pub min_bill: Option<f64>,
    #[arg(long)]
    pub allow_multiple: bool,
    #[arg(long)]
    pub max_per_invoice: Option<u32>,
    #[arg(long)]
    pub allow_partial: bool,
    /// Allow the bill to be smaller than the coupon value.
    #[arg(long)]
    pub allow_bill_below_coupon: bool,
    /// Comma-separated order types (DINE_IN,TAKEAWAY,DELIVERY).
    #[arg(long, value_delimiter = ',')]
    pub order_types: Vec<OrderType>,
    #[arg(long)]
    pub status: Option<CampaignStatus>,
}
