use clap::Subcommand;
use coupon_core::enums::CouponStatus;

/// Coupon commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CouponCommands {
    /// List issued coupons.
    List {
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        status: Option<CouponStatus>,
        #[arg(long)]
        customer_name: Option<String>,
        #[arg(long)]
        customer_mobile: Option<String>,
    },
    /// Active coupons held by a customer.
    Lookup {
        mobile: String,
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Redeem a coupon against an invoice.
    Redeem {
        coupon_id: String,
        #[arg(long)]
        invoice: String,
        #[arg(long)]
        bill: f64,
        #[arg(long)]
        client_id: Option<String>,
    },
}
