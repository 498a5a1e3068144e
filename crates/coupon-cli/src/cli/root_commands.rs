use clap::Subcommand;

use crate::cli::subcommands::{
    AnalyticsCommands, AuthCommands, CampaignCommands, ClientCommands, CouponCommands,
    DiningCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, and session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Coupon campaigns.
    Campaign {
        #[command(subcommand)]
        action: CampaignCommands,
    },
    /// Issued coupons and redemption.
    Coupon {
        #[command(subcommand)]
        action: CouponCommands,
    },
    /// Client (restaurant) accounts.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Staff user accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Dashboard metrics and redemption logs.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
    /// Dining visits.
    Dining {
        #[command(subcommand)]
        action: DiningCommands,
    },
}
