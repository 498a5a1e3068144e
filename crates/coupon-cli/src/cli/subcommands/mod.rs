pub mod analytics;
pub mod auth;
pub mod campaign;
pub mod client;
pub mod coupon;
pub mod dining;
pub mod user;

pub use analytics::AnalyticsCommands;
pub use auth::AuthCommands;
pub use campaign::CampaignCommands;
pub use client::ClientCommands;
pub use coupon::CouponCommands;
pub use dining::DiningCommands;
pub use user::UserCommands;
