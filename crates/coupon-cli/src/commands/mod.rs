pub mod analytics;
pub mod auth;
pub mod campaign;
pub mod client;
pub mod coupon;
pub mod dining;
pub mod dispatch;
pub mod shared;
pub mod user;
