//! # coupon-core
//!
//! Shared types for the coupon loyalty client.
//!
//! This crate provides the foundational types used across all coupon crates:
//! - Role and status enums with their wire spellings
//! - The cached user profile and the login / "who am I" envelopes
//! - Request payloads for the campaign, coupon, client, user, and dining endpoints
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod identity;
pub mod payloads;

pub use enums::Role;
pub use errors::CoreError;
pub use identity::{LoginResponse, MeResponse, UserProfile};
