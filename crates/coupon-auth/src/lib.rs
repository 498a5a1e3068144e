//! # coupon-auth
//!
//! Client-side session handling for the coupon loyalty client.
//!
//! Provides the persistent session store (`token` + `user` entries), the
//! unauthorized signal fired by the API gateway on a 401, the session context
//! state machine (`anonymous → restoring → authenticated`), and the route
//! guard that gates protected views by authentication and role.

pub mod context;
pub mod error;
pub mod guard;
pub mod routes;
pub mod signal;
pub mod state;
pub mod store;

pub use context::{AuthBackend, SessionContext};
pub use error::{SessionError, StoreError};
pub use guard::{GuardDecision, RouteGuard};
pub use routes::{Route, navigation_for};
pub use signal::{SubscriptionId, UnauthorizedSignal};
pub use state::SessionState;
pub use store::{Credential, FileSessionStore, MemorySessionStore, SessionStore};
