//! Per-invocation application context and the checks commands run
//! against it before calling the backend.

mod app_context;
mod tenant_scope;

pub use app_context::AppContext;
pub use tenant_scope::{require_client, scope_client};
