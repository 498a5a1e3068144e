use std::sync::Arc;

use anyhow::Context;
use coupon_auth::{FileSessionStore, SessionStore};
use coupon_config::CouponConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<CouponConfig> {
    CouponConfig::load_with_dotenv().context("failed to load coupon configuration")
}

/// Open the on-disk session store at the configured directory.
pub fn open_store(config: &CouponConfig) -> anyhow::Result<Arc<dyn SessionStore>> {
    let dir = config
        .session
        .resolve_dir()
        .context("failed to resolve session directory")?;
    tracing::debug!(dir = %dir.display(), "using session directory");
    Ok(Arc::new(FileSessionStore::new(dir)))
}
