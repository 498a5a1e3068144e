use anyhow::{Context, bail};
use coupon_core::{Role, UserProfile};

/// Resolve which client (tenant) a command acts on.
///
/// Admins act on whichever client they name. Everyone else is pinned to
/// their own client and may not name another one.
pub fn scope_client(profile: &UserProfile, requested: Option<&str>) -> anyhow::Result<Option<String>> {
    let requested = requested.map(str::trim).filter(|id| !id.is_empty());
    if profile.role == Role::Admin {
        return Ok(requested.map(str::to_string));
    }

    let own = profile.tenant_id();
    match (requested, own) {
        (Some(asked), Some(own)) if asked != own => {
            bail!("{} users may only act on their own client", profile.role)
        }
        (_, Some(own)) => Ok(Some(own.to_string())),
        (_, None) => bail!("{} account has no client assigned", profile.role),
    }
}

/// Like [`scope_client`] but a client must result.
pub fn require_client(profile: &UserProfile, requested: Option<&str>) -> anyhow::Result<String> {
    scope_client(profile, requested)?.context("--client-id is required")
}
