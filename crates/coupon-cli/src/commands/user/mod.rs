use coupon_auth::Route;
use coupon_core::Role;
use coupon_core::enums::AccountStatus;
use coupon_core::payloads::{CreateUserRequest, validate_password_pair};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::{AppContext, require_client, scope_client};
use crate::output::output;

/// Handle `cpn user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = ctx.authorize(&Route::Users).await?;

    match action {
        UserCommands::List {
            client_id,
            role,
            status,
            search,
        } => {
            let scoped = scope_client(&profile, client_id.as_deref())?;
            let mut users = ctx.api.list_users(scoped.as_deref()).await?;
            users.retain(|user| user_matches(user, *role, *status, search.as_deref()));
            output(&users, flags.format)
        }
        UserCommands::Create(args) => {
            validate_password_pair(&args.password, &args.confirm)?;
            let request = CreateUserRequest {
                email: args.email.trim().to_string(),
                password: args.password.clone(),
                name: args.name.trim().to_string(),
                role: args.role,
                client_id: require_client(&profile, args.client_id.as_deref())?,
            };
            request.validate()?;
            output(&ctx.api.create_user(&request).await?, flags.format)
        }
        UserCommands::Status { id, status } => {
            output(&ctx.api.update_user_status(id, *status).await?, flags.format)
        }
        UserCommands::ResetPassword {
            id,
            password,
            confirm,
        } => {
            validate_password_pair(password, confirm)?;
            output(&ctx.api.reset_user_password(id, password).await?, flags.format)
        }
        UserCommands::Delete { id } => output(&ctx.api.delete_user(id).await?, flags.format),
    }
}

/// Local filter over a listed user document.
fn user_matches(
    user: &Value,
    role: Option<Role>,
    status: Option<AccountStatus>,
    search: Option<&str>,
) -> bool {
    let field = |name: &str| user.get(name).and_then(Value::as_str).unwrap_or_default();

    if role.is_some_and(|role| field("role") != role.as_str()) {
        return false;
    }
    if status.is_some_and(|status| field("status") != status.as_str()) {
        return false;
    }
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            field("name").to_lowercase().contains(&needle)
                || field("email").to_lowercase().contains(&needle)
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn cashier() -> Value {
        json!({
            "_id": "u2",
            "name": "Counter One",
            "email": "counter1@spice.example",
            "role": "CASHIER",
            "status": "ACTIVE"
        })
    }

    #[rstest]
    #[case(None, None, None, true)]
    #[case(Some(Role::Cashier), None, None, true)]
    #[case(Some(Role::Client), None, None, false)]
    #[case(None, Some(AccountStatus::Inactive), None, false)]
    #[case(None, None, Some("COUNTER"), true)]
    #[case(None, None, Some("spice.example"), true)]
    #[case(None, None, Some("manager"), false)]
    #[case(Some(Role::Cashier), Some(AccountStatus::Active), Some("one"), true)]
    fn filters(
        #[case] role: Option<Role>,
        #[case] status: Option<AccountStatus>,
        #[case] search: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(user_matches(&cashier(), role, status, search), expected);
    }
}
