use coupon_auth::Route;
use coupon_core::payloads::ClientPayload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::cli::subcommands::client::ClientArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cpn client <subcommand>`. Admin only.
pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.authorize(&Route::Clients).await?;

    match action {
        ClientCommands::List => output(&ctx.api.list_clients().await?, flags.format),
        ClientCommands::Get { id } => output(&ctx.api.get_client(id).await?, flags.format),
        ClientCommands::Create(args) => {
            let payload = payload_from(args)?;
            output(&ctx.api.create_client(&payload).await?, flags.format)
        }
        ClientCommands::Update { id, client } => {
            let payload = payload_from(client)?;
            output(&ctx.api.update_client(id, &payload).await?, flags.format)
        }
    }
}

fn payload_from(args: &ClientArgs) -> anyhow::Result<ClientPayload> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("client name is required");
    }
    let blank_to_none = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    Ok(ClientPayload {
        name: name.to_string(),
        pos_api_key: args.pos_api_key.trim().to_string(),
        status: args.status,
        client_login_email: blank_to_none(&args.login_email),
        client_login_password: blank_to_none(&args.login_password),
        client_login_name: blank_to_none(&args.login_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::enums::AccountStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_login_fields_are_dropped() {
        let payload = payload_from(&ClientArgs {
            name: "Spice Route".into(),
            pos_api_key: String::new(),
            status: AccountStatus::Active,
            login_email: Some(" ".into()),
            login_password: None,
            login_name: None,
        })
        .unwrap();
        assert_eq!(payload.name, "Spice Route");
        assert_eq!(payload.client_login_email, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = payload_from(&ClientArgs {
            name: "  ".into(),
            pos_api_key: String::new(),
            status: AccountStatus::Active,
            login_email: None,
            login_password: None,
            login_name: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "client name is required");
    }
}
