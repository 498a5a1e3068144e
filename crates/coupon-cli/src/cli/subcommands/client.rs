use clap::{Args, Subcommand};
use coupon_core::enums::AccountStatus;

/// Client (tenant) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List,
    /// Get a client by ID.
    Get { id: String },
    /// Create a client, optionally with its login user.
    Create(ClientArgs),
    /// Update a client.
    Update {
        id: String,
        #[command(flatten)]
        client: ClientArgs,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ClientArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub pos_api_key: String,
    #[arg(long, default_value = "ACTIVE")]
    pub status: AccountStatus,
    /// Email of the client login user to provision.
    #[arg(long)]
    pub login_email: Option<String>,
    #[arg(long, requires = "login_email")]
    pub login_password: Option<String>,
    #[arg(long, requires = "login_email")]
    pub login_name: Option<String>,
}
