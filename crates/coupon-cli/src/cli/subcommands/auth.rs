use clap::{Args, Subcommand};
use coupon_core::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show current session status.
    Status,
    /// Fetch the logged-in profile from the backend.
    Me,
    /// Change the logged-in user's password.
    ChangePassword(ChangePasswordArgs),
    /// Register a new account.
    Register(RegisterArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password (read from stdin when omitted).
    #[arg(long)]
    pub password: Option<String>,
    /// Log in again even if a session is active.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChangePasswordArgs {
    #[arg(long)]
    pub current: String,
    #[arg(long = "new")]
    pub new_password: String,
    /// Repeat of the new password.
    #[arg(long)]
    pub confirm: String,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "CLIENT")]
    pub role: Role,
    #[arg(long)]
    pub client_id: Option<String>,
}
