use clap::{Args, Subcommand};
use coupon_core::Role;
use coupon_core::enums::AccountStatus;

/// Staff user commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users, optionally filtered.
    List {
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        status: Option<AccountStatus>,
        /// Case-insensitive match on name or email.
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a user.
    Create(CreateUserArgs),
    /// Set a user's status.
    Status {
        id: String,
        #[arg(long)]
        status: AccountStatus,
    },
    /// Reset a user's password.
    ResetPassword {
        id: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Delete a user.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct CreateUserArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Repeat of the password.
    #[arg(long)]
    pub confirm: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "CASHIER")]
    pub role: Role,
    #[arg(long)]
    pub client_id: Option<String>,
}
