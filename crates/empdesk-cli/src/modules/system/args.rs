use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the stored configuration (passwords masked)")]
    Show,
    #[command(about = "Update stored settings")]
    Set(ConfigSetArgs),
    #[command(about = "Remove stored settings")]
    Unset(ConfigUnsetArgs),
}

#[derive(Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Backend base URL")]
    pub addr: Option<String>,
    #[arg(long, help = "User for authenticated writes")]
    pub auth_user: Option<String>,
    #[arg(long, help = "Password for authenticated writes")]
    pub auth_password: Option<String>,
    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args)]
pub struct ConfigUnsetArgs {
    #[arg(long)]
    pub addr: bool,
    #[arg(long, help = "Forget both auth user and password")]
    pub auth: bool,
    #[arg(long)]
    pub timeout_secs: bool,
}
