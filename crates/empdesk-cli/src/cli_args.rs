use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::employees::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "empdesk")]
#[command(about = "Employee management desk client")]
pub struct Cli {
    #[arg(long, env = "EMPDESK_ADDR", help = "Backend base URL")]
    pub addr: Option<String>,
    #[arg(long, env = "EMPDESK_AUTH_USER", help = "User for authenticated writes")]
    pub auth_user: Option<String>,
    #[arg(
        long,
        env = "EMPDESK_AUTH_PASSWORD",
        hide_env_values = true,
        help = "Password for authenticated writes"
    )]
    pub auth_password: Option<String>,
    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to non-loopback hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Sign in and remember the user for this machine")]
    Login(LoginArgs),
    #[command(about = "Forget the signed-in user")]
    Logout,
    #[command(about = "Show the signed-in user")]
    Whoami,
    #[command(about = "Create a user account")]
    Register(RegisterArgs),
    #[command(about = "Manage employees")]
    Employee(EmployeeArgs),
    Config(ConfigArgs),
}
