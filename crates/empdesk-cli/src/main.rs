use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

mod cli_args;
mod cli_command;
mod modules;

use empdesk_core::{Credentials, DEFAULT_ADDR, DEFAULT_TIMEOUT};

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::FileSessionStore;
use crate::modules::forms::SubmissionFailed;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, save_config, CliConfig,
    CommandContext,
};
use tracing_subscriber::EnvFilter;

/// Account seeded by the demo backend; used only when nothing is configured.
pub(crate) const DEMO_AUTH_USER: &str = "admin";
pub(crate) const DEMO_AUTH_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already rendered by the form view.
        Err(err) if err.is::<SubmissionFailed>() => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config()?;
    let command = cli.command;

    if let Command::Config(args) = command {
        handle_config_command(args, &mut config)?;
        save_config(&config)?;
        return Ok(());
    }

    let addr = cli
        .addr
        .or_else(|| config.addr.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    ensure_secure_addr(&addr, cli.insecure)?;
    let timeout = cli
        .timeout_secs
        .or(config.timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    if timeout.is_zero() {
        anyhow::bail!("timeout must be at least one second");
    }
    let credentials = resolve_credentials(cli.auth_user, cli.auth_password, &config);

    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .timeout(timeout)
        .build()?;

    let ctx = CommandContext {
        client: &client,
        addr,
        credentials,
        timeout,
        interactive: io::stdin().is_terminal(),
        session: Arc::new(FileSessionStore::default_location()?),
    };
    handle_command(command, &ctx).await
}

pub(crate) fn resolve_credentials(
    user_arg: Option<String>,
    password_arg: Option<String>,
    config: &CliConfig,
) -> Credentials {
    let username = user_arg
        .or_else(|| config.auth_user.clone())
        .unwrap_or_else(|| DEMO_AUTH_USER.to_string());
    let password = password_arg
        .or_else(|| config.auth_password.clone())
        .unwrap_or_else(|| DEMO_AUTH_PASSWORD.to_string());
    Credentials::basic(username, password)
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    eprint!("{prompt}");
    io::stderr().flush()?;
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    Ok(rpassword::read_password()?)
}
