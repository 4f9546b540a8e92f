use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let mut shown = config.clone();
            if shown.auth_password.is_some() {
                shown.auth_password = Some("***".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        ConfigCommand::Set(args) => {
            if let Some(addr) = args.addr {
                let addr = addr.trim().trim_end_matches('/').to_string();
                if reqwest::Url::parse(&addr).is_err() {
                    anyhow::bail!("invalid address: {}", addr);
                }
                config.addr = Some(addr);
            }
            if let Some(user) = args.auth_user {
                config.auth_user = Some(user);
            }
            if let Some(password) = args.auth_password {
                config.auth_password = Some(password);
            }
            if let Some(timeout) = args.timeout_secs {
                if timeout == 0 {
                    anyhow::bail!("timeout must be at least one second");
                }
                config.timeout_secs = Some(timeout);
            }
        }
        ConfigCommand::Unset(args) => {
            if args.addr {
                config.addr = None;
            }
            if args.auth {
                config.auth_user = None;
                config.auth_password = None;
            }
            if args.timeout_secs {
                config.timeout_secs = None;
            }
        }
    }
    Ok(())
}

pub(crate) fn empdesk_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".empdesk"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(empdesk_dir()?.join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("invalid config {}: {err}", path.display()))?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    let url = reqwest::Url::parse(addr)
        .map_err(|err| anyhow::anyhow!("invalid address '{addr}': {err}"))?;
    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_insecure || is_loopback(&url) => Ok(()),
        "http" => anyhow::bail!("refusing to use http:// for a remote host without --insecure"),
        other => anyhow::bail!("unsupported scheme: {other}"),
    }
}

fn is_loopback(url: &reqwest::Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback())
        .unwrap_or(false)
}
