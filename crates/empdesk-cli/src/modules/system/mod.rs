pub(crate) mod args;
pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod types;

pub(crate) use config::{
    empdesk_dir, ensure_secure_addr, handle_config_command, load_config, save_config,
};
pub(crate) use types::{CliConfig, CommandContext};
