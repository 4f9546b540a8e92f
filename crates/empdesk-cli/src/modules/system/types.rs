use empdesk_core::{Credentials, SessionStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub auth_user: Option<String>,
    #[serde(default)]
    pub auth_password: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

pub struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub addr: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub interactive: bool,
    pub session: Arc<dyn SessionStore>,
}
