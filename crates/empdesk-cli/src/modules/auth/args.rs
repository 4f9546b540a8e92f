use clap::Args;

use empdesk_core::RawInputs;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, help = "Do not continue to employee registration after signing in")]
    pub no_redirect: bool,
}

impl LoginArgs {
    pub fn inputs(&self) -> RawInputs {
        to_inputs([
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ])
    }
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
}

impl RegisterArgs {
    pub fn into_inputs(self) -> RawInputs {
        to_inputs([
            ("username", self.username),
            ("email", self.email),
            ("password", self.password),
            ("firstName", self.first_name),
            ("lastName", self.last_name),
        ])
    }
}

pub(crate) fn to_inputs<const N: usize>(pairs: [(&str, Option<String>); N]) -> RawInputs {
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
        .collect()
}
