mod actions;
pub(crate) mod args;
mod session;

pub(crate) use actions::{handle_login, handle_logout, handle_register, handle_whoami};
pub(crate) use session::FileSessionStore;
