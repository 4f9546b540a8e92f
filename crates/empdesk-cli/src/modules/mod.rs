pub(crate) mod auth;
pub(crate) mod employees;
pub(crate) mod forms;
pub(crate) mod system;
