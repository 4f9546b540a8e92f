mod actions;
pub(crate) mod args;
mod format_table;
mod http;

pub(crate) use actions::{handle_employee, register_employee_interactively};
