use clap::{Args, Subcommand, ValueEnum};

use empdesk_core::{EmployeeResponse, RawInputs};

use crate::modules::auth::args::to_inputs;

#[derive(Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    #[command(about = "Register a new employee")]
    Register(EmployeeFieldArgs),
    #[command(about = "Update an employee; omitted fields keep their current value")]
    Update(EmployeeUpdateArgs),
    List(EmployeeListArgs),
    Get(EmployeeIdArgs),
    Delete(EmployeeIdArgs),
}

#[derive(Args, Default)]
pub struct EmployeeFieldArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "phone")]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub salary: Option<String>,
}

impl EmployeeFieldArgs {
    pub fn into_inputs(self) -> RawInputs {
        to_inputs([
            ("firstName", self.first_name),
            ("lastName", self.last_name),
            ("email", self.email),
            ("phoneNumber", self.phone_number),
            ("department", self.department),
            ("position", self.position),
            ("salary", self.salary),
        ])
    }
}

/// Current values of an employee record, as raw form inputs.
pub(crate) fn employee_inputs(employee: &EmployeeResponse) -> RawInputs {
    to_inputs([
        ("firstName", Some(employee.first_name.clone())),
        ("lastName", Some(employee.last_name.clone())),
        ("email", Some(employee.email.clone())),
        ("phoneNumber", employee.phone_number.clone()),
        ("department", employee.department.clone()),
        ("position", employee.position.clone()),
        ("salary", employee.salary.map(|salary| salary.to_string())),
    ])
}

#[derive(Args)]
pub struct EmployeeUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: EmployeeFieldArgs,
}

#[derive(Args)]
pub struct EmployeeIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct EmployeeListArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: ListFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}
