use empdesk_core::{paths, FormSchema};
use reqwest::Method;
use tracing::debug;

use super::args::employee_inputs;
use super::format_table::print_employee_table;
use super::http::{delete_employee, get_employee, list_employees};
use crate::cli_args::*;
use crate::modules::forms::run_form;
use crate::modules::system::http::{
    api_url, print_empty_response, print_json_response, send_request,
};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_employee(
    args: EmployeeArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        EmployeeCommand::Register(fields) => {
            run_form(ctx, FormSchema::employee_registration(), fields.into_inputs()).await?;
        }
        EmployeeCommand::Update(args) => {
            let current = get_employee(ctx, args.id).await?;
            debug!(id = args.id, "loaded employee for update");
            let mut inputs = employee_inputs(&current);
            inputs.extend(args.fields.into_inputs());
            run_form(ctx, FormSchema::employee_update(args.id), inputs).await?;
        }
        EmployeeCommand::List(args) => {
            let employees = list_employees(ctx).await?;
            match args.format {
                ListFormat::Table => print_employee_table(&employees),
                ListFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
            }
        }
        EmployeeCommand::Get(args) => {
            let url = api_url(ctx, &format!("{}/{}", paths::EMPLOYEES, args.id));
            print_json_response(send_request(ctx, Method::GET, url, None).await?).await?;
        }
        EmployeeCommand::Delete(args) => {
            let response = delete_employee(ctx, args.id).await?;
            print_empty_response(response, &format!("Employee {} deleted", args.id)).await?;
        }
    }
    Ok(())
}

/// Employee registration reached from a successful login.
pub(crate) async fn register_employee_interactively(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    run_form(
        ctx,
        FormSchema::employee_registration(),
        EmployeeFieldArgs::default().into_inputs(),
    )
    .await?;
    Ok(())
}
