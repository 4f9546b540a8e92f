use crate::cli_args::*;
use crate::modules::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use crate::modules::employees::handle_employee;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Logout => handle_logout(ctx)?,
        Command::Whoami => handle_whoami(ctx)?,
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::Employee(args) => handle_employee(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
