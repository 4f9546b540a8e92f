use empdesk_core::{FormSchema, NavigationTarget};
use tracing::info;

use crate::cli_args::*;
use crate::modules::employees::register_employee_interactively;
use crate::modules::forms::run_form;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let run = run_form(ctx, FormSchema::login(), args.inputs()).await?;
    let Some(navigation) = run.navigation else {
        return Ok(());
    };
    if args.no_redirect {
        return Ok(());
    }

    tokio::time::sleep(navigation.delay).await;
    match navigation.target {
        NavigationTarget::EmployeeRegistration => {
            if ctx.interactive {
                info!("continuing to employee registration");
                register_employee_interactively(ctx).await?;
            } else {
                println!("Next: empdesk employee register");
            }
        }
    }
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    run_form(ctx, FormSchema::registration(), args.into_inputs()).await?;
    Ok(())
}

pub(crate) fn handle_logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    ctx.session.clear()?;
    println!("Logged out");
    Ok(())
}

pub(crate) fn handle_whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let Some(user) = ctx.session.load()? else {
        anyhow::bail!("not logged in; run `empdesk login`");
    };
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}
