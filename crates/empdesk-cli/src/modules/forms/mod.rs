mod prompt;
mod terminal;
mod transport;

use serde_json::Value;
use std::fmt;

use empdesk_core::{AuthScheme, FormController, FormSchema, Navigation, RawInputs};

use crate::modules::system::CommandContext;

pub(crate) use prompt::collect_inputs;
pub(crate) use terminal::TerminalView;
pub(crate) use transport::ReqwestTransport;

/// Marker error: the submission failed and its banner is already on screen.
#[derive(Debug)]
pub(crate) struct SubmissionFailed;

impl fmt::Display for SubmissionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("submission failed")
    }
}

impl std::error::Error for SubmissionFailed {}

pub(crate) struct FormRun {
    pub body: Value,
    pub navigation: Option<Navigation>,
}

/// Collects the inputs for `schema`, submits them and renders the result to
/// the terminal.
pub(crate) async fn run_form(
    ctx: &CommandContext<'_>,
    schema: FormSchema,
    provided: RawInputs,
) -> anyhow::Result<FormRun> {
    let credentials = match schema.endpoint.auth {
        AuthScheme::None => None,
        AuthScheme::Basic => Some(ctx.credentials.clone()),
    };
    let idle_label = schema.idle_label;
    let controller = FormController::new(schema, ReqwestTransport::new(ctx.client), ctx.addr.clone())
        .with_credentials(credentials)
        .with_session(ctx.session.clone())
        .with_timeout(ctx.timeout);
    let mut view = TerminalView::stdio(idle_label);

    let inputs = collect_inputs(&controller, &mut view, provided, ctx.interactive)?;
    match controller.on_submit(&mut view, &inputs).await {
        Ok(body) => Ok(FormRun {
            body,
            navigation: view.page().navigation,
        }),
        Err(_) => Err(SubmissionFailed.into()),
    }
}
