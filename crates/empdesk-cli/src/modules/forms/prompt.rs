use empdesk_core::{FieldKind, FormController, FormView, RawInputs, Transport};

use crate::{prompt_line, prompt_password};

/// Fills in fields that were not given on the command line. Interactive
/// sessions prompt for each one and run the blur check after every answer,
/// asking again while a required field stays blank. Non-interactive sessions
/// leave missing fields empty so local validation reports them.
pub(crate) fn collect_inputs<T: Transport, V: FormView + ?Sized>(
    controller: &FormController<T>,
    view: &mut V,
    mut provided: RawInputs,
    interactive: bool,
) -> anyhow::Result<RawInputs> {
    if !interactive {
        return Ok(provided);
    }
    for spec in &controller.schema().fields {
        if provided.contains_key(spec.name) {
            continue;
        }
        let prompt = format!("{}: ", spec.label);
        let value = loop {
            let value = match spec.kind {
                FieldKind::Password => prompt_password(&prompt)?,
                FieldKind::Text | FieldKind::Number => prompt_line(&prompt)?,
            };
            if controller.on_blur(view, spec.name, &value).is_none() {
                break value;
            }
        };
        provided.insert(spec.name.to_string(), value);
    }
    Ok(provided)
}
