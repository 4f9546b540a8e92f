use std::io::{self, Write};

use empdesk_core::{FormView, Navigation, PageState};

/// Renders form feedback as terminal lines while keeping the page model
/// current. Banners and field errors are written as they happen.
pub(crate) struct TerminalView<O: Write, E: Write> {
    page: PageState,
    out: O,
    err: E,
}

impl TerminalView<io::Stdout, io::Stderr> {
    pub(crate) fn stdio(idle_label: &str) -> Self {
        Self::new(idle_label, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub(crate) fn new(idle_label: &str, out: O, err: E) -> Self {
        Self {
            page: PageState::new(idle_label),
            out,
            err,
        }
    }

    pub(crate) fn page(&self) -> &PageState {
        &self.page
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (PageState, O, E) {
        (self.page, self.out, self.err)
    }
}

fn field_name(error_id: &str) -> &str {
    error_id.strip_suffix("Error").unwrap_or(error_id)
}

// Write failures are ignored; the page model stays authoritative.
impl<O: Write, E: Write> FormView for TerminalView<O, E> {
    fn clear_field_errors(&mut self) {
        self.page.clear_field_errors();
    }

    fn show_field_error(&mut self, error_id: &str, message: &str) {
        self.page.show_field_error(error_id, message);
        let _ = writeln!(self.err, "  {}: {message}", field_name(error_id));
    }

    fn clear_field_error(&mut self, error_id: &str) {
        self.page.clear_field_error(error_id);
    }

    fn hide_banners(&mut self) {
        self.page.hide_banners();
    }

    fn show_success(&mut self, text: &str) {
        self.page.show_success(text);
        let _ = writeln!(self.out, "{text}");
    }

    fn show_error(&mut self, text: &str) {
        self.page.show_error(text);
        let _ = writeln!(self.err, "Error: {text}");
    }

    fn begin_submitting(&mut self, busy_label: &str) {
        self.page.begin_submitting(busy_label);
        let _ = writeln!(self.err, "{busy_label}");
    }

    fn end_submitting(&mut self, idle_label: &str) {
        self.page.end_submitting(idle_label);
        let _ = self.out.flush();
        let _ = self.err.flush();
    }

    fn reset_form(&mut self) {
        self.page.reset_form();
    }

    fn schedule_navigation(&mut self, navigation: Navigation) {
        self.page.schedule_navigation(navigation);
    }
}
