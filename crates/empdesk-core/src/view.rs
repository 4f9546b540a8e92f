use std::collections::BTreeMap;

use crate::forms::Navigation;

/// Presentation phase of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Rendering surface the controller drives. Implementations receive every
/// element they need through these calls and never look anything up by name.
pub trait FormView {
    fn clear_field_errors(&mut self);
    fn show_field_error(&mut self, error_id: &str, message: &str);
    fn clear_field_error(&mut self, error_id: &str);
    fn hide_banners(&mut self);
    fn show_success(&mut self, text: &str);
    fn show_error(&mut self, text: &str);
    fn begin_submitting(&mut self, busy_label: &str);
    fn end_submitting(&mut self, idle_label: &str);
    fn reset_form(&mut self);
    fn schedule_navigation(&mut self, navigation: Navigation);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub visible: bool,
}

/// In-memory page model: the state a renderer would show.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub field_errors: BTreeMap<String, String>,
    pub success: Option<Banner>,
    pub error: Option<Banner>,
    pub submit_enabled: bool,
    pub button_label: String,
    pub loader_visible: bool,
    pub resets: usize,
    pub navigation: Option<Navigation>,
    pub state: UiState,
}

impl PageState {
    pub fn new(idle_label: &str) -> Self {
        Self {
            field_errors: BTreeMap::new(),
            success: None,
            error: None,
            submit_enabled: true,
            button_label: idle_label.to_string(),
            loader_visible: false,
            resets: 0,
            navigation: None,
            state: UiState::Idle,
        }
    }

    #[must_use]
    pub fn field_error(&self, error_id: &str) -> Option<&str> {
        self.field_errors
            .get(error_id)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn success_text(&self) -> Option<&str> {
        visible_text(self.success.as_ref())
    }

    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        visible_text(self.error.as_ref())
    }
}

fn visible_text(banner: Option<&Banner>) -> Option<&str> {
    banner
        .filter(|banner| banner.visible)
        .map(|banner| banner.text.as_str())
}

fn hide(banner: &mut Option<Banner>) {
    if let Some(banner) = banner.as_mut() {
        banner.visible = false;
    }
}

impl FormView for PageState {
    fn clear_field_errors(&mut self) {
        for text in self.field_errors.values_mut() {
            text.clear();
        }
    }

    fn show_field_error(&mut self, error_id: &str, message: &str) {
        self.field_errors
            .insert(error_id.to_string(), message.to_string());
        if self.state != UiState::Submitting {
            self.state = UiState::Failed;
        }
    }

    fn clear_field_error(&mut self, error_id: &str) {
        if let Some(text) = self.field_errors.get_mut(error_id) {
            text.clear();
        }
    }

    fn hide_banners(&mut self) {
        hide(&mut self.success);
        hide(&mut self.error);
        if self.state != UiState::Submitting {
            self.state = UiState::Idle;
        }
    }

    fn show_success(&mut self, text: &str) {
        hide(&mut self.error);
        self.success = Some(Banner {
            text: text.to_string(),
            visible: true,
        });
        self.state = UiState::Succeeded;
    }

    fn show_error(&mut self, text: &str) {
        hide(&mut self.success);
        self.error = Some(Banner {
            text: text.to_string(),
            visible: true,
        });
        self.state = UiState::Failed;
    }

    fn begin_submitting(&mut self, busy_label: &str) {
        self.submit_enabled = false;
        self.button_label = busy_label.to_string();
        self.loader_visible = true;
        self.state = UiState::Submitting;
    }

    fn end_submitting(&mut self, idle_label: &str) {
        self.submit_enabled = true;
        self.button_label = idle_label.to_string();
        self.loader_visible = false;
        if self.state == UiState::Submitting {
            self.state = UiState::Idle;
        }
    }

    fn reset_form(&mut self) {
        self.resets += 1;
    }

    fn schedule_navigation(&mut self, navigation: Navigation) {
        self.navigation = Some(navigation);
    }
}
