use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::api::ErrorBody;
use crate::auth::Credentials;
use crate::constants::DEFAULT_TIMEOUT;
use crate::forms::{
    validate, validate_blur, AuthScheme, FormPayload, FormSchema, RawInputs, ValidationResult,
};
use crate::session::{SessionStore, SessionUser};
use crate::transport::{join_url, HttpReply, OutboundRequest, Transport};
use crate::view::FormView;


/// What the server said about a submission that reached it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(Value),
    Failure { status: u16, body: Value },
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Validation(ValidationResult),
    #[error("server rejected submission ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("submission not accepted: {message}")]
    Rejected { message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Binds one [`FormSchema`] to a backend and renders every outcome into a
/// [`FormView`].
pub struct FormController<T> {
    schema: FormSchema,
    transport: T,
    base_url: String,
    credentials: Option<Credentials>,
    session: Option<Arc<dyn SessionStore>>,
    timeout: Duration,
}

impl<T: Transport> FormController<T> {
    pub fn new(schema: FormSchema, transport: T, base_url: impl Into<String>) -> Self {
        Self {
            schema,
            transport,
            base_url: base_url.into(),
            credentials: None,
            session: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Clears field errors and hides both banners. Safe to repeat.
    pub fn reset_feedback<V: FormView + ?Sized>(&self, view: &mut V) {
        view.clear_field_errors();
        view.hide_banners();
    }

    /// Focus left `field`: clear its message, then flag it if it is required
    /// and blank. Unknown fields are ignored.
    pub fn on_blur<V: FormView + ?Sized>(
        &self,
        view: &mut V,
        field: &str,
        raw: &str,
    ) -> Option<&'static str> {
        let spec = self.schema.field(field)?;
        let error_id = spec.error_id();
        view.clear_field_error(&error_id);
        let message = validate_blur(spec, raw)?;
        view.show_field_error(&error_id, message);
        Some(message)
    }

    /// Runs one submission attempt end to end. Every failure is rendered into
    /// `view` before it is returned; the submit control is always restored.
    pub async fn on_submit<V: FormView + ?Sized>(
        &self,
        view: &mut V,
        inputs: &RawInputs,
    ) -> Result<Value, SubmitError> {
        self.reset_feedback(view);

        let payload = FormPayload::collect(&self.schema, inputs);
        let validation = validate(&self.schema, &payload);
        if !validation.is_valid() {
            for (field, message) in validation.iter() {
                if let Some(spec) = self.schema.field(field) {
                    view.show_field_error(&spec.error_id(), message);
                }
            }
            if let Some(summary) = self.schema.invalid_summary {
                view.show_error(summary);
            }
            debug!(form = ?self.schema.kind, invalid = validation.len(), "local validation failed");
            return Err(SubmitError::Validation(validation));
        }

        view.begin_submitting(self.schema.busy_label);
        let result = self.dispatch(&payload).await;
        let result = self.render_outcome(view, result);
        view.end_submitting(self.schema.idle_label);
        result
    }

    fn build_request(&self, payload: &FormPayload) -> Result<OutboundRequest, SubmitError> {
        let body = serde_json::to_value(payload)
            .map_err(|err| SubmitError::Network(format!("failed to encode payload: {err}")))?;
        let authorization = match self.schema.endpoint.auth {
            AuthScheme::None => None,
            AuthScheme::Basic => {
                if self.credentials.is_none() {
                    warn!(form = ?self.schema.kind, "no credentials configured for authenticated form");
                }
                self.credentials.as_ref().map(Credentials::header_value)
            }
        };
        Ok(OutboundRequest {
            method: self.schema.endpoint.method,
            url: join_url(&self.base_url, &self.schema.endpoint.path),
            body: Some(body),
            authorization,
        })
    }

    async fn dispatch(&self, payload: &FormPayload) -> Result<SubmissionOutcome, SubmitError> {
        let request = self.build_request(payload)?;
        if request.authorization.is_some() {
            self.log_initiator();
        }

        let start = Instant::now();
        let reply = match tokio::time::timeout(self.timeout, self.transport.send(&request)).await {
            Err(_) => return Err(SubmitError::Timeout(self.timeout)),
            Ok(Err(err)) => return Err(SubmitError::Network(err.to_string())),
            Ok(Ok(reply)) => reply,
        };
        debug!(
            method = %request.method,
            url = %request.url,
            status = reply.status,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        self.classify(reply)
    }

    fn classify(&self, reply: HttpReply) -> Result<SubmissionOutcome, SubmitError> {
        let body: Value = serde_json::from_str(&reply.body)
            .map_err(|err| SubmitError::Network(format!("response is not JSON: {err}")))?;
        let flag_ok = !self.schema.success.requires_success_flag
            || body.get("success").and_then(Value::as_bool) == Some(true);
        if reply.is_success() && flag_ok {
            Ok(SubmissionOutcome::Success(body))
        } else {
            Ok(SubmissionOutcome::Failure {
                status: reply.status,
                body,
            })
        }
    }

    fn render_outcome<V: FormView + ?Sized>(
        &self,
        view: &mut V,
        result: Result<SubmissionOutcome, SubmitError>,
    ) -> Result<Value, SubmitError> {
        match result {
            Ok(SubmissionOutcome::Success(body)) => {
                self.render_success(view, &body);
                Ok(body)
            }
            Ok(SubmissionOutcome::Failure { status, body }) => {
                let message = ErrorBody::from_value(&body).banner_message(self.schema.error_fallback);
                view.show_error(&message);
                info!(form = ?self.schema.kind, status, message = %message, "submission rejected by server");
                if (200..300).contains(&status) {
                    Err(SubmitError::Rejected { message })
                } else {
                    Err(SubmitError::Server { status, message })
                }
            }
            Err(err) => {
                error!(form = ?self.schema.kind, error = %err, "submission failed");
                view.show_error(self.schema.network_message);
                Err(err)
            }
        }
    }

    fn render_success<V: FormView + ?Sized>(&self, view: &mut V, body: &Value) {
        let policy = &self.schema.success;
        view.show_success(&(policy.message)(body));
        info!(form = ?self.schema.kind, "submission accepted");

        if policy.remember_user {
            if let Some(session) = &self.session {
                let user = SessionUser::from_login_body(body);
                if let Err(err) = session.store(&user) {
                    warn!(error = %err, "failed to persist session user");
                }
            }
        }
        if policy.reset_form {
            view.reset_form();
        }
        if let Some(navigation) = policy.navigate {
            view.schedule_navigation(navigation);
        }
    }

    fn log_initiator(&self) {
        let Some(session) = &self.session else {
            return;
        };
        match session.load() {
            Ok(Some(user)) => info!(
                initiated_by = %user.display_name(),
                principal = self.credentials.as_ref().and_then(Credentials::principal).unwrap_or(""),
                "authenticated write"
            ),
            Ok(None) => debug!("authenticated write without a session user"),
            Err(err) => warn!(error = %err, "failed to read session user"),
        }
    }
}
