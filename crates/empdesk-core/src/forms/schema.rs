use serde_json::Value;
use std::time::Duration;

use super::{FieldRule, FieldSpec};
use crate::constants::{messages, paths, LOGIN_REDIRECT_DELAY};
use crate::transport::HttpMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
    EmployeeRegistration,
    EmployeeUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    None,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
    pub auth: AuthScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    EmployeeRegistration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub target: NavigationTarget,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SuccessPolicy {
    /// The body must also carry `"success": true`.
    pub requires_success_flag: bool,
    pub message: fn(&Value) -> String,
    pub remember_user: bool,
    pub reset_form: bool,
    pub navigate: Option<Navigation>,
}

/// Everything a controller needs to drive one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: Vec<FieldSpec>,
    pub endpoint: Endpoint,
    pub idle_label: &'static str,
    pub busy_label: &'static str,
    /// Banner shown in addition to field errors when local validation fails.
    pub invalid_summary: Option<&'static str>,
    pub success: SuccessPolicy,
    pub error_fallback: &'static str,
    pub network_message: &'static str,
}

impl FormSchema {
    pub fn login() -> Self {
        Self {
            kind: FormKind::Login,
            fields: vec![
                FieldSpec::text("username", "Username").rule(FieldRule::Required),
                FieldSpec::password("password", "Password").rule(FieldRule::Required),
            ],
            endpoint: Endpoint {
                method: HttpMethod::Post,
                path: paths::LOGIN.to_string(),
                auth: AuthScheme::None,
            },
            idle_label: "Sign In",
            busy_label: "Signing in...",
            invalid_summary: Some(messages::FILL_ALL_FIELDS),
            success: SuccessPolicy {
                requires_success_flag: true,
                message: login_message,
                remember_user: true,
                reset_form: false,
                navigate: Some(Navigation {
                    target: NavigationTarget::EmployeeRegistration,
                    delay: LOGIN_REDIRECT_DELAY,
                }),
            },
            error_fallback: messages::LOGIN_FAILED,
            network_message: messages::NETWORK_ERROR,
        }
    }

    pub fn registration() -> Self {
        Self {
            kind: FormKind::Registration,
            fields: vec![
                FieldSpec::text("username", "Username")
                    .rule(FieldRule::Length { min: 3, max: 50 }),
                FieldSpec::text("email", "Email").rule(FieldRule::Email),
                FieldSpec::password("password", "Password").rule(FieldRule::MinLength(6)),
                FieldSpec::text("firstName", "First name")
                    .rule(FieldRule::Length { min: 2, max: 50 }),
                FieldSpec::text("lastName", "Last name")
                    .rule(FieldRule::Length { min: 2, max: 50 }),
            ],
            endpoint: Endpoint {
                method: HttpMethod::Post,
                path: paths::REGISTER.to_string(),
                auth: AuthScheme::None,
            },
            idle_label: "Register",
            busy_label: "Registering...",
            invalid_summary: None,
            success: SuccessPolicy {
                requires_success_flag: false,
                message: registration_message,
                remember_user: false,
                reset_form: true,
                navigate: None,
            },
            error_fallback: messages::REGISTRATION_FAILED,
            network_message: messages::NETWORK_ERROR,
        }
    }

    pub fn employee_registration() -> Self {
        Self {
            kind: FormKind::EmployeeRegistration,
            fields: employee_fields(),
            endpoint: Endpoint {
                method: HttpMethod::Post,
                path: paths::EMPLOYEES.to_string(),
                auth: AuthScheme::Basic,
            },
            idle_label: "Register Employee",
            busy_label: "Registering...",
            invalid_summary: None,
            success: SuccessPolicy {
                requires_success_flag: false,
                message: employee_registered_message,
                remember_user: false,
                reset_form: true,
                navigate: None,
            },
            error_fallback: messages::REGISTRATION_FAILED,
            network_message: messages::NETWORK_ERROR_AUTHENTICATED,
        }
    }

    pub fn employee_update(id: i64) -> Self {
        Self {
            kind: FormKind::EmployeeUpdate,
            fields: employee_fields(),
            endpoint: Endpoint {
                method: HttpMethod::Put,
                path: format!("{}/{id}", paths::EMPLOYEES),
                auth: AuthScheme::Basic,
            },
            idle_label: "Update Employee",
            busy_label: "Updating...",
            invalid_summary: None,
            success: SuccessPolicy {
                requires_success_flag: false,
                message: employee_updated_message,
                remember_user: false,
                reset_form: false,
                navigate: None,
            },
            error_fallback: messages::UPDATE_FAILED,
            network_message: messages::NETWORK_ERROR_AUTHENTICATED,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

fn employee_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("firstName", "First name").rule(FieldRule::Length { min: 2, max: 50 }),
        FieldSpec::text("lastName", "Last name").rule(FieldRule::Length { min: 2, max: 50 }),
        FieldSpec::text("email", "Email").rule(FieldRule::Email),
        FieldSpec::text("phoneNumber", "Phone number").rule(FieldRule::Phone),
        FieldSpec::text("department", "Department").rule(FieldRule::Length { min: 2, max: 100 }),
        FieldSpec::text("position", "Position").rule(FieldRule::Length { min: 2, max: 100 }),
        FieldSpec::number("salary", "Salary").rule(FieldRule::Positive),
    ]
}

fn body_text(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn login_message(body: &Value) -> String {
    format!("Welcome back, {}! Redirecting...", body_text(body, "firstName"))
}

fn registration_message(body: &Value) -> String {
    match body.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!(
            "Welcome {}! Your account has been created successfully.",
            body_text(body, "firstName")
        ),
    }
}

fn employee_registered_message(body: &Value) -> String {
    format!(
        "Employee {} {} has been registered successfully!",
        body_text(body, "firstName"),
        body_text(body, "lastName")
    )
}

fn employee_updated_message(body: &Value) -> String {
    format!(
        "Employee {} {} has been updated successfully!",
        body_text(body, "firstName"),
        body_text(body, "lastName")
    )
}

#[cfg(test)]
mod tests {
    use super::{FormKind, FormSchema};
    use crate::forms::AuthScheme;
    use crate::transport::HttpMethod;
    use serde_json::json;

    #[test]
    fn endpoints_match_backend_routes() {
        let login = FormSchema::login();
        assert_eq!(login.endpoint.path, "/api/users/login");
        assert_eq!(login.endpoint.auth, AuthScheme::None);
        assert_eq!(FormSchema::registration().endpoint.path, "/api/users/register");
        let employee = FormSchema::employee_registration();
        assert_eq!(employee.endpoint.path, "/api/employees");
        assert_eq!(employee.endpoint.auth, AuthScheme::Basic);
        let update = FormSchema::employee_update(7);
        assert_eq!(update.kind, FormKind::EmployeeUpdate);
        assert_eq!(update.endpoint.method, HttpMethod::Put);
        assert_eq!(update.endpoint.path, "/api/employees/7");
    }

    #[test]
    fn success_messages_use_server_fields() {
        let body = json!({"firstName": "Jo", "lastName": "Doe"});
        let employee = FormSchema::employee_registration();
        assert_eq!(
            (employee.success.message)(&body),
            "Employee Jo Doe has been registered successfully!"
        );
        let login = FormSchema::login();
        assert_eq!(
            (login.success.message)(&json!({"firstName": "Ann"})),
            "Welcome back, Ann! Redirecting..."
        );
        let registration = FormSchema::registration();
        assert_eq!(
            (registration.success.message)(&json!({"message": "User registered successfully!"})),
            "User registered successfully!"
        );
        assert_eq!(
            (registration.success.message)(&json!({"firstName": "Ann"})),
            "Welcome Ann! Your account has been created successfully."
        );
    }

    #[test]
    fn error_ids_follow_field_names() {
        let schema = FormSchema::employee_registration();
        let ids: Vec<String> = schema.fields.iter().map(|spec| spec.error_id()).collect();
        assert!(ids.contains(&"salaryError".to_string()));
        assert!(ids.contains(&"phoneNumberError".to_string()));
        assert!(schema.fields.iter().all(|spec| spec.required));
    }
}
