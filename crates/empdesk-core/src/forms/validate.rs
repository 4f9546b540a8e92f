use regex::Regex;
use std::sync::OnceLock;

use super::{FieldRule, FieldSpec, FieldValue, FormPayload, FormSchema};
use crate::constants::messages;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str =
    r"^\+?\(?[0-9]{1,4}\)?[-. ]?\(?[0-9]{1,4}\)?[-. ]?[0-9]{1,9}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    phone_regex().is_match(value)
}

/// Failed fields with their messages, in schema order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<(&'static str, String)>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (*name, message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(name, _)| *name)
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push((field, message));
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(name, message)| format!("{name}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn validate(schema: &FormSchema, payload: &FormPayload) -> ValidationResult {
    let mut result = ValidationResult::default();
    for spec in &schema.fields {
        let missing = FieldValue::Text(String::new());
        let value = payload.get(spec.name).unwrap_or(&missing);
        if let Some(message) = check_field(spec, value) {
            result.push(spec.name, message);
        }
    }
    result
}

/// Real-time check run when a single input loses focus.
pub fn validate_blur(spec: &FieldSpec, raw: &str) -> Option<&'static str> {
    if spec.required && raw.trim().is_empty() {
        return Some(messages::REQUIRED);
    }
    None
}

fn check_field(spec: &FieldSpec, value: &FieldValue) -> Option<String> {
    spec.rules
        .iter()
        .find_map(|rule| check_rule(spec, *rule, value))
}

fn check_rule(spec: &FieldSpec, rule: FieldRule, value: &FieldValue) -> Option<String> {
    match rule {
        FieldRule::Required => value.is_empty().then(|| messages::REQUIRED.to_string()),
        FieldRule::Length { min, max } => {
            let len = text_len(value);
            (len < min || len > max).then(|| {
                format!("{} must be between {min} and {max} characters", spec.label)
            })
        }
        FieldRule::MinLength(min) => (text_len(value) < min)
            .then(|| format!("{} must be at least {min} characters", spec.label)),
        FieldRule::Email => (!is_valid_email(value.as_text().unwrap_or("")))
            .then(|| messages::INVALID_EMAIL.to_string()),
        FieldRule::Phone => (!is_valid_phone(value.as_text().unwrap_or("")))
            .then(|| messages::INVALID_PHONE.to_string()),
        FieldRule::Positive => match value.as_number() {
            Some(number) if number > 0.0 => None,
            _ => Some(format!("{} must be greater than 0", spec.label)),
        },
    }
}

fn text_len(value: &FieldValue) -> usize {
    value.as_text().map_or(0, |text| text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::{check_field, is_valid_email, is_valid_phone, validate, validate_blur};
    use crate::forms::payload::read_field;
    use crate::forms::{FieldSpec, FormPayload, FormSchema, RawInputs};

    fn check_raw(spec: &FieldSpec, raw: &str) -> Option<String> {
        check_field(spec, &read_field(spec, raw))
    }

    fn inputs(pairs: &[(&str, &str)]) -> RawInputs {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn valid_employee() -> RawInputs {
        inputs(&[
            ("firstName", "Jo"),
            ("lastName", "Doe"),
            ("email", "jo@x.com"),
            ("phoneNumber", "+1-555-1234"),
            ("department", "IT"),
            ("position", "Dev"),
            ("salary", "50000"),
        ])
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jo.doe+tag@mail.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_pattern() {
        for ok in ["+1-555-1234", "(555) 123.4567", "5551234567", "+44 20 7946", "555"] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in [
            "",
            "phone",
            "+1-555-1234-5678",
            "12345-12345-1",
            "555--1234",
            "555\t1234",
            "555\n1234",
            "555\u{3000}1234",
        ] {
            assert!(!is_valid_phone(bad), "{bad}");
        }
    }

    #[test]
    fn valid_employee_passes() {
        let schema = FormSchema::employee_registration();
        let payload = FormPayload::collect(&schema, &valid_employee());
        assert!(validate(&schema, &payload).is_valid());
    }

    #[test]
    fn salary_must_be_positive() {
        let schema = FormSchema::employee_registration();
        for salary in ["", "0", "-10", "abc"] {
            let mut raw = valid_employee();
            raw.insert("salary".to_string(), salary.to_string());
            let result = validate(&schema, &FormPayload::collect(&schema, &raw));
            assert_eq!(result.len(), 1, "{salary}");
            assert_eq!(result.message("salary"), Some("Salary must be greater than 0"));
        }
        let mut raw = valid_employee();
        raw.insert("salary".to_string(), "1.0".to_string());
        assert!(validate(&schema, &FormPayload::collect(&schema, &raw)).is_valid());
    }

    #[test]
    fn every_violation_is_reported_once() {
        let schema = FormSchema::employee_registration();
        let raw = inputs(&[("firstName", "J"), ("department", &"x".repeat(101))]);
        let result = validate(&schema, &FormPayload::collect(&schema, &raw));
        let fields: Vec<_> = result.fields().collect();
        assert_eq!(
            fields,
            vec![
                "firstName",
                "lastName",
                "email",
                "phoneNumber",
                "department",
                "position",
                "salary"
            ]
        );
        assert_eq!(
            result.message("firstName"),
            Some("First name must be between 2 and 50 characters")
        );
        assert_eq!(
            result.message("department"),
            Some("Department must be between 2 and 100 characters")
        );
        assert_eq!(result.message("phoneNumber"), Some("Please enter a valid phone number"));
    }

    #[test]
    fn registration_rules() {
        let schema = FormSchema::registration();
        let raw = inputs(&[
            ("username", "an"),
            ("email", "ann@x.com"),
            ("password", "12345"),
            ("firstName", "Ann"),
            ("lastName", "Lee"),
        ]);
        let result = validate(&schema, &FormPayload::collect(&schema, &raw));
        assert_eq!(
            result.message("username"),
            Some("Username must be between 3 and 50 characters")
        );
        assert_eq!(
            result.message("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let spec = FieldSpec::text("firstName", "First name")
            .rule(crate::forms::FieldRule::Length { min: 2, max: 3 });
        assert!(check_raw(&spec, "Żöé").is_none());
        assert!(check_raw(&spec, "Żöéü").is_some());
    }

    #[test]
    fn login_only_requires_presence() {
        let schema = FormSchema::login();
        let result = validate(
            &schema,
            &FormPayload::collect(&schema, &inputs(&[("username", "  ")])),
        );
        assert_eq!(result.message("username"), Some("This field is required"));
        assert_eq!(result.message("password"), Some("This field is required"));
    }

    #[test]
    fn blur_flags_blank_required_fields() {
        let required = FieldSpec::text("position", "Position");
        assert_eq!(validate_blur(&required, "   "), Some("This field is required"));
        assert_eq!(validate_blur(&required, "Dev"), None);
        let optional = FieldSpec::text("note", "Note").optional();
        assert_eq!(validate_blur(&optional, ""), None);
    }
}
