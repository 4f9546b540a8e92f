use empdesk_core::{is_valid_email, validate, FormPayload, FormSchema, RawInputs};
use proptest::prelude::*;

fn employee(first: &str, last: &str, email: &str, phone: &str, salary: f64) -> RawInputs {
    [
        ("firstName", first.to_string()),
        ("lastName", last.to_string()),
        ("email", email.to_string()),
        ("phoneNumber", phone.to_string()),
        ("department", "Engineering".to_string()),
        ("position", "Developer".to_string()),
        ("salary", salary.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

proptest! {
    #[test]
    fn well_formed_employees_validate(
        first in "[A-Za-z]{2,50}",
        last in "[A-Za-z]{2,50}",
        local in "[a-z0-9._]{1,20}",
        domain in "[a-z]{1,12}",
        tld in "[a-z]{2,6}",
        phone in "\\+?[0-9]{1,4}-[0-9]{1,4}-[0-9]{1,9}",
        salary in 0.01f64..1_000_000.0,
    ) {
        let schema = FormSchema::employee_registration();
        let email = format!("{local}@{domain}.{tld}");
        let raw = employee(&first, &last, &email, &phone, salary);
        let result = validate(&schema, &FormPayload::collect(&schema, &raw));
        prop_assert!(result.is_valid(), "{}", result);
    }

    #[test]
    fn non_positive_salary_is_always_rejected(salary in -1_000_000.0f64..=0.0) {
        let schema = FormSchema::employee_registration();
        let raw = employee("Jo", "Doe", "jo@x.com", "+1-555-1234", salary);
        let result = validate(&schema, &FormPayload::collect(&schema, &raw));
        prop_assert_eq!(result.len(), 1);
        prop_assert_eq!(result.message("salary"), Some("Salary must be greater than 0"));
    }

    #[test]
    fn emails_without_at_sign_are_rejected(value in "[^@]{0,40}") {
        prop_assert!(!is_valid_email(&value));
    }

    #[test]
    fn short_first_names_are_rejected(first in "[A-Za-z]?") {
        let schema = FormSchema::employee_registration();
        let raw = employee(&first, "Doe", "jo@x.com", "+1-555-1234", 10.0);
        let result = validate(&schema, &FormPayload::collect(&schema, &raw));
        prop_assert_eq!(
            result.message("firstName"),
            Some("First name must be between 2 and 50 characters")
        );
    }
}
