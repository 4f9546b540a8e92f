use std::time::Duration;

pub const DEFAULT_ADDR: &str = "http://localhost:8080";

/// Upper bound for a single submission round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between a successful login and the hand-off to employee registration.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub mod paths {
    pub const LOGIN: &str = "/api/users/login";
    pub const REGISTER: &str = "/api/users/register";
    pub const EMPLOYEES: &str = "/api/employees";
}

pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address";
    pub const INVALID_PHONE: &str = "Please enter a valid phone number";
    pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
    pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";
    pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
    pub const UPDATE_FAILED: &str = "Update failed. Please try again.";
    pub const NETWORK_ERROR: &str =
        "Network error. Please check if the server is running and try again.";
    pub const NETWORK_ERROR_AUTHENTICATED: &str = "Network error. Please check if the server is running and try again. Make sure you are logged in.";
}
