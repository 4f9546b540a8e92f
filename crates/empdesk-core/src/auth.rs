use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;

/// Credentials attached to privileged writes.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Bearer(String),
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }

    #[must_use]
    pub fn principal(&self) -> Option<&str> {
        match self {
            Self::Basic { username, .. } => Some(username),
            Self::Bearer(_) => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"***").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn basic_header_is_base64_user_colon_password() {
        let credentials = Credentials::basic("admin", "admin123");
        assert_eq!(credentials.header_value(), "Basic YWRtaW46YWRtaW4xMjM=");
        assert_eq!(credentials.principal(), Some("admin"));
    }

    #[test]
    fn bearer_header_and_redacted_debug() {
        let credentials = Credentials::Bearer("tok".to_string());
        assert_eq!(credentials.header_value(), "Bearer tok");
        assert!(!format!("{credentials:?}").contains("tok"));
        let basic = Credentials::basic("admin", "s3cret");
        assert!(!format!("{basic:?}").contains("s3cret"));
    }
}
