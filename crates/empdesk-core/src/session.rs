use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

/// Minimal identity kept after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    /// Picks the identity fields out of a login response body.
    #[must_use]
    pub fn from_login_body(body: &Value) -> Self {
        let field = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            username: field("username"),
            first_name: field("firstName"),
            last_name: field("lastName"),
            email: field("email"),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.username.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session record is corrupt: {0}")]
    Corrupt(String),
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<SessionUser>, SessionError>;
    fn store(&self, user: &SessionUser) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<SessionUser>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionUser>, SessionError> {
        let guard = self
            .user
            .lock()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn store(&self, user: &SessionUser) -> Result<(), SessionError> {
        let mut guard = self
            .user
            .lock()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .user
            .lock()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySessionStore, SessionStore, SessionUser};
    use serde_json::json;

    #[test]
    fn from_login_body_keeps_only_identity_fields() {
        let user = SessionUser::from_login_body(&json!({
            "success": true,
            "message": "Login successful!",
            "username": "ann",
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann@x.com"
        }));
        assert_eq!(user.username.as_deref(), Some("ann"));
        assert_eq!(user.display_name(), "Ann Lee");
        let encoded = serde_json::to_value(&user).expect("serialize");
        assert_eq!(
            encoded,
            json!({"username": "ann", "firstName": "Ann", "lastName": "Lee", "email": "ann@x.com"})
        );
    }

    #[test]
    fn absent_identity_fields_are_omitted() {
        let user = SessionUser::from_login_body(&json!({"success": true, "username": "ann"}));
        let encoded = serde_json::to_value(&user).expect("serialize");
        assert_eq!(encoded, json!({"username": "ann"}));
        let decoded: SessionUser = serde_json::from_value(encoded).expect("deserialize");
        assert_eq!(decoded, user);
    }

    #[test]
    fn memory_store_roundtrip_and_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().expect("load").is_none());
        let user = SessionUser {
            username: Some("ann".to_string()),
            ..SessionUser::default()
        };
        store.store(&user).expect("store");
        assert_eq!(store.load().expect("load"), Some(user));
        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }
}
