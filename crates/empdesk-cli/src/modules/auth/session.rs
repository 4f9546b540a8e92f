use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use empdesk_core::{SessionError, SessionStore, SessionUser};

use crate::modules::system::empdesk_dir;

#[derive(Serialize, Deserialize)]
struct SessionFile {
    user: SessionUser,
    #[serde(default)]
    logged_in_at: Option<String>,
}

/// Session record kept in `~/.empdesk/session.json` until `logout`.
pub(crate) struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn default_location() -> anyhow::Result<Self> {
        Ok(Self::new(empdesk_dir()?.join("session.json")))
    }

    fn read(&self) -> Result<Option<SessionFile>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|err| SessionError::Unavailable(err.to_string()))?;
        let file = serde_json::from_str(&contents)
            .map_err(|err| SessionError::Corrupt(err.to_string()))?;
        Ok(Some(file))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionUser>, SessionError> {
        Ok(self.read()?.map(|file| file.user))
    }

    fn store(&self, user: &SessionUser) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| SessionError::Unavailable(err.to_string()))?;
        }
        let file = SessionFile {
            user: user.clone(),
            logged_in_at: Some(Utc::now().to_rfc3339()),
        };
        let contents = serde_json::to_string_pretty(&file)
            .map_err(|err| SessionError::Corrupt(err.to_string()))?;
        fs::write(&self.path, contents).map_err(|err| SessionError::Unavailable(err.to_string()))?;
        debug!(path = %self.path.display(), "stored session user");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Unavailable(err.to_string())),
        }
    }
}
