//! Persisted login session.
//!
//! The token and user info live in a small TOML file under the user's
//! config directory so separate CLI invocations stay logged in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::LoginResponse;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not locate a configuration directory")]
    NoConfigDir,

    #[error("failed to read session file: {0}")]
    Io(#[from] io::Error),

    #[error("session file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl Session {
    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            token: login.token.clone(),
            user_id: login.user_id,
            username: login.username.clone(),
            is_staff: login.is_staff,
            is_superuser: login.is_superuser,
        }
    }

    /// True for users allowed to manage surveys and accounts.
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }

    fn default_path() -> Result<PathBuf, SessionError> {
        let dir = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Ok(dir.join("mensa").join("session.toml"))
    }

    pub fn load() -> Result<Option<Self>, SessionError> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, SessionError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(toml::from_str(&contents)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<(), SessionError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn clear() -> Result<(), SessionError> {
        Self::clear_at(&Self::default_path()?)
    }

    pub fn clear_at(path: &Path) -> Result<(), SessionError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "deadbeef".into(),
            user_id: 7,
            username: "ayse".into(),
            is_staff: true,
            is_superuser: false,
        }
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mensa").join("session.toml");

        sample().save_to(&path).unwrap();
        let loaded = Session::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.token, "deadbeef");
        assert_eq!(loaded.username, "ayse");
        assert!(loaded.is_admin());

        Session::clear_at(&path).unwrap();
        assert!(Session::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Session::load_from(&path).unwrap().is_none());
        Session::clear_at(&path).unwrap();
    }
}
