// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted session state.
//!
//! The client persists exactly three things between runs: the access
//! token, the refresh token and a denormalized copy of the user's
//! identity. They live together in one JSON file and are cleared
//! together on logout or unrecoverable authentication failure.
//!
//! The store is read once when the client is constructed and written
//! through on every change; nothing else reads the file. Components
//! that need identity receive it explicitly, never from ambient state.

use room_booking_api::{AuthenticatedUser, UserIdentity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised by the session store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the session file failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file contents could not be (de)serialized.
    #[error("session storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The bearer token attached to authenticated requests.
    pub access_token: String,
    /// The token exchanged for a new access token on expiry.
    pub refresh_token: String,
    /// Denormalized identity of the authenticated user.
    pub identity: UserIdentity,
}

impl Session {
    /// Returns the viewer this session authenticates as.
    #[must_use]
    pub fn viewer(&self) -> AuthenticatedUser {
        AuthenticatedUser::from_identity(&self.identity)
    }
}

/// File-backed storage for the session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session, if one exists.
    ///
    /// A missing file means no session; a present but unreadable or
    /// undecodable file is an error the caller decides about.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or
    /// decoded.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let session: Session = serde_json::from_str(&contents)?;
        Ok(Some(session))
    }

    /// Persists the session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let contents = serde_json::to_string(session)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    /// Removes the persisted session.
    ///
    /// Clearing an already-absent session is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_booking_domain::Role;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> SessionStore {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "room-booking-session-test-{}-{n}.json",
            std::process::id()
        ));
        SessionStore::new(path)
    }

    fn test_session() -> Session {
        Session {
            access_token: String::from("access-abc"),
            refresh_token: String::from("refresh-def"),
            identity: UserIdentity {
                id: 5,
                username: Some(String::from("jdoe")),
                email: String::from("jdoe@example.com"),
                first_name: None,
                last_name: None,
                role: Role::User,
            },
        }
    }

    #[test]
    fn test_load_without_file_is_none() {
        let store = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store();
        let session = test_session();

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_session_and_is_idempotent() {
        let store = temp_store();
        store.save(&test_session()).unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing again is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_session() {
        let store = temp_store();
        std::fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(SessionStoreError::Encoding(_))
        ));

        store.clear().unwrap();
    }

    #[test]
    fn test_session_viewer() {
        let session = test_session();
        let viewer = session.viewer();

        assert_eq!(viewer.id, 5);
        assert_eq!(viewer.username, "jdoe");
        assert_eq!(viewer.role, Role::User);
    }
}
