//! # Session Repository
//!
//! Credential checks and the logged-in marker.
//!
//! The session is a single JSON string under the session key (`"admin"`).
//! An absent key or an empty string both mean nobody is logged in.

use stockroom_core::{AuthError, User};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::store::Store;

/// Repository for users and the current session.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    store: Store,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(store: Store) -> Self {
        SessionRepository { store }
    }

    /// Lists stored users.
    pub fn users(&self) -> StoreResult<Vec<User>> {
        self.store.load(&self.store.keys().users)
    }

    /// Checks a username/password pair against the stored users.
    ///
    /// ## Errors
    /// * `StoreError::Auth(InvalidCredentials)` - no user matches exactly
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<User> {
        self.users()?
            .into_iter()
            .find(|user| user.matches(username, password))
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }

    /// Authenticates and records the session.
    ///
    /// Nothing is written when the credentials are rejected.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<User> {
        let user = match self.authenticate(username, password) {
            Ok(user) => user,
            Err(err) => {
                warn!(username = %username, "Login rejected");
                return Err(err);
            }
        };

        self.store
            .save_value(&self.store.keys().session, user.username.as_str())?;
        info!(username = %user.username, "User logged in");

        Ok(user)
    }

    /// Clears the session. Logging out twice is fine.
    ///
    /// An unreadable session value is removed as well, so logout is the way
    /// back to a clean login screen.
    pub fn logout(&self) -> StoreResult<()> {
        match self.current_user() {
            Ok(Some(username)) => info!(username = %username, "User logged out"),
            Ok(None) => debug!("Logout with no active session"),
            Err(err) => warn!(error = %err, "Discarding unreadable session"),
        }
        self.store.remove(&self.store.keys().session)
    }

    /// The logged-in username, if any.
    pub fn current_user(&self) -> StoreResult<Option<String>> {
        let user: Option<String> = self.store.load_value(&self.store.keys().session)?;
        Ok(user.filter(|name| !name.is_empty()))
    }

    /// Whether someone is logged in.
    pub fn is_logged_in(&self) -> StoreResult<bool> {
        Ok(self.current_user()?.is_some())
    }
}
