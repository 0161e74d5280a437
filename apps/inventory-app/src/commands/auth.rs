//! # Auth Commands
//!
//! Login, logout and the screen to show for the current session.

use stockroom_store::StoreError;
use tracing::{debug, warn};

use crate::commands::item::list_items;
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use crate::view::{AppView, Notice};

/// Logs a user in.
///
/// ## Returns
/// * `Ok(Notice)` - `Welcome back, <username>!`
/// * `Err(ApiError)` - `AUTH_ERROR` with `Invalid username or password.`;
///   the session is unchanged
pub fn login(store: &StoreState, username: &str, password: &str) -> Result<Notice, ApiError> {
    debug!(username = %username, "login command");
    let user = store.inner().sessions().login(username, password)?;
    Ok(Notice::welcome_back(&user.username))
}

/// Logs out. Succeeds even if nobody was logged in.
pub fn logout(store: &StoreState) -> Result<Notice, ApiError> {
    debug!("logout command");
    store.inner().sessions().logout()?;
    Ok(Notice::logged_out())
}

/// Builds the screen for the current session.
///
/// `term` filters the inventory table the same way the search box does.
/// An unreadable session shows the login screen; logging in replaces it.
pub fn current_view(
    store: &StoreState,
    config: &ConfigState,
    term: &str,
) -> Result<AppView, ApiError> {
    let user = match store.inner().sessions().current_user() {
        Ok(user) => user,
        Err(err @ StoreError::Corrupt { .. }) => {
            warn!(error = %err, "Unreadable session, showing login");
            None
        }
        Err(err) => return Err(err.into()),
    };

    match user {
        None => Ok(AppView::Login),
        Some(username) => {
            let table = list_items(store, config, term)?;
            Ok(AppView::inventory(&username, table))
        }
    }
}
