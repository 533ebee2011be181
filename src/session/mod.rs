//! Persisted current-user session
//!
//! The session is the [`User`] returned by the last successful login. It is
//! written on login and profile save, removed on logout, and read by every
//! protected page before it issues any request. Stores are passed to page
//! handlers explicitly; there is no process-wide session.

mod file;

use log::{info, warn};
use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::users::User;

pub use file::FileSessionStore;

/// Storage for the current user
pub trait SessionStore: Send + Sync {
    /// Read the stored user, `None` when nobody is logged in
    fn load(&self) -> Result<Option<User>>;

    /// Persist `user` as the current session
    fn save(&self, user: &User) -> Result<()>;

    /// Remove the current session
    fn clear(&self) -> Result<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn load(&self) -> Result<Option<User>> {
        (**self).load()
    }

    fn save(&self, user: &User) -> Result<()> {
        (**self).save(user)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Arc<RwLock<Option<User>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `user`
    pub fn with_user(user: User) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>> {
        let guard = self.user.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        let mut guard = self.user.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.user.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

/// Result of checking the session when a protected page mounts
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGuard {
    /// A user is logged in
    Authenticated(User),
    /// Nobody is logged in; go to the login page before doing anything else
    RedirectToLogin,
}

impl SessionGuard {
    /// Check `store` for a logged-in user.
    ///
    /// A store that cannot be read counts as logged out.
    pub fn check(store: &dyn SessionStore) -> Self {
        match store.load() {
            Ok(Some(user)) => SessionGuard::Authenticated(user),
            Ok(None) => SessionGuard::RedirectToLogin,
            Err(err) => {
                warn!("Could not read session, treating as logged out: {}", err);
                SessionGuard::RedirectToLogin
            }
        }
    }

    /// The logged-in user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionGuard::Authenticated(user) => Some(user),
            SessionGuard::RedirectToLogin => None,
        }
    }
}

/// Persist `user` as the logged-in user
pub(crate) fn store_user(store: &dyn SessionStore, user: &User) -> Result<()> {
    store.save(user)?;
    info!("Session stored for {}", user.username);
    Ok(())
}
