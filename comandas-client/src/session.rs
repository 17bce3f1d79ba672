//! Session store
//!
//! Tab-scoped login state: a single writer (the auth controller) and
//! many readers (route guard, navigation bar). Writes replace the whole
//! `Session` value, so readers never observe a partial update and no
//! locking discipline beyond the store itself is needed.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// Current login state plus the display attributes screens need.
///
/// Serde names keep the original storage keys (`loginRealizado`,
/// `nome`, `grupo`), so a snapshot round-trips with what the browser
/// build kept in sessionStorage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "loginRealizado")]
    pub authenticated: bool,
    #[serde(rename = "nome", default)]
    pub display_name: String,
    #[serde(rename = "grupo", default)]
    pub group_label: String,
}

impl Session {
    /// Session value written after a successful login.
    pub fn logged_in(
        display_name: impl Into<String>,
        group_label: impl Into<String>,
    ) -> Self {
        Self {
            authenticated: true,
            display_name: display_name.into(),
            group_label: group_label.into(),
        }
    }
}

/// Shared session container. Operations are total: no I/O, no errors.
///
/// Lifetime matches the process (the browser-tab analogue); nothing is
/// persisted across restarts. A snapshot taken before a reload can seed
/// a fresh store via [`SessionStore::from_snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Empty store: logged out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a snapshot taken earlier in the same tab.
    pub fn from_snapshot(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Current session value.
    pub fn get(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole session value.
    pub fn set(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Back to the logged-out default.
    pub fn clear(&self) {
        self.set(Session::default());
    }

    /// Authentication predicate read by the route guard.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .authenticated
    }
}
