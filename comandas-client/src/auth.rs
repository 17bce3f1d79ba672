//! Auth session controller
//!
//! Owns the login/logout transitions and the post-transition
//! navigation. Exactly one authentication path runs per login call:
//! identifiers carrying the reserved `@` marker go to the local
//! endpoint, everything else to the remote one. The dispatch is
//! deterministic; no path is ever retried or mixed.

use std::sync::atomic::{AtomicBool, Ordering};

use shared::auth::{LocalLoginRequest, LoginReply, RemoteLoginRequest};
use shared::group::{group_label, LOCAL_FALLBACK_LABEL, UNKNOWN_GROUP_LABEL};

use crate::error::{ClientError, ClientResult};
use crate::guard::{Navigator, Route};
use crate::http::HttpClient;
use crate::session::{Session, SessionStore};

/// Reserved marker selecting the local-account login path.
pub const LOCAL_ACCOUNT_MARKER: char = '@';

/// True when the identifier selects the local path.
pub fn uses_local_path(identifier: &str) -> bool {
    identifier.starts_with(LOCAL_ACCOUNT_MARKER)
}

/// Controller state, always derived from the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    LoggedIn,
}

/// Mediates between credential input, the login endpoints and the
/// session store; drives navigation after each transition.
pub struct AuthController<N: Navigator> {
    http: HttpClient,
    store: SessionStore,
    navigator: N,
    login_in_flight: AtomicBool,
}

impl<N: Navigator> AuthController<N> {
    /// The initial state comes from whatever the store holds, so a
    /// reload within the same tab does not force a new login.
    pub fn new(http: HttpClient, store: SessionStore, navigator: N) -> Self {
        Self {
            http,
            store,
            navigator,
            login_in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> AuthState {
        if self.store.is_authenticated() {
            AuthState::LoggedIn
        } else {
            AuthState::LoggedOut
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Attempt a login. Per call: at most one auth request, one store
    /// write and one navigation. Failure leaves the store untouched.
    /// Re-entry while a call is in flight is refused, not queued.
    pub async fn login(&self, identifier: &str, secret: &str) -> ClientResult<Session> {
        if self.login_in_flight.swap(true, Ordering::SeqCst) {
            return Err(ClientError::LoginInProgress);
        }
        // The latch must release even when the caller navigates away
        // and drops this future mid-request.
        let _in_flight = InFlightGuard(&self.login_in_flight);
        let result = self.authenticate(identifier, secret).await;

        match result {
            Ok(session) => {
                self.store.set(session.clone());
                tracing::info!(
                    user = %session.display_name,
                    group = %session.group_label,
                    "login succeeded"
                );
                self.navigator.navigate(Route::Home);
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(%err, "login failed");
                Err(err)
            }
        }
    }

    async fn authenticate(&self, identifier: &str, secret: &str) -> ClientResult<Session> {
        let (reply, fallback) = if uses_local_path(identifier) {
            let request = LocalLoginRequest {
                username: identifier.to_string(),
                senha: secret.to_string(),
            };
            let reply: LoginReply =
                self.http.post("funcionario/login_local", &request).await?;
            (reply, LOCAL_FALLBACK_LABEL)
        } else {
            let request = RemoteLoginRequest {
                cpf: identifier.to_string(),
                senha: secret.to_string(),
            };
            let reply: LoginReply = self.http.post("funcionario/login", &request).await?;
            (reply, UNKNOWN_GROUP_LABEL)
        };

        // Unmapped group codes fall back per path; never an error.
        let label = reply
            .grupo
            .as_deref()
            .and_then(group_label)
            .unwrap_or(fallback);
        let name = reply.nome.unwrap_or_else(|| identifier.to_string());
        Ok(Session::logged_in(name, label))
    }

    /// Clear the session and go back to the login view. Idempotent;
    /// logging out while logged out is a no-op apart from navigation.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("logged out");
        self.navigator.navigate(Route::Login);
    }
}

/// Clears the in-flight latch on drop, whether the login ran to
/// completion or its future was abandoned.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
