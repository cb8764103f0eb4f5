//! Session Bootstrap State Machine
//!
//! On load the app observes up to three signals: an OAuth error indicator in
//! the URL, a freshly issued session token in the URL (OAuth callback), and
//! a previously persisted token. This module reconciles them into a single
//! auth state and drives at most one profile fetch at a time.
//!
//! The controller performs no I/O itself. `begin` tells the caller what to
//! do next; the caller runs the fetch and reports back through `on_profile`.
//! That keeps the whole state machine testable without a browser.

use crate::api::client::UserProfile;
use crate::api::error::FetchError;

use super::store::{SessionStore, SessionToken};

/// One-shot indicators carried by the incoming navigation context
/// (query parameters set by the OAuth redirect).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavContext {
    /// Freshly issued session token (`?session=`)
    pub session: Option<String>,
    /// OAuth failure reason (`?error=`)
    pub error: Option<String>,
}

/// The single authoritative UI state. Exactly one variant is active;
/// `Authenticated` carries both the profile and the token that produced it,
/// so the two can never be set independently.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Loading,
    LoginRequired,
    Error(String),
    Authenticated {
        profile: UserProfile,
        session: SessionToken,
    },
}

/// What the caller must do after a bootstrap pass.
#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapStep {
    /// Fetch the profile for `token`, then report back via
    /// [`BootstrapController::on_profile`]. When `consume_callback` is set
    /// the caller must first strip the one-shot query parameters from the
    /// visible URL so a reload does not replay the callback.
    Fetch {
        token: SessionToken,
        consume_callback: bool,
    },
    /// No fetch needed; the state is already decided.
    Settled(AuthState),
}

/// Reconciles navigation context and persisted session into auth states.
pub struct BootstrapController<S: SessionStore> {
    store: S,
    /// Token of the profile fetch currently in flight, if any. Doubles as
    /// the re-entrancy guard and the staleness check for completions.
    pending: Option<SessionToken>,
}

impl<S: SessionStore> BootstrapController<S> {
    pub fn new(store: S) -> Self {
        BootstrapController {
            store,
            pending: None,
        }
    }

    /// Run one bootstrap pass.
    ///
    /// Returns `None` while a fetch is already pending, so a re-observed
    /// navigation context (e.g. the reactive query map firing again after
    /// the callback parameters were cleared) cannot start a duplicate fetch.
    pub fn begin(&mut self, nav: &NavContext) -> Option<BootstrapStep> {
        if self.pending.is_some() {
            return None;
        }

        // 1. OAuth failure beats everything else; no network call is made.
        if let Some(reason) = &nav.error {
            return Some(BootstrapStep::Settled(AuthState::Error(format!(
                "Authentication failed: {}",
                reason
            ))));
        }

        // 2. Freshly issued token from the OAuth callback: persist it and
        //    ask the caller to clear the one-shot parameters from the URL.
        if let Some(token) = nav.session.as_deref().and_then(SessionToken::new) {
            self.store.set(&token);
            self.pending = Some(token.clone());
            return Some(BootstrapStep::Fetch {
                token,
                consume_callback: true,
            });
        }

        // 3. Fall back to the persisted session, or to the login screen.
        match self.store.get() {
            Some(token) => {
                self.pending = Some(token.clone());
                Some(BootstrapStep::Fetch {
                    token,
                    consume_callback: false,
                })
            }
            None => Some(BootstrapStep::Settled(AuthState::LoginRequired)),
        }
    }

    /// Apply a completed profile fetch.
    ///
    /// Returns `None` when the response is stale: `token` is no longer the
    /// one that initiated the pending fetch (a logout happened meanwhile).
    /// Stale responses are discarded, never applied.
    pub fn on_profile(
        &mut self,
        token: &SessionToken,
        result: Result<UserProfile, FetchError>,
    ) -> Option<AuthState> {
        if self.pending.as_ref() != Some(token) {
            return None;
        }
        self.pending = None;

        Some(match result {
            Ok(profile) => AuthState::Authenticated {
                profile,
                session: token.clone(),
            },
            Err(FetchError::Unauthorized) => {
                // Explicit session rejection: the token is dead, discard it.
                self.store.clear();
                AuthState::LoginRequired
            }
            // Transient failure: the token stays in the store so a retry
            // can reuse it.
            Err(FetchError::Transport(msg)) => AuthState::Error(msg),
        })
    }

    /// Logout. The backend courtesy call is the caller's job and may fail
    /// silently; locally the store is cleared unconditionally, which makes
    /// repeated logouts indistinguishable from one.
    pub fn logout(&mut self) -> AuthState {
        self.pending = None;
        self.store.clear();
        AuthState::LoginRequired
    }

    /// Retry from an error state: re-run the stored-session path. Ends at
    /// the login screen when no session survived the failure.
    pub fn retry(&mut self) -> Option<BootstrapStep> {
        self.begin(&NavContext::default())
    }

    /// Abandon an error state, dropping any stored session.
    pub fn back_to_login(&mut self) -> AuthState {
        self.pending = None;
        self.store.clear();
        AuthState::LoginRequired
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;

    fn profile() -> UserProfile {
        UserProfile {
            username: "alice".to_string(),
            total_karma: 500,
            link_karma: 300,
            comment_karma: 200,
            account_created: "2019-03-01".to_string(),
            total_posts: 42,
            total_comments: 128,
        }
    }

    fn token(raw: &str) -> SessionToken {
        SessionToken::new(raw).unwrap()
    }

    fn controller_with_token(raw: &str) -> BootstrapController<MemoryStore> {
        let store = MemoryStore::default();
        store.set(&token(raw));
        BootstrapController::new(store)
    }

    #[test]
    fn test_oauth_error_settles_without_fetch() {
        let mut c = BootstrapController::new(MemoryStore::default());
        let nav = NavContext {
            session: None,
            error: Some("access_denied".to_string()),
        };

        let step = c.begin(&nav).unwrap();
        assert_eq!(
            step,
            BootstrapStep::Settled(AuthState::Error(
                "Authentication failed: access_denied".to_string()
            ))
        );
    }

    #[test]
    fn test_no_token_no_context_is_login_required() {
        let mut c = BootstrapController::new(MemoryStore::default());

        let step = c.begin(&NavContext::default()).unwrap();
        assert_eq!(step, BootstrapStep::Settled(AuthState::LoginRequired));
    }

    #[test]
    fn test_callback_token_is_persisted_and_fetched() {
        let mut c = BootstrapController::new(MemoryStore::default());
        let nav = NavContext {
            session: Some("abc123".to_string()),
            error: None,
        };

        let step = c.begin(&nav).unwrap();
        assert_eq!(
            step,
            BootstrapStep::Fetch {
                token: token("abc123"),
                consume_callback: true,
            }
        );
        // Persisted before the fetch, so a crash mid-fetch loses nothing
        assert_eq!(c.store().get(), Some(token("abc123")));
    }

    #[test]
    fn test_stored_token_path_does_not_replay_callback() {
        // Reload after the callback was consumed: abc123 is persisted, the
        // URL carries no parameters. Only the stored-session path may run.
        let mut c = controller_with_token("abc123");

        let step = c.begin(&NavContext::default()).unwrap();
        assert_eq!(
            step,
            BootstrapStep::Fetch {
                token: token("abc123"),
                consume_callback: false,
            }
        );
    }

    #[test]
    fn test_successful_fetch_yields_authenticated() {
        let mut c = controller_with_token("sess-1");
        let t = match c.begin(&NavContext::default()).unwrap() {
            BootstrapStep::Fetch { token, .. } => token,
            other => panic!("expected fetch step, got {:?}", other),
        };

        let state = c.on_profile(&t, Ok(profile())).unwrap();
        assert_eq!(
            state,
            AuthState::Authenticated {
                profile: profile(),
                session: token("sess-1"),
            }
        );
    }

    #[test]
    fn test_unauthorized_clears_store_and_falls_back_to_login() {
        let mut c = controller_with_token("sess-1");
        let t = match c.begin(&NavContext::default()).unwrap() {
            BootstrapStep::Fetch { token, .. } => token,
            other => panic!("expected fetch step, got {:?}", other),
        };

        let state = c.on_profile(&t, Err(FetchError::Unauthorized)).unwrap();
        assert_eq!(state, AuthState::LoginRequired);
        assert_eq!(c.store().get(), None);
    }

    #[test]
    fn test_transport_failure_preserves_stored_token() {
        let mut c = controller_with_token("sess-1");
        let t = match c.begin(&NavContext::default()).unwrap() {
            BootstrapStep::Fetch { token, .. } => token,
            other => panic!("expected fetch step, got {:?}", other),
        };

        let state = c
            .on_profile(&t, Err(FetchError::Transport("HTTP 503".to_string())))
            .unwrap();
        assert_eq!(state, AuthState::Error("HTTP 503".to_string()));
        assert_eq!(c.store().get(), Some(token("sess-1")));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut c = controller_with_token("sess-1");

        assert_eq!(c.logout(), AuthState::LoginRequired);
        assert_eq!(c.store().get(), None);

        // Second logout observes the same end state
        assert_eq!(c.logout(), AuthState::LoginRequired);
        assert_eq!(c.store().get(), None);
    }

    #[test]
    fn test_stale_completion_after_logout_is_discarded() {
        let mut c = controller_with_token("sess-1");
        let t = match c.begin(&NavContext::default()).unwrap() {
            BootstrapStep::Fetch { token, .. } => token,
            other => panic!("expected fetch step, got {:?}", other),
        };

        c.logout();

        // The response lands after logout: it must not be applied
        assert_eq!(c.on_profile(&t, Ok(profile())), None);
        assert_eq!(c.store().get(), None);
    }

    #[test]
    fn test_begin_is_not_reentrant_while_fetch_pending() {
        let mut c = controller_with_token("sess-1");
        assert!(c.begin(&NavContext::default()).is_some());

        // Second pass while the fetch is in flight: no duplicate fetch
        assert_eq!(c.begin(&NavContext::default()), None);

        // Even a re-observed callback context may not start another fetch
        let nav = NavContext {
            session: Some("abc123".to_string()),
            error: None,
        };
        assert_eq!(c.begin(&nav), None);
    }

    #[test]
    fn test_retry_reuses_preserved_token() {
        let mut c = controller_with_token("sess-1");
        let t = match c.begin(&NavContext::default()).unwrap() {
            BootstrapStep::Fetch { token, .. } => token,
            other => panic!("expected fetch step, got {:?}", other),
        };
        c.on_profile(&t, Err(FetchError::Transport("HTTP 502".to_string())))
            .unwrap();

        // Retry goes back through the stored-session path with the same token
        let step = c.retry().unwrap();
        assert_eq!(
            step,
            BootstrapStep::Fetch {
                token: token("sess-1"),
                consume_callback: false,
            }
        );
    }

    #[test]
    fn test_back_to_login_discards_session() {
        let mut c = controller_with_token("sess-1");

        assert_eq!(c.back_to_login(), AuthState::LoginRequired);
        assert_eq!(c.store().get(), None);
        assert_eq!(
            c.begin(&NavContext::default()).unwrap(),
            BootstrapStep::Settled(AuthState::LoginRequired)
        );
    }

    #[test]
    fn test_empty_callback_session_falls_through() {
        // `?session=` with an empty value is not a token
        let mut c = BootstrapController::new(MemoryStore::default());
        let nav = NavContext {
            session: Some(String::new()),
            error: None,
        };

        let step = c.begin(&nav).unwrap();
        assert_eq!(step, BootstrapStep::Settled(AuthState::LoginRequired));
        assert_eq!(c.store().get(), None);
    }
}
