//! Session context: the single source of truth for "who is logged in".
//!
//! Owns the [`SessionState`] and the only mutation paths into it. The backend
//! is reached through the [`AuthBackend`] seam so tests can substitute a fake
//! and the API gateway can plug in its real HTTP calls.
//!
//! CONCURRENCY
//! ===========
//! The state mutex is never held across an `.await`. Reconciliation is
//! one-shot, and a "who am I" answer is only applied if the stored credential
//! is still the one it was fetched with.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use coupon_core::{LoginResponse, UserProfile};

use crate::error::{SessionError, StoreError};
use crate::signal::{SubscriptionId, UnauthorizedSignal};
use crate::state::SessionState;
use crate::store::{Credential, SessionStore};

/// Backend calls the session context depends on.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Exchange credentials for a token and profile (`POST /auth/login`).
    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResponse, Self::Error>;

    /// Validate the stored token and return the current user (`GET /auth/me`).
    async fn current_user(&self) -> Result<UserProfile, Self::Error>;
}

pub struct SessionContext<B> {
    backend: B,
    store: Arc<dyn SessionStore>,
    state: Mutex<SessionState>,
    initialized: AtomicBool,
}

impl<B: AuthBackend> SessionContext<B> {
    /// Starts `Restoring` if the store already holds a credential, otherwise
    /// `Anonymous`. Call [`Self::initialize`] to reconcile with the backend.
    pub fn new(backend: B, store: Arc<dyn SessionStore>) -> Self {
        let initial = if store.token().is_some() {
            SessionState::Restoring
        } else {
            SessionState::Anonymous
        };
        Self {
            backend,
            store,
            state: Mutex::new(initial),
            initialized: AtomicBool::new(false),
        }
    }

    /// Register for the gateway's unauthorized signal for the lifetime of the
    /// context. The listener holds a weak reference only.
    pub fn attach(self: &Arc<Self>, signal: &UnauthorizedSignal) -> SubscriptionId
    where
        B: 'static,
    {
        let weak = Arc::downgrade(self);
        signal.subscribe(move || {
            if let Some(ctx) = weak.upgrade() {
                ctx.handle_unauthorized();
            }
        })
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.lock_state().user().cloned()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock_state().is_loading()
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Reconcile the stored credential with the backend. Runs once; later
    /// calls return the current state without touching the network.
    pub async fn initialize(&self) -> SessionState {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.state();
        }

        let Some(credential) = self.store.token() else {
            self.set_state(SessionState::Anonymous);
            return SessionState::Anonymous;
        };

        self.set_state(SessionState::Restoring);
        let result = self.backend.current_user().await;
        let still_current = self.store.token().as_ref() == Some(&credential);

        match result {
            Ok(profile) if still_current => {
                if let Err(error) = self.store.set(&credential, &profile) {
                    tracing::warn!(%error, "failed to cache refreshed profile");
                }
                tracing::info!(user_id = %profile.id, role = %profile.role, "session restored");
                self.set_state(SessionState::Authenticated(profile));
            }
            Ok(_) => {
                tracing::debug!("credential changed while restoring; discarding profile");
                self.settle_restoring();
            }
            Err(error) => {
                tracing::info!(%error, "stored credential rejected; clearing session");
                if still_current && let Err(error) = self.store.clear() {
                    tracing::warn!(%error, "failed to clear rejected session");
                }
                self.settle_restoring();
            }
        }

        self.state()
    }

    /// Log in and commit the session before returning.
    ///
    /// # Errors
    ///
    /// - `SessionError::Backend` with the backend's original error (state unchanged)
    /// - `SessionError::ContractViolation` if the response lacks a token or a user
    ///   (store and state untouched)
    /// - `SessionError::Store` if the session cannot be persisted
    pub async fn login(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<UserProfile, SessionError<B::Error>> {
        let response = self
            .backend
            .login(identifier, secret)
            .await
            .map_err(SessionError::Backend)?;

        let credential = response
            .token
            .and_then(Credential::new)
            .ok_or_else(|| SessionError::ContractViolation("missing token".into()))?;
        let profile = response
            .user
            .ok_or_else(|| SessionError::ContractViolation("missing user".into()))?;

        self.store.set(&credential, &profile)?;
        self.initialized.store(true, Ordering::SeqCst);
        self.set_state(SessionState::Authenticated(profile.clone()));
        tracing::info!(user_id = %profile.id, role = %profile.role, "logged in");
        Ok(profile)
    }

    /// Log in as someone else (or again) while a session may be active.
    ///
    /// The current session is dropped first, so the login request goes out
    /// without a bearer header and a rejection leaves the context
    /// `Anonymous` rather than half-cleared.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`], plus `SessionError::Store` if the old
    /// session cannot be removed.
    pub async fn relogin(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<UserProfile, SessionError<B::Error>> {
        self.logout()?;
        self.initialized.store(true, Ordering::SeqCst);
        self.login(identifier, secret).await
    }

    /// Drop the session locally. No network call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the stored entries cannot be removed; the
    /// context is `Anonymous` regardless.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.set_state(SessionState::Anonymous);
        self.store.clear()
    }

    /// React to a 401 observed anywhere. Idempotent.
    pub fn handle_unauthorized(&self) {
        if self.store.token().is_some()
            && let Err(error) = self.store.clear()
        {
            tracing::warn!(%error, "failed to clear session after 401");
        }
        self.set_state(SessionState::Anonymous);
    }

    fn settle_restoring(&self) {
        let mut state = self.lock_state();
        if state.is_loading() {
            tracing::debug!(from = state.as_str(), to = "anonymous", "session transition");
            *state = SessionState::Anonymous;
        }
    }

    fn set_state(&self, next: SessionState) {
        let mut state = self.lock_state();
        if *state != next {
            tracing::debug!(from = state.as_str(), to = next.as_str(), "session transition");
        }
        *state = next;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;
    use coupon_core::Role;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, thiserror::Error)]
    #[error("fake backend: {0}")]
    struct FakeError(String);

    /// Scripted backend counting every call.
    #[derive(Default)]
    struct FakeBackend {
        login_response: Mutex<Option<Result<LoginResponse, String>>>,
        me_response: Mutex<Option<Result<UserProfile, String>>>,
        login_calls: AtomicUsize,
        me_calls: AtomicUsize,
        /// Cleared during `current_user`, simulating a logout mid-flight.
        clear_during_me: Option<Arc<dyn SessionStore>>,
    }

    impl FakeBackend {
        fn with_login(response: Result<LoginResponse, String>) -> Self {
            Self {
                login_response: Mutex::new(Some(response)),
                ..Self::default()
            }
        }

        fn with_me(response: Result<UserProfile, String>) -> Self {
            Self {
                me_response: Mutex::new(Some(response)),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        type Error = FakeError;

        async fn login(&self, _identifier: &str, _secret: &str) -> Result<LoginResponse, FakeError> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            self.login_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected login call")
                .map_err(FakeError)
        }

        async fn current_user(&self) -> Result<UserProfile, FakeError> {
            self.me_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(store) = &self.clear_during_me {
                store.clear().unwrap();
            }
            self.me_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected me call")
                .map_err(FakeError)
        }
    }

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            role,
            client_id: (role != Role::Admin).then(|| "c1".to_string()),
            email: None,
        }
    }

    fn credential(token: &str) -> Credential {
        Credential::new(token).unwrap()
    }

    #[tokio::test]
    async fn startup_without_token_skips_network() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = SessionContext::new(FakeBackend::default(), store);
        assert_eq!(ctx.state(), SessionState::Anonymous);

        let state = ctx.initialize().await;
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(ctx.backend().me_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn startup_with_token_restores_profile() {
        let store: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::with_token(&credential("tok")));
        let fresh = UserProfile {
            name: "Asha R".into(),
            ..profile(Role::Client)
        };
        let ctx = SessionContext::new(FakeBackend::with_me(Ok(fresh.clone())), Arc::clone(&store));
        assert!(ctx.is_loading(), "stored token means restoring before initialize");

        let state = ctx.initialize().await;
        assert_eq!(state, SessionState::Authenticated(fresh.clone()));
        assert_eq!(store.profile(), Some(fresh));
        assert_eq!(store.token(), Some(credential("tok")));
    }

    #[tokio::test]
    async fn startup_with_rejected_token_clears_store() {
        let store: Arc<dyn SessionStore> = Arc::new(
            MemorySessionStore::with_session(&credential("expired"), &profile(Role::Admin))
                .unwrap(),
        );
        let ctx = SessionContext::new(
            FakeBackend::with_me(Err("token expired".into())),
            Arc::clone(&store),
        );

        let state = ctx.initialize().await;
        assert_eq!(state, SessionState::Anonymous);
        assert!(store.token().is_none());
        assert!(store.profile().is_none());
    }

    #[tokio::test]
    async fn initialize_runs_once() {
        let store: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::with_token(&credential("tok")));
        let ctx = SessionContext::new(FakeBackend::with_me(Ok(profile(Role::Admin))), store);

        ctx.initialize().await;
        let second = ctx.initialize().await;
        assert!(second.is_authenticated());
        assert_eq!(ctx.backend().me_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_profile_is_discarded_after_logout_mid_flight() {
        let store: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::with_token(&credential("tok")));
        let backend = FakeBackend {
            clear_during_me: Some(Arc::clone(&store)),
            ..FakeBackend::with_me(Ok(profile(Role::Client)))
        };
        let ctx = SessionContext::new(backend, Arc::clone(&store));

        let state = ctx.initialize().await;
        assert_eq!(state, SessionState::Anonymous);
        assert!(store.profile().is_none(), "stale profile must not be written");
    }

    #[tokio::test]
    async fn login_commits_before_returning() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let returned = profile(Role::Cashier);
        let ctx = SessionContext::new(
            FakeBackend::with_login(Ok(LoginResponse {
                token: Some("tok_new".into()),
                user: Some(returned.clone()),
            })),
            Arc::clone(&store),
        );

        let user = ctx.login("cashier@example.com", "secret1").await.unwrap();
        assert_eq!(user, returned);
        assert_eq!(ctx.state(), SessionState::Authenticated(returned.clone()));
        assert_eq!(store.token(), Some(credential("tok_new")));
        assert_eq!(store.profile(), Some(returned));

        // Login marks reconciliation as done.
        ctx.initialize().await;
        assert_eq!(ctx.backend().me_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn login_missing_token_is_contract_violation() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = SessionContext::new(
            FakeBackend::with_login(Ok(LoginResponse {
                token: None,
                user: Some(profile(Role::Admin)),
            })),
            Arc::clone(&store),
        );

        let err = ctx.login("a@example.com", "pw").await.unwrap_err();
        assert!(err.is_contract_violation());
        assert!(err.to_string().contains("missing token"));
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
    }

    #[tokio::test]
    async fn login_missing_user_is_contract_violation() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = SessionContext::new(
            FakeBackend::with_login(Ok(LoginResponse {
                token: Some("tok".into()),
                user: None,
            })),
            Arc::clone(&store),
        );

        let err = ctx.login("a@example.com", "pw").await.unwrap_err();
        assert!(err.is_contract_violation());
        assert!(err.to_string().contains("missing user"));
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
    }

    #[tokio::test]
    async fn login_rejection_propagates_backend_error() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = SessionContext::new(
            FakeBackend::with_login(Err("Invalid credentials".into())),
            Arc::clone(&store),
        );

        let err = ctx.login("a@example.com", "wrong").await.unwrap_err();
        assert!(!err.is_contract_violation());
        assert_eq!(
            err.backend().map(ToString::to_string).as_deref(),
            Some("fake backend: Invalid credentials")
        );
        assert_eq!(ctx.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn failed_relogin_leaves_anonymous() {
        let store: Arc<dyn SessionStore> = Arc::new(
            MemorySessionStore::with_session(&credential("tok"), &profile(Role::Admin)).unwrap(),
        );
        let ctx = SessionContext::new(
            FakeBackend::with_login(Err("invalid credentials".into())),
            Arc::clone(&store),
        );
        assert!(ctx.is_loading());

        let err = ctx.relogin("a@example.com", "wrong").await.unwrap_err();
        assert!(err.backend().is_some());
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(store.token().is_none());

        // The dropped session is not resurrected by a later initialize.
        assert_eq!(ctx.initialize().await, SessionState::Anonymous);
        assert_eq!(ctx.backend().me_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn relogin_replaces_active_session() {
        let store: Arc<dyn SessionStore> = Arc::new(
            MemorySessionStore::with_session(&credential("old"), &profile(Role::Admin)).unwrap(),
        );
        let cashier = profile(Role::Cashier);
        let ctx = SessionContext::new(
            FakeBackend::with_login(Ok(LoginResponse {
                token: Some("new".into()),
                user: Some(cashier.clone()),
            })),
            Arc::clone(&store),
        );

        let user = ctx.relogin("c@example.com", "secret1").await.unwrap();
        assert_eq!(user, cashier);
        assert_eq!(store.token(), Some(credential("new")));
        assert_eq!(ctx.state(), SessionState::Authenticated(cashier));
    }

    #[tokio::test]
    async fn logout_clears_everything() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = SessionContext::new(
            FakeBackend::with_login(Ok(LoginResponse {
                token: Some("tok".into()),
                user: Some(profile(Role::Admin)),
            })),
            Arc::clone(&store),
        );
        ctx.login("a@example.com", "pw").await.unwrap();

        ctx.logout().unwrap();
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
        ctx.logout().unwrap();
    }

    #[tokio::test]
    async fn unauthorized_signal_resets_attached_context() {
        let store: Arc<dyn SessionStore> = Arc::new(
            MemorySessionStore::with_session(&credential("tok"), &profile(Role::Client)).unwrap(),
        );
        let ctx = Arc::new(SessionContext::new(
            FakeBackend::with_me(Ok(profile(Role::Client))),
            Arc::clone(&store),
        ));
        let signal = UnauthorizedSignal::new();
        ctx.attach(&signal);
        ctx.initialize().await;
        assert!(ctx.state().is_authenticated());

        signal.notify();
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(store.token().is_none());

        // Repeated broadcasts are harmless.
        signal.notify();
        assert_eq!(ctx.state(), SessionState::Anonymous);
    }

    #[test]
    fn dropped_context_ignores_signal() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let ctx = Arc::new(SessionContext::new(FakeBackend::default(), store));
        let signal = UnauthorizedSignal::new();
        ctx.attach(&signal);
        drop(ctx);

        signal.notify();
        assert_eq!(signal.fired_count(), 1);
    }
}
