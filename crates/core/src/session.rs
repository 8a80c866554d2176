//! The session component: owns the current identity, hydrates it once from the
//! durable slot, and publishes every transition through a watch channel.
//!
//! Transitions persist first and publish second. A failed slot write leaves
//! the published state untouched, so subscribers only ever see sessions that
//! would survive a reload.

use crate::{
    auth::{AuthService, Credentials},
    store::DurableStore,
    Error, SESSION_KEY,
};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Currently authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Snapshot published to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub initializing: bool,
}

impl SessionState {
    const fn initial() -> Self {
        Self {
            session: None,
            initializing: true,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Where the caller should navigate after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Login,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
        }
    }
}

/// Result of a successful login or signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing {
    pub session: Session,
    pub route: Route,
}

pub struct SessionStore<A, S> {
    auth: A,
    store: S,
    state: watch::Sender<SessionState>,
}

impl<A: AuthService, S: DurableStore> SessionStore<A, S> {
    /// Creates the component in its initializing state without touching storage.
    pub fn new(auth: A, store: S) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self { auth, store, state }
    }

    /// Creates the component and hydrates it from the durable slot.
    ///
    /// A hydration failure is only logged and leaves the component signed
    /// out. Callers that must report storage errors use [`Self::new`]
    /// followed by [`Self::hydrate`].
    pub fn open(auth: A, store: S) -> Self {
        let component = Self::new(auth, store);
        if let Err(err) = component.hydrate() {
            warn!("session hydration failed: {err}");
        }
        component
    }

    /// Restores the session from the durable slot.
    ///
    /// Runs once: `initializing` is cleared whatever the outcome, and later
    /// calls return the current session without reading the slot again. A
    /// malformed record is discarded and treated as no session.
    ///
    /// # Errors
    /// Returns [`Error::StorageUnavailable`] when the slot cannot be read.
    pub fn hydrate(&self) -> Result<Option<Session>, Error> {
        if !self.state.borrow().initializing {
            return Ok(self.current());
        }

        let loaded = self.load();
        let session = loaded.clone().ok().flatten();

        self.state.send_modify(|state| {
            state.session = session;
            state.initializing = false;
        });

        debug!(
            authenticated = self.is_authenticated(),
            "session hydrated from durable slot"
        );
        loaded
    }

    /// Authenticates and starts a session. Surrounding whitespace in `email`
    /// is dropped before it reaches the auth service.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCredentials`] from the auth service or
    /// [`Error::StorageUnavailable`] when the session cannot be persisted.
    /// State is unchanged on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Landing, Error> {
        let credentials = Credentials::new(email.trim(), password);
        let session = self.auth.login(&credentials).await.inspect_err(|err| {
            debug!("login rejected: {err}");
        })?;

        self.commit(&session)?;
        info!("session started by login");

        Ok(Landing {
            session,
            route: Route::Dashboard,
        })
    }

    /// Registers and starts a session; `email` is trimmed as in [`Self::login`].
    ///
    /// # Errors
    /// Returns [`Error::ValidationFailed`] from the auth service or
    /// [`Error::StorageUnavailable`] when the session cannot be persisted.
    /// State is unchanged on error.
    pub async fn signup(&self, email: &str, password: &str) -> Result<Landing, Error> {
        let credentials = Credentials::new(email.trim(), password);
        let session = self.auth.signup(&credentials).await.inspect_err(|err| {
            debug!("signup rejected: {err}");
        })?;

        self.commit(&session)?;
        info!("session started by signup");

        Ok(Landing {
            session,
            route: Route::Dashboard,
        })
    }

    /// Ends the session. Never fails; calling it without a session is a no-op.
    pub fn logout(&self) -> Route {
        if let Err(err) = self.store.remove(SESSION_KEY) {
            error!("failed to clear durable session slot: {err}");
        }

        let ended = self.state.send_if_modified(|state| state.session.take().is_some());
        if ended {
            info!("session ended");
        }

        Route::Login
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn is_initializing(&self) -> bool {
        self.state.borrow().initializing
    }

    /// Receiver that observes every published transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Backing store, mostly useful to inspect the durable slot.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> Result<Option<Session>, Error> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.email.trim().is_empty() => Ok(Some(session)),
            Ok(_) => {
                warn!("discarding session record without an email");
                self.discard();
                Ok(None)
            }
            Err(err) => {
                warn!("discarding malformed session record: {err}");
                self.discard();
                Ok(None)
            }
        }
    }

    fn discard(&self) {
        if let Err(err) = self.store.remove(SESSION_KEY) {
            warn!("failed to remove discarded session record: {err}");
        }
    }

    fn commit(&self, session: &Session) -> Result<(), Error> {
        let record = serde_json::to_string(session)
            .map_err(|err| Error::StorageUnavailable(format!("encode session: {err}")))?;
        self.store.set(SESSION_KEY, &record)?;

        let session = session.clone();
        self.state.send_modify(|state| state.session = Some(session));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::cell::Cell;

    /// Auth double with a fixed verdict that counts its calls.
    struct StubAuth {
        accept: bool,
        calls: Cell<usize>,
    }

    impl StubAuth {
        fn accepting() -> Self {
            Self {
                accept: true,
                calls: Cell::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                calls: Cell::new(0),
            }
        }
    }

    impl AuthService for StubAuth {
        async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
            self.calls.set(self.calls.get() + 1);
            if self.accept {
                Ok(Session::new(credentials.email()))
            } else {
                Err(Error::InvalidCredentials)
            }
        }

        async fn signup(&self, credentials: &Credentials) -> Result<Session, Error> {
            self.calls.set(self.calls.get() + 1);
            if self.accept {
                Ok(Session::new(credentials.email()))
            } else {
                Err(Error::ValidationFailed("duplicate email".to_string()))
            }
        }
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl DurableStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, Error> {
            Err(Error::StorageUnavailable("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::StorageUnavailable("disk on fire".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), Error> {
            Err(Error::StorageUnavailable("disk on fire".to_string()))
        }
    }

    fn persisted(store: &MemoryStore) -> Option<Session> {
        store
            .get(SESSION_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    #[test]
    fn starts_initializing_without_session() {
        let store = SessionStore::new(StubAuth::accepting(), MemoryStore::new());
        assert_eq!(
            store.state(),
            SessionState {
                session: None,
                initializing: true
            }
        );
    }

    #[tokio::test]
    async fn login_sets_and_persists_session() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());

        let landing = store.login("jane@example.com", "Abc12345").await?;

        assert_eq!(landing.route, Route::Dashboard);
        assert_eq!(landing.session.email, "jane@example.com");
        assert_eq!(store.current(), Some(Session::new("jane@example.com")));
        assert_eq!(persisted(store.store()), store.current());
        Ok(())
    }

    #[tokio::test]
    async fn signup_sets_and_persists_session() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());

        let landing = store.signup("new@example.com", "Abc12345").await?;

        assert_eq!(landing.route.path(), "/dashboard");
        assert!(store.is_authenticated());
        assert_eq!(persisted(store.store()), Some(Session::new("new@example.com")));
        Ok(())
    }

    #[tokio::test]
    async fn email_is_trimmed_before_it_is_persisted() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());

        let landing = store.signup("  jane@example.com ", "Abc12345").await?;
        assert_eq!(landing.session.email, "jane@example.com");
        assert_eq!(persisted(store.store()), Some(Session::new("jane@example.com")));

        store.logout();
        store.login("\tjane@example.com\n", "Abc12345").await?;
        assert_eq!(store.current(), Some(Session::new("jane@example.com")));
        Ok(())
    }

    #[test]
    fn hydrate_reports_unreadable_slot() {
        let store = SessionStore::new(StubAuth::accepting(), BrokenStore);

        assert!(matches!(store.hydrate(), Err(Error::StorageUnavailable(_))));
        assert!(!store.is_initializing());
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn rejected_login_leaves_state_and_slot_untouched() {
        let store = SessionStore::open(StubAuth::rejecting(), MemoryStore::new());

        let result = store.login("jane@example.com", "nope").await;

        assert_eq!(result, Err(Error::InvalidCredentials));
        assert_eq!(store.current(), None);
        assert_eq!(persisted(store.store()), None);
    }

    #[tokio::test]
    async fn rejected_signup_surfaces_validation_failure() {
        let store = SessionStore::open(StubAuth::rejecting(), MemoryStore::new());

        let result = store.signup("jane@example.com", "Abc12345").await;

        assert!(matches!(result, Err(Error::ValidationFailed(_))));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_state_and_slot() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());
        store.login("jane@example.com", "Abc12345").await?;

        assert_eq!(store.logout(), Route::Login);
        assert_eq!(store.current(), None);
        assert_eq!(store.store().get(SESSION_KEY)?, None);
        Ok(())
    }

    #[tokio::test]
    async fn logout_twice_is_a_no_op() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());
        store.signup("jane@example.com", "Abc12345").await?;
        store.logout();

        let mut rx = store.subscribe();
        assert_eq!(store.logout(), Route::Login);
        assert!(!rx.has_changed().unwrap_or(true));
        assert_eq!(store.current(), None);
        Ok(())
    }

    #[tokio::test]
    async fn reopening_restores_session_without_auth_calls() -> Result<(), Error> {
        let slot = MemoryStore::new();
        {
            let first = SessionStore::open(StubAuth::accepting(), &slot);
            first.login("jane@example.com", "Abc12345").await?;
        }

        let auth = StubAuth::accepting();
        let second = SessionStore::open(&auth, &slot);

        assert_eq!(second.current(), Some(Session::new("jane@example.com")));
        assert!(!second.is_initializing());
        assert_eq!(auth.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn hydrate_clears_initializing_exactly_once() -> Result<(), Error> {
        let slot = MemoryStore::with_slot(SESSION_KEY, r#"{"email":"jane@example.com"}"#);
        let store = SessionStore::new(StubAuth::accepting(), &slot);
        let mut rx = store.subscribe();

        assert_eq!(store.hydrate()?, Some(Session::new("jane@example.com")));
        assert!(rx.has_changed().unwrap_or(false));
        assert!(!rx.borrow_and_update().initializing);

        // the slot changes underneath; a second hydrate must not re-read it
        slot.set(SESSION_KEY, r#"{"email":"other@example.com"}"#)?;
        assert_eq!(store.hydrate()?, Some(Session::new("jane@example.com")));
        assert!(!rx.has_changed().unwrap_or(true));
        Ok(())
    }

    #[test]
    fn malformed_slot_hydrates_to_absent_and_is_discarded() -> Result<(), Error> {
        let slot = MemoryStore::with_slot(SESSION_KEY, "{not json");
        let store = SessionStore::open(StubAuth::accepting(), &slot);

        assert_eq!(store.current(), None);
        assert!(!store.is_initializing());
        assert_eq!(slot.get(SESSION_KEY)?, None);
        Ok(())
    }

    #[test]
    fn blank_email_record_is_discarded() -> Result<(), Error> {
        let slot = MemoryStore::with_slot(SESSION_KEY, r#"{"email":"  "}"#);
        let store = SessionStore::open(StubAuth::accepting(), &slot);

        assert_eq!(store.current(), None);
        assert_eq!(slot.get(SESSION_KEY)?, None);
        Ok(())
    }

    #[test]
    fn unreadable_slot_still_finishes_initializing() {
        let store = SessionStore::new(StubAuth::accepting(), BrokenStore);

        let result = store.hydrate();

        assert!(matches!(result, Err(Error::StorageUnavailable(_))));
        assert!(!store.is_initializing());
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn unwritable_slot_fails_login_without_publishing() {
        let store = SessionStore::new(StubAuth::accepting(), BrokenStore);
        let mut rx = store.subscribe();

        let result = store.login("jane@example.com", "Abc12345").await;

        assert!(matches!(result, Err(Error::StorageUnavailable(_))));
        assert!(!rx.has_changed().unwrap_or(true));
        assert_eq!(store.current(), None);
    }

    #[test]
    fn logout_survives_unwritable_slot() {
        let store = SessionStore::new(StubAuth::accepting(), BrokenStore);
        assert_eq!(store.logout(), Route::Login);
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_transitions() -> Result<(), Error> {
        let store = SessionStore::open(StubAuth::accepting(), MemoryStore::new());
        let mut rx = store.subscribe();

        store.login("jane@example.com", "Abc12345").await?;
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(
            rx.borrow_and_update().session,
            Some(Session::new("jane@example.com"))
        );

        store.logout();
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(rx.borrow_and_update().session, None);
        Ok(())
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Login.path(), "/login");
    }
}
