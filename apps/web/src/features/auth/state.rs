//! Auth session context for the frontend. The provider hydrates the session
//! once on mount and mirrors every change of the session component into
//! signals used by guards and routes.

use super::storage::{GlooDelay, LocalStorageStore};
use crate::app_lib::{config::AppConfig, AppError};
use fintrack_core::{
    auth::SimulatedAuthService,
    session::{Landing, Route, Session, SessionState, SessionStore},
    validation::{LoginForm, SignUpForm},
};
use leptos::{prelude::*, task::spawn_local};
use std::sync::Arc;
use tracing::warn;

type WebSessions = SessionStore<SimulatedAuthService<GlooDelay>, LocalStorageStore>;

fn sessions(config: &AppConfig) -> WebSessions {
    let mut auth = SimulatedAuthService::new(GlooDelay);
    if let Some(latency) = config.auth_latency {
        auth = auth.with_latency(latency, latency);
    }
    SessionStore::new(auth, LocalStorageStore)
}

#[derive(Clone)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    sessions: Arc<WebSessions>,
    pub session: RwSignal<Option<Session>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(sessions: WebSessions) -> Self {
        let state = sessions.state();
        let session = RwSignal::new(state.session);
        let is_loading = RwSignal::new(state.initializing);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            sessions: Arc::new(sessions),
            session,
            is_loading,
            is_authenticated,
        }
    }

    fn sync(&self, state: &SessionState) {
        self.session.set(state.session.clone());
        self.is_loading.set(state.initializing);
    }

    /// Validates the form, then signs in. Signals are updated before this returns.
    pub async fn login(&self, form: LoginForm) -> Result<Landing, AppError> {
        form.validate()?;
        let landing = self.sessions.login(&form.email, &form.password).await?;
        self.sync(&self.sessions.state());
        Ok(landing)
    }

    /// Validates the form, then creates the account and signs in.
    pub async fn signup(&self, form: SignUpForm) -> Result<Landing, AppError> {
        form.validate()?;
        let landing = self.sessions.signup(&form.email, &form.password).await?;
        self.sync(&self.sessions.state());
        Ok(landing)
    }

    pub fn logout(&self) -> Route {
        let route = self.sessions.logout();
        self.sync(&self.sessions.state());
        route
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(sessions(&AppConfig::load()));
    provide_context(auth.clone());

    spawn_local(async move {
        let mut updates = auth.sessions.subscribe();
        if let Err(err) = auth.sessions.hydrate() {
            warn!("session hydration failed: {err}");
        }

        loop {
            let state = updates.borrow_and_update().clone();
            auth.sync(&state);
            if updates.changed().await.is_err() {
                break;
            }
        }
    });

    view! { {children()} }
}

/// Returns the current auth context, or a standalone one hydrated on the spot.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let sessions = sessions(&AppConfig::load());
        if let Err(err) = sessions.hydrate() {
            warn!("session hydration failed: {err}");
        }
        AuthContext::new(sessions)
    })
}
