//! Authentication seam between the session component and whatever verifies
//! credentials. Only a simulated implementation exists until a backend is
//! available; it waits a fixed latency before answering so loading states are visible.

use crate::{session::Session, validation, Error};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Simulated round trip for a login request.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(800);
/// Simulated round trip for a signup request.
pub const SIGNUP_LATENCY: Duration = Duration::from_millis(1000);

/// Email and password supplied by a form. Lives only for the duration of one call.
#[derive(Debug)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Verifies credentials and hands back the identity to sign in.
pub trait AuthService {
    /// # Errors
    /// Returns [`Error::InvalidCredentials`] when the credentials are rejected.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Session, Error>>;

    /// # Errors
    /// Returns [`Error::ValidationFailed`] when the account cannot be created.
    fn signup(&self, credentials: &Credentials) -> impl Future<Output = Result<Session, Error>>;
}

impl<T: AuthService> AuthService for &T {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Session, Error>> {
        (**self).login(credentials)
    }

    fn signup(&self, credentials: &Credentials) -> impl Future<Output = Result<Session, Error>> {
        (**self).signup(credentials)
    }
}

/// Timer abstraction so the simulated latency runs on any executor.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Placeholder for the future backend: waits a fixed latency, then applies
/// local rules instead of asking an authority.
///
/// Login rejects blank credentials. Signup applies the email and password
/// policy and refuses an email already registered through this instance.
#[derive(Debug)]
pub struct SimulatedAuthService<D> {
    delay: D,
    login_latency: Duration,
    signup_latency: Duration,
    registered: Mutex<HashSet<String>>,
}

impl<D: Delay> SimulatedAuthService<D> {
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            login_latency: LOGIN_LATENCY,
            signup_latency: SIGNUP_LATENCY,
            registered: Mutex::new(HashSet::new()),
        }
    }

    /// Overrides both simulated latencies.
    #[must_use]
    pub fn with_latency(mut self, login: Duration, signup: Duration) -> Self {
        self.login_latency = login;
        self.signup_latency = signup;
        self
    }
}

impl<D: Delay> AuthService for SimulatedAuthService<D> {
    async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        self.delay.sleep(self.login_latency).await;

        if credentials.email().trim().is_empty()
            || credentials.password().expose_secret().trim().is_empty()
        {
            debug!("simulated login rejected blank credentials");
            return Err(Error::InvalidCredentials);
        }

        debug!("simulated login accepted");
        Ok(Session::new(credentials.email()))
    }

    async fn signup(&self, credentials: &Credentials) -> Result<Session, Error> {
        self.delay.sleep(self.signup_latency).await;

        validation::validate_email(credentials.email())
            .and_then(|()| {
                validation::validate_password_policy(credentials.password().expose_secret())
            })
            .map_err(|err| Error::ValidationFailed(err.message))?;

        let normalized = credentials.email().trim().to_lowercase();
        let inserted = self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalized);
        if !inserted {
            debug!("simulated signup rejected duplicate email");
            return Err(Error::ValidationFailed(
                "An account with this email already exists".to_string(),
            ));
        }

        debug!("simulated signup accepted");
        Ok(Session::new(credentials.email()))
    }
}
