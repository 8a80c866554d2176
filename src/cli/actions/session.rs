use crate::fintrack::session::{self, Sessions};
use anyhow::{anyhow, Context, Result};
use fintrack_core::{
    session::Landing,
    validation::{FieldError, LoginForm, SignUpForm},
};
use secrecy::{ExposeSecret, SecretString};
use std::{path::PathBuf, time::Duration};
use tracing::{debug, info};

/// Where the session lives and how slow the simulated service is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreArgs {
    pub data_dir: PathBuf,
    pub latency: Option<Duration>,
}

impl StoreArgs {
    fn open(&self) -> Result<Sessions> {
        debug!(data_dir = %self.data_dir.display(), "opening session store");
        session::open(&self.data_dir, self.latency).with_context(|| {
            format!(
                "failed to open session store in {}",
                self.data_dir.display()
            )
        })
    }
}

#[derive(Debug)]
pub struct LoginArgs {
    pub store: StoreArgs,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct SignupArgs {
    pub store: StoreArgs,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Validate the login form, sign in and persist the session.
/// # Errors
/// Returns an error if a field is invalid or the credentials are rejected.
pub async fn login(args: LoginArgs) -> Result<()> {
    let form = LoginForm {
        email: args.email.trim().to_string(),
        password: args.password.expose_secret().to_string(),
    };
    form.validate().map_err(field_error)?;

    let sessions = args.store.open()?;
    let landing = sessions
        .login(&form.email, &form.password)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    info!(email = %landing.session.email, "signed in");
    println!("{}", landed("Signed in", &landing));
    Ok(())
}

/// Validate the sign-up form, create the account and persist the session.
/// # Errors
/// Returns an error if a field is invalid or the account cannot be created.
pub async fn signup(args: SignupArgs) -> Result<()> {
    let form = SignUpForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email.trim().to_string(),
        password: args.password.expose_secret().to_string(),
        confirm_password: args.confirm_password.expose_secret().to_string(),
    };
    form.validate().map_err(field_error)?;

    let sessions = args.store.open()?;
    let landing = sessions
        .signup(&form.email, &form.password)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    info!(email = %landing.session.email, "account created");
    println!("{}", landed("Account created", &landing));
    Ok(())
}

/// # Errors
/// Returns an error if the session store cannot be read.
pub fn logout(args: &StoreArgs) -> Result<()> {
    let sessions = args.open()?;
    let route = sessions.logout();
    println!("Signed out (next: {})", route.path());
    Ok(())
}

/// # Errors
/// Returns an error if the session store cannot be read.
pub fn whoami(args: &StoreArgs) -> Result<()> {
    println!("{}", describe(&args.open()?));
    Ok(())
}

fn landed(verb: &str, landing: &Landing) -> String {
    format!(
        "{verb} as {} (next: {})",
        landing.session.email,
        landing.route.path()
    )
}

fn describe(sessions: &Sessions) -> String {
    sessions.current().map_or_else(
        || "Not signed in".to_string(),
        |session| format!("Signed in as {}", session.email),
    )
}

fn field_error(err: FieldError) -> anyhow::Error {
    anyhow!("{}: {}", err.field.id(), err.message)
}
