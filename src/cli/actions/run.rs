use crate::cli::actions::{advise, predict, serve, session, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => session::login(args).await,
        Action::Signup(args) => session::signup(args).await,
        Action::Logout(args) => session::logout(&args),
        Action::Whoami(args) => session::whoami(&args),
        Action::Predict(args) => {
            predict::execute(&args);
            Ok(())
        }
        Action::Advise(args) => advise::execute(&args),
        Action::Serve(args) => serve::execute(args).await,
    }
}
