pub mod advise;
pub mod predict;
pub mod serve;
pub mod session;

mod run;

#[derive(Debug)]
pub enum Action {
    Login(session::LoginArgs),
    Signup(session::SignupArgs),
    Logout(session::StoreArgs),
    Whoami(session::StoreArgs),
    Predict(predict::Args),
    Advise(advise::Args),
    Serve(serve::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
