//! Maps validated CLI matches to an [`Action`].

use crate::cli::actions::{
    advise as advise_action, predict, serve as serve_action, session, Action,
};
use crate::cli::commands::{self, advise, serve, session as session_args};
use anyhow::{anyhow, Context, Result};
use fintrack_core::advisor::RiskTolerance;
use secrecy::SecretString;
use std::{path::PathBuf, time::Duration};

/// Sample inputs used by `advise --demo`.
const DEMO_LOAN_RATE: f64 = 4.5;
const DEMO_INVESTMENT_RETURN: f64 = 7.0;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("login", sub)) => Ok(Action::Login(session::LoginArgs {
            store: store_args(sub)?,
            email: session_args::text(sub, session_args::ARG_EMAIL),
            password: secret(sub, session_args::ARG_PASSWORD),
        })),
        Some(("signup", sub)) => Ok(Action::Signup(session::SignupArgs {
            store: store_args(sub)?,
            first_name: session_args::text(sub, session_args::ARG_FIRST_NAME),
            last_name: session_args::text(sub, session_args::ARG_LAST_NAME),
            email: session_args::text(sub, session_args::ARG_EMAIL),
            password: secret(sub, session_args::ARG_PASSWORD),
            confirm_password: secret(sub, session_args::ARG_CONFIRM_PASSWORD),
        })),
        Some(("logout", sub)) => Ok(Action::Logout(store_args(sub)?)),
        Some(("whoami", sub)) => Ok(Action::Whoami(store_args(sub)?)),
        Some(("predict", sub)) => {
            let input = sub
                .get_many::<String>(commands::ARG_INPUT)
                .context("missing required argument: <input>")?
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            Ok(Action::Predict(predict::Args { input }))
        }
        Some(("advise", sub)) => Ok(Action::Advise(advise_args(sub)?)),
        Some(("serve", sub)) => Ok(Action::Serve(serve_action::Args {
            port: sub
                .get_one::<u16>(serve::ARG_PORT)
                .copied()
                .context("missing required argument: --port")?,
            dist: sub
                .get_one::<PathBuf>(serve::ARG_DIST)
                .cloned()
                .context("missing required argument: --dist")?,
        })),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn store_args(matches: &clap::ArgMatches) -> Result<session::StoreArgs> {
    let data_dir = matches
        .get_one::<PathBuf>(session_args::ARG_DATA_DIR)
        .cloned()
        .context("missing required argument: --data-dir")?;
    let latency = matches
        .get_one::<u64>(session_args::ARG_LATENCY_MS)
        .copied()
        .map(Duration::from_millis);

    Ok(session::StoreArgs { data_dir, latency })
}

fn advise_args(sub: &clap::ArgMatches) -> Result<advise_action::Args> {
    if sub.get_flag(advise::ARG_DEMO) {
        return Ok(advise_action::Args {
            loan_rate: DEMO_LOAN_RATE,
            investment_return: DEMO_INVESTMENT_RETURN,
            risk: RiskTolerance::High,
        });
    }

    let loan_rate = sub
        .get_one::<f64>(advise::ARG_LOAN_RATE)
        .copied()
        .context("missing required argument: --loan-rate")?;
    let investment_return = sub
        .get_one::<f64>(advise::ARG_INVESTMENT_RETURN)
        .copied()
        .context("missing required argument: --investment-return")?;
    let risk = sub
        .get_one::<String>(advise::ARG_RISK_TOLERANCE)
        .context("missing required argument: --risk-tolerance")?
        .parse::<RiskTolerance>()?;

    Ok(advise_action::Args {
        loan_rate,
        investment_return,
        risk,
    })
}

fn secret(matches: &clap::ArgMatches, id: &str) -> SecretString {
    SecretString::from(session_args::text(matches, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::time::Duration;

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(
            [
                ("FINTRACK_EMAIL", None::<&str>),
                ("FINTRACK_PASSWORD", None),
                ("FINTRACK_CONFIRM_PASSWORD", None),
                ("FINTRACK_DATA_DIR", None),
                ("FINTRACK_LATENCY_MS", None),
            ],
            f,
        );
    }

    #[test]
    fn login_action_carries_credentials_and_store() {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec![
                "fintrack",
                "login",
                "-e",
                "jane@example.com",
                "-p",
                "Abc12345",
                "--latency-ms",
                "0",
            ]);
            let action = handler(&matches);
            let Ok(Action::Login(session::LoginArgs {
                store,
                email,
                password,
            })) = action
            else {
                panic!("expected login action");
            };
            assert_eq!(email, "jane@example.com");
            assert_eq!(password.expose_secret(), "Abc12345");
            assert_eq!(store.data_dir, PathBuf::from(".fintrack"));
            assert_eq!(store.latency, Some(Duration::ZERO));
        });
    }

    #[test]
    fn login_password_from_env() {
        temp_env::with_vars([("FINTRACK_PASSWORD", Some("FromEnv123"))], || {
            let matches =
                commands::new().get_matches_from(vec!["fintrack", "login", "-e", "a@b.co"]);
            let Ok(Action::Login(session::LoginArgs { password, .. })) = handler(&matches) else {
                panic!("expected login action");
            };
            assert_eq!(password.expose_secret(), "FromEnv123");
        });
    }

    #[test]
    fn missing_login_fields_are_left_for_form_validation() {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec!["fintrack", "login"]);
            let Ok(Action::Login(session::LoginArgs {
                email, password, ..
            })) = handler(&matches)
            else {
                panic!("expected login action");
            };
            assert!(email.is_empty());
            assert!(password.expose_secret().is_empty());
        });
    }

    #[test]
    fn signup_action_collects_all_fields() {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec![
                "fintrack",
                "signup",
                "--first-name",
                "Jane",
                "--last-name",
                "Doe",
                "--email",
                "jane@example.com",
                "--password",
                "Abc12345",
                "--confirm-password",
                "Abc12345",
            ]);
            let Ok(Action::Signup(session::SignupArgs {
                first_name,
                last_name,
                confirm_password,
                ..
            })) = handler(&matches)
            else {
                panic!("expected signup action");
            };
            assert_eq!(first_name, "Jane");
            assert_eq!(last_name, "Doe");
            assert_eq!(confirm_password.expose_secret(), "Abc12345");
        });
    }

    #[test]
    fn advise_demo_uses_sample_values() {
        let matches = commands::new().get_matches_from(vec!["fintrack", "advise", "--demo"]);
        let Ok(Action::Advise(advise_action::Args {
            loan_rate,
            investment_return,
            risk,
        })) = handler(&matches)
        else {
            panic!("expected advise action");
        };
        assert!((loan_rate - 4.5).abs() < f64::EPSILON);
        assert!((investment_return - 7.0).abs() < f64::EPSILON);
        assert_eq!(risk, RiskTolerance::High);
    }

    #[test]
    fn advise_rejects_unknown_risk_tolerance() {
        let matches = commands::new().get_matches_from(vec![
            "fintrack",
            "advise",
            "--loan-rate",
            "4.5",
            "--investment-return",
            "7",
            "--risk-tolerance",
            "yolo",
        ]);
        let result = handler(&matches);
        assert!(result.is_err());
        if let Err(err) = result {
            assert!(err.to_string().contains("Risk tolerance must be one of"));
        }
    }

    #[test]
    fn serve_defaults() {
        temp_env::with_vars(
            [("FINTRACK_PORT", None::<&str>), ("FINTRACK_DIST", None)],
            || {
                let matches = commands::new().get_matches_from(vec!["fintrack", "serve"]);
                let Ok(Action::Serve(args)) = handler(&matches) else {
                    panic!("expected serve action");
                };
                assert_eq!(args.port, 8080);
                assert_eq!(args.dist, PathBuf::from("apps/web/dist"));
            },
        );
    }

    #[test]
    fn logout_and_whoami_share_store_args() {
        temp_env::with_vars([("FINTRACK_DATA_DIR", Some("/tmp/ft"))], || {
            for name in ["logout", "whoami"] {
                let matches = commands::new().get_matches_from(vec!["fintrack", name]);
                let store = match handler(&matches) {
                    Ok(Action::Logout(store) | Action::Whoami(store)) => store,
                    other => panic!("unexpected action: {other:?}"),
                };
                assert_eq!(store.data_dir, PathBuf::from("/tmp/ft"));
                assert_eq!(store.latency, None);
            }
        });
    }

    #[test]
    fn predict_joins_input_words() {
        let matches =
            commands::new().get_matches_from(vec!["fintrack", "predict", "tech", "stocks"]);
        let Ok(Action::Predict(predict::Args { input })) = handler(&matches) else {
            panic!("expected predict action");
        };
        assert_eq!(input, "tech stocks");
    }
}
