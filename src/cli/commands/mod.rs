pub mod advise;
pub mod logging;
pub mod serve;
pub mod session;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_INPUT: &str = "input";

#[must_use]
pub fn predict() -> Command {
    Command::new("predict")
        .about("Run the placeholder financial predictor")
        .arg(
            Arg::new(ARG_INPUT)
                .help("Financial data to analyze")
                .num_args(1..)
                .required(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("fintrack")
        .about("Personal finance onboarding toolkit")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(session::login())
        .subcommand(session::signup())
        .subcommand(session::logout())
        .subcommand(session::whoami())
        .subcommand(predict())
        .subcommand(advise::command())
        .subcommand(serve::command());

    let command = session::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "fintrack");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Personal finance onboarding toolkit".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_command_definition_is_consistent() {
        new().debug_assert();
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("FINTRACK_EMAIL", None::<&str>),
                ("FINTRACK_PASSWORD", None),
                ("FINTRACK_DATA_DIR", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "fintrack",
                    "login",
                    "--email",
                    "jane@example.com",
                    "--password",
                    "Abc12345",
                ]);
                let Some(("login", sub)) = matches.subcommand() else {
                    panic!("expected login subcommand");
                };
                assert_eq!(
                    sub.get_one::<String>(session::ARG_EMAIL).map(String::as_str),
                    Some("jane@example.com")
                );
                assert_eq!(
                    sub.get_one::<PathBuf>(session::ARG_DATA_DIR),
                    Some(&PathBuf::from(".fintrack"))
                );
            },
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars([("FINTRACK_DATA_DIR", None::<&str>)], || {
            let matches = new().get_matches_from(vec![
                "fintrack",
                "whoami",
                "--data-dir",
                "/tmp/fintrack-test",
                "--latency-ms",
                "5",
            ]);
            let Some(("whoami", sub)) = matches.subcommand() else {
                panic!("expected whoami subcommand");
            };
            assert_eq!(
                sub.get_one::<PathBuf>(session::ARG_DATA_DIR),
                Some(&PathBuf::from("/tmp/fintrack-test"))
            );
            assert_eq!(sub.get_one::<u64>(session::ARG_LATENCY_MS).copied(), Some(5));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("FINTRACK_PORT", Some("443")),
                ("FINTRACK_DIST", Some("/srv/fintrack")),
                ("FINTRACK_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["fintrack", "serve"]);
                let Some(("serve", sub)) = matches.subcommand() else {
                    panic!("expected serve subcommand");
                };
                assert_eq!(sub.get_one::<u16>(serve::ARG_PORT).copied(), Some(443));
                assert_eq!(
                    sub.get_one::<PathBuf>(serve::ARG_DIST),
                    Some(&PathBuf::from("/srv/fintrack"))
                );
                assert_eq!(sub.get_one::<u8>(logging::ARG_VERBOSITY).copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_advise_demo_conflicts_with_rates() {
        let result = new().try_get_matches_from(vec![
            "fintrack",
            "advise",
            "--demo",
            "--loan-rate",
            "4.5",
        ]);
        assert!(result.is_err());

        let result = new().try_get_matches_from(vec!["fintrack", "advise", "--loan-rate", "4.5"]);
        assert!(result.is_err());

        let result = new().try_get_matches_from(vec!["fintrack", "advise", "--demo"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_predict_joins_words() {
        let matches = new().get_matches_from(vec!["fintrack", "predict", "tech", "stocks"]);
        let Some(("predict", sub)) = matches.subcommand() else {
            panic!("expected predict subcommand");
        };
        let words: Vec<&String> = sub
            .get_many::<String>(ARG_INPUT)
            .map(Iterator::collect)
            .unwrap_or_default();
        assert_eq!(words, ["tech", "stocks"]);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(new().try_get_matches_from(vec!["fintrack"]).is_err());
    }
}
