use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_DATA_DIR: &str = "data-dir";
pub const ARG_LATENCY_MS: &str = "latency-ms";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";

/// Session store options shared by every session subcommand.
#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DATA_DIR)
                .long("data-dir")
                .help("Directory holding the persisted session")
                .env("FINTRACK_DATA_DIR")
                .global(true)
                .default_value(".fintrack")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_LATENCY_MS)
                .long("latency-ms")
                .help("Override the simulated authentication latency, in milliseconds")
                .env("FINTRACK_LATENCY_MS")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email")
        .env("FINTRACK_EMAIL")
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Account password")
        .env("FINTRACK_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new("login")
        .about("Sign in and persist the session")
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn signup() -> Command {
    Command::new("signup")
        .about("Create an account and persist the session")
        .arg(
            Arg::new(ARG_FIRST_NAME)
                .long("first-name")
                .help("First name"),
        )
        .arg(Arg::new(ARG_LAST_NAME).long("last-name").help("Last name"))
        .arg(email_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long("confirm-password")
                .help("Repeat the password")
                .env("FINTRACK_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
}

#[must_use]
pub fn logout() -> Command {
    Command::new("logout").about("Sign out and clear the persisted session")
}

#[must_use]
pub fn whoami() -> Command {
    Command::new("whoami").about("Show the signed-in account")
}

/// Value of an optional text argument, empty when absent.
#[must_use]
pub fn text(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
