use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_FORMAT: &str = "log-format";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("FINTRACK_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .arg(
            Arg::new(ARG_LOG_FORMAT)
                .long("log-format")
                .help("Log output format")
                .env("FINTRACK_LOG_FORMAT")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_env_accepts_names_and_numbers() {
        for (value, expected) in [("warn", 1u8), ("TRACE", 4), ("3", 3)] {
            temp_env::with_vars([("FINTRACK_LOG_LEVEL", Some(value))], || {
                let matches = with_args(Command::new("t")).get_matches_from(["t"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(expected),
                    "value {value}"
                );
            });
        }
    }

    #[test]
    fn log_level_counts_flags() {
        temp_env::with_vars([("FINTRACK_LOG_LEVEL", None::<&str>)], || {
            let matches = with_args(Command::new("t")).get_matches_from(["t", "-vv"]);
            assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));
        });
    }

    #[test]
    fn log_format_defaults_to_text() {
        temp_env::with_vars([("FINTRACK_LOG_FORMAT", None::<&str>)], || {
            let matches = with_args(Command::new("t")).get_matches_from(["t"]);
            assert_eq!(
                matches.get_one::<String>(ARG_LOG_FORMAT).map(String::as_str),
                Some("text")
            );
        });
    }
}
