use clap::{Arg, ArgAction, Command};

pub const ARG_LOAN_RATE: &str = "loan-rate";
pub const ARG_INVESTMENT_RETURN: &str = "investment-return";
pub const ARG_RISK_TOLERANCE: &str = "risk-tolerance";
pub const ARG_DEMO: &str = "demo";

#[must_use]
pub fn command() -> Command {
    Command::new("advise")
        .about("Compare paying off a loan with investing")
        .arg(
            Arg::new(ARG_LOAN_RATE)
                .long("loan-rate")
                .help("Annual loan interest rate, in percent")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .required_unless_present(ARG_DEMO),
        )
        .arg(
            Arg::new(ARG_INVESTMENT_RETURN)
                .long("investment-return")
                .help("Expected annual investment return, in percent")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .required_unless_present(ARG_DEMO),
        )
        .arg(
            Arg::new(ARG_RISK_TOLERANCE)
                .long("risk-tolerance")
                .help("Risk tolerance: low, medium or high")
                .required_unless_present(ARG_DEMO),
        )
        .arg(
            Arg::new(ARG_DEMO)
                .long("demo")
                .help("Run with sample values (4.5%, 7.0%, high)")
                .action(ArgAction::SetTrue)
                .conflicts_with_all([ARG_LOAN_RATE, ARG_INVESTMENT_RETURN, ARG_RISK_TOLERANCE]),
        )
}
