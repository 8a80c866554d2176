use clap::{Arg, Command};
use std::path::PathBuf;

pub const ARG_PORT: &str = "port";
pub const ARG_DIST: &str = "dist";

#[must_use]
pub fn command() -> Command {
    Command::new("serve")
        .about("Serve the built web front-end")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("FINTRACK_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DIST)
                .long("dist")
                .help("Directory with the built web bundle (index.html and assets)")
                .default_value("apps/web/dist")
                .env("FINTRACK_DIST")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}
