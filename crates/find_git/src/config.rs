// crates/find_git/src/config.rs

use clap::{Arg, ArgMatches, Command};

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Log skipped paths and matches to stderr.
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        AppConfig {
            verbose: matches.get_flag("verbose"),
        }
    }
}

/// Builds the command-line interface.
pub fn build_cli() -> Command {
    Command::new("find_git")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lists every Git repository under the current directory")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}
