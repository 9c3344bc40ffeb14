use crate::api::DEFAULT_TIMEOUT_SECS;
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TIMEOUT: &str = "timeout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Runtime override; `None` falls back to the build-time base URL.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let base_url = matches
            .get_one::<String>(ARG_API_BASE_URL)
            .cloned()
            .filter(|value| !value.trim().is_empty());
        let timeout = matches
            .get_one::<u64>(ARG_TIMEOUT)
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL of the ego API, example: https://api.ego.dev")
                .long_help(
                    "Base URL of the ego API. Overrides the value captured from EGO_API_BASE_URL at build time.",
                )
                .env("EGO_API_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("EGO_TIMEOUT")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
