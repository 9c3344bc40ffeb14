use clap::{Arg, ArgAction, ArgMatches, Command, builder::ValueParser};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

// Index is the `-v` count that selects the level; 0 keeps the error default.
const LEVELS: [(&str, Option<Level>); 5] = [
    ("error", None),
    ("warn", Some(Level::WARN)),
    ("info", Some(Level::INFO)),
    ("debug", Some(Level::DEBUG)),
    ("trace", Some(Level::TRACE)),
];

/// Accepts `EGO_LOG_LEVEL=debug` as well as a raw count such as `3`.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|value: &str| -> Result<u8, String> {
        let value = value.trim();
        if let Ok(count) = value.parse::<u8>() {
            return Ok(count);
        }
        LEVELS
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(value))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level: {value}"))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("EGO_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

/// Tracing level selected by the verbosity count; `None` means errors only.
#[must_use]
pub fn level(matches: &ArgMatches) -> Option<Level> {
    let count = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    LEVELS
        .get(usize::from(count))
        .map_or(Some(Level::TRACE), |(_, level)| *level)
}
