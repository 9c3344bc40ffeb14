//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action that runs one of the flows.

use crate::cli::actions::{Action, login, register};
use crate::cli::commands::{api, login::CMD_LOGIN, register::CMD_REGISTER};
use anyhow::{Result, bail};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_LOGIN, sub)) => {
            let options = crate::cli::commands::login::Options::parse(sub);
            Ok(Action::Login(login::Args {
                api: api::Options::parse(sub),
                email: options.email,
                password: options.password,
            }))
        }
        Some((CMD_REGISTER, sub)) => {
            let options = crate::cli::commands::register::Options::parse(sub);
            Ok(Action::Register(register::Args {
                api: api::Options::parse(sub),
                username: options.username,
                email: options.email,
                password: options.password,
            }))
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("missing command, expected one of: {CMD_LOGIN}, {CMD_REGISTER}"),
    }
}
