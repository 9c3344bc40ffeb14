use super::login::{ARG_EMAIL, ARG_PASSWORD};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_REGISTER: &str = "register";
pub const ARG_USERNAME: &str = "username";

#[derive(Debug, Clone)]
pub struct Options {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let get = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .unwrap_or_default()
        };

        Self {
            username: get(ARG_USERNAME),
            email: get(ARG_EMAIL),
            password: SecretString::from(get(ARG_PASSWORD)),
        }
    }
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account and print the login route")
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long(ARG_USERNAME)
                .help("Display name, 3 to 30 characters")
                .env("EGO_USERNAME"),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email, at most 30 characters")
                .env("EGO_EMAIL"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Account password, 8 to 30 characters")
                .env("EGO_PASSWORD")
                .hide_env_values(true),
        )
}
