use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_LOGIN: &str = "login";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct Options {
    pub email: String,
    pub password: SecretString,
}

impl Options {
    /// Values are passed through as typed; presence is checked by the login
    /// flow so a missing value gets the same message the form shows.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let email = matches
            .get_one::<String>(ARG_EMAIL)
            .cloned()
            .unwrap_or_default();
        let password = matches
            .get_one::<String>(ARG_PASSWORD)
            .cloned()
            .unwrap_or_default();

        Self {
            email,
            password: SecretString::from(password),
        }
    }
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in and print the dashboard route")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email")
                .env("EGO_EMAIL"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Account password")
                .env("EGO_PASSWORD")
                .hide_env_values(true),
        )
}
