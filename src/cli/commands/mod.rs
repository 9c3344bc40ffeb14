pub mod api;
pub mod logging;
pub mod login;
pub mod register;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("ego")
        .about("Sign in to or register with the ego API")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(login::subcommand())
        .subcommand(register::subcommand());

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_TIMEOUT_SECS;
    use secrecy::ExposeSecret;
    use std::time::Duration;

    const ENV_VARS: [(&str, Option<&str>); 6] = [
        ("EGO_API_BASE_URL", None),
        ("EGO_TIMEOUT", None),
        ("EGO_EMAIL", None),
        ("EGO_PASSWORD", None),
        ("EGO_USERNAME", None),
        ("EGO_LOG_LEVEL", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ego");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Sign in to or register with the ego API".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_subcommand_required() {
        temp_env::with_vars(ENV_VARS, || {
            assert!(new().try_get_matches_from(["ego"]).is_err());
        });
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(ENV_VARS, || {
            let matches = new().get_matches_from([
                "ego",
                "--api-base-url",
                "https://api.ego.dev",
                "login",
                "--email",
                "ada@ego.dev",
                "--password",
                "hunter22",
            ]);
            let Some((name, sub)) = matches.subcommand() else {
                panic!("expected a subcommand");
            };
            assert_eq!(name, login::CMD_LOGIN);

            let options = login::Options::parse(sub);
            assert_eq!(options.email, "ada@ego.dev");
            assert_eq!(options.password.expose_secret(), "hunter22");

            let api = api::Options::parse(sub);
            assert_eq!(api.base_url.as_deref(), Some("https://api.ego.dev"));
            assert_eq!(api.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    fn test_register_args_after_subcommand() {
        temp_env::with_vars(ENV_VARS, || {
            let matches = new().get_matches_from([
                "ego",
                "register",
                "-u",
                "ada",
                "-e",
                "ada@ego.dev",
                "-p",
                "correct-horse",
                "--timeout",
                "3",
            ]);
            let Some((name, sub)) = matches.subcommand() else {
                panic!("expected a subcommand");
            };
            assert_eq!(name, register::CMD_REGISTER);

            let options = register::Options::parse(sub);
            assert_eq!(options.username, "ada");
            assert_eq!(options.email, "ada@ego.dev");
            assert_eq!(options.password.expose_secret(), "correct-horse");

            let api = api::Options::parse(sub);
            assert_eq!(api.base_url, None);
            assert_eq!(api.timeout, Duration::from_secs(3));
        });
    }

    #[test]
    fn test_values_from_env() {
        temp_env::with_vars(
            [
                ("EGO_API_BASE_URL", Some("http://localhost:3000")),
                ("EGO_TIMEOUT", Some("5")),
                ("EGO_EMAIL", Some("env@ego.dev")),
                ("EGO_PASSWORD", Some("from-env")),
                ("EGO_USERNAME", None),
                ("EGO_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(["ego", "login"]);
                let Some((_, sub)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };

                let options = login::Options::parse(sub);
                assert_eq!(options.email, "env@ego.dev");
                assert_eq!(options.password.expose_secret(), "from-env");

                let api = api::Options::parse(sub);
                assert_eq!(api.base_url.as_deref(), Some("http://localhost:3000"));
                assert_eq!(api.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        temp_env::with_vars(ENV_VARS, || {
            let result = new().try_get_matches_from(["ego", "--timeout", "0", "login"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_blank_base_url_is_unset() {
        temp_env::with_vars(ENV_VARS, || {
            let matches = new().get_matches_from(["ego", "--api-base-url", "  ", "login"]);
            let Some((_, sub)) = matches.subcommand() else {
                panic!("expected a subcommand");
            };
            assert_eq!(api::Options::parse(sub).base_url, None);
        });
    }
}
