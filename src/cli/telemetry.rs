use anyhow::Result;
use std::{env::var, io};
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

// HTTP internals are capped at error unless `RUST_LOG` names them.
const QUIET_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Build the log filter. `RUST_LOG` directives are layered over the
/// verbosity level and take precedence over the quiet HTTP targets.
///
/// # Errors
///
/// Returns an error if a directive fails to parse
pub fn filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);
    let overrides = var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let mut filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();
    for target in QUIET_TARGETS {
        if !names_target(&overrides, target) {
            filter = filter.add_directive(format!("{target}=error").parse()?);
        }
    }

    Ok(filter)
}

fn names_target(directives: &str, target: &str) -> bool {
    directives
        .split(',')
        .filter_map(|directive| directive.trim().split(['=', '[']).next())
        .any(|name| name == target)
}

/// Initialize logging. Output goes to stderr so stdout only carries the
/// flow result.
///
/// # Errors
///
/// Returns an error if the filter or subscriber initialization fails
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(filter(verbosity_level)?);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
