use crate::cli::actions::{Action, login, register};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Register(args) => register::execute(args).await,
    }
}
