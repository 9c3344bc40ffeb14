pub mod login;
pub mod register;

// Internal "interpreter" for `Action`.
mod run;

use crate::auth::SubmitOutcome;
use anyhow::{Result, bail};

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if configuration is invalid or the flow does not
    /// reach a navigation outcome.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Print the notice and destination of a finished flow, or turn the status
/// message into the command error.
pub(crate) fn report(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Navigate { route, notice } => {
            println!("{notice}");
            println!("next: {route}");
            Ok(())
        }
        SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => bail!(message),
        SubmitOutcome::Ignored => Ok(()),
    }
}
