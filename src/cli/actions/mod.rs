mod run;

pub use run::check;

use crate::{options::ParsedOptions, probe::Outcome};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Help,
    Version,
    Check { options: ParsedOptions, debug: bool },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written
    pub async fn execute(self) -> anyhow::Result<Outcome> {
        run::execute(self).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_action_debug() {
        let action = Action::Check {
            options: ParsedOptions::default(),
            debug: false,
        };

        let debug_str = format!("{action:?}");
        assert!(debug_str.contains("Check"));
    }

    #[tokio::test]
    async fn test_execute_version() {
        let outcome = Action::Version.execute().await.unwrap();
        assert_eq!(outcome, Outcome::Success);
    }
}
