//! External process execution
//!
//! Every external program this tool drives (package manager, git, extras'
//! init subcommands) goes through `run`. Failures come back as a value, not
//! an error, so the controller inspects each recoverable-failure branch
//! explicitly instead of relying on propagation.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Outcome of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failed(String),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            RunOutcome::Success => None,
            RunOutcome::Failed(message) => Some(message),
        }
    }
}

/// Run `program` with `args` in `dir`, suppressing its standard streams, and
/// wait for completion. Spawn failure and non-zero exit both map to
/// `RunOutcome::Failed`.
pub async fn run(program: &str, args: &[&str], dir: &Path) -> RunOutcome {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => RunOutcome::Success,
        Ok(status) => RunOutcome::Failed(format!("{} exited with {}", program, status)),
        Err(e) => RunOutcome::Failed(format!("failed to start {}: {}", program, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_fails() {
        let outcome = run(
            "definitely-not-a-real-program",
            &["--version"],
            &std::env::temp_dir(),
        )
        .await;
        assert!(!outcome.is_success());
        assert!(outcome
            .failure_message()
            .is_some_and(|m| m.contains("failed to start")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_succeeds() {
        let outcome = run("true", &[], &std::env::temp_dir()).await;
        assert_eq!(outcome, RunOutcome::Success);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_fails() {
        let outcome = run("false", &[], &std::env::temp_dir()).await;
        assert!(outcome
            .failure_message()
            .is_some_and(|m| m.contains("exited with")));
    }
}
