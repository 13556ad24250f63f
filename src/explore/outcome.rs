use crate::core::{NpkgError, NpkgResult};
use crate::script::{ErrorCode, ScriptError, ScriptOutput};

/// What the process boundary should do with the exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Leave the exit code alone (0 unless something else set it)
    Unchanged,
    Code(i32),
}

/// How an explored command finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// Exited 0
    Success,
    /// The runner resolved with a nonzero code
    Exited(i32),
    /// Killed by a signal; reported as an error rather than an exit code
    Signaled(ScriptError),
    /// The runner rejected without a signal. The error is kept for the
    /// caller but never reaches the top-level error handler.
    Failed { exit_code: i32, error: ScriptError },
}

impl ExploreOutcome {
    /// Classify a script run.
    ///
    /// A rejection whose code is 0, named (`ENOENT`) or missing maps to exit
    /// code 1.
    pub fn from_run(result: Result<ScriptOutput, ScriptError>) -> Self {
        match result {
            Ok(output) if output.code == 0 && output.signal.is_none() => ExploreOutcome::Success,
            Ok(output) => ExploreOutcome::Exited(if output.code != 0 { output.code } else { 1 }),
            Err(error) if error.signal().is_some() => ExploreOutcome::Signaled(error),
            Err(error) => {
                let exit_code = match error.code() {
                    Some(ErrorCode::Exit(code)) if *code != 0 => *code,
                    _ => 1,
                };
                ExploreOutcome::Failed { exit_code, error }
            }
        }
    }

    /// The exit code this outcome sets, if any
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExploreOutcome::Success | ExploreOutcome::Signaled(_) => None,
            ExploreOutcome::Exited(code) => Some(*code),
            ExploreOutcome::Failed { exit_code, .. } => Some(*exit_code),
        }
    }

    /// Resolve the outcome at the process boundary: signals become errors,
    /// everything else becomes an exit status.
    pub fn into_exit_status(self) -> NpkgResult<ExitStatus> {
        match self {
            ExploreOutcome::Success => Ok(ExitStatus::Unchanged),
            ExploreOutcome::Exited(code) => Ok(ExitStatus::Code(code)),
            ExploreOutcome::Failed { exit_code, .. } => Ok(ExitStatus::Code(exit_code)),
            ExploreOutcome::Signaled(error) => Err(NpkgError::Script(error)),
        }
    }
}
