use crate::package::manifest::PackageJson;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// How the child process's stdio is wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the terminal with the child
    #[default]
    Inherit,
    /// Capture stdout and stderr into the [`ScriptOutput`]
    Piped,
}

/// Options for running a package script
#[derive(Debug, Clone)]
pub struct RunScriptOptions {
    /// Manifest of the package the script belongs to
    pub manifest: PackageJson,
    /// Print a `> name@version event` banner before running
    pub banner: bool,
    /// Working directory
    pub path: PathBuf,
    /// Lifecycle event name exposed to the script
    pub event: String,
    /// Command line handed to the script shell
    pub command: String,
    pub stdio: StdioMode,
}

/// Result of a script that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub code: i32,
    pub signal: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

/// The `code` attached to a failed script run.
///
/// Exit failures carry the numeric exit code, spawn failures carry an
/// errno-style name such as `ENOENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Exit(i32),
    Named(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Exit(code) => write!(f, "{}", code),
            ErrorCode::Named(name) => f.write_str(name),
        }
    }
}

/// A script that failed to spawn or did not exit cleanly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ScriptError {
    message: String,
    code: Option<ErrorCode>,
    signal: Option<String>,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            signal: None,
        }
    }

    /// The error for a child that exited nonzero or was killed by a signal
    pub fn command_failed(code: Option<i32>, signal: Option<String>) -> Self {
        Self {
            message: "command failed".to_string(),
            code: code.map(ErrorCode::Exit),
            signal,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    pub fn signal(&self) -> Option<&str> {
        self.signal.as_deref()
    }
}

/// Runs a command on behalf of a package
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, options: RunScriptOptions) -> Result<ScriptOutput, ScriptError>;
}
