pub mod runner;
pub mod shell;

pub use runner::{ErrorCode, RunScriptOptions, ScriptError, ScriptOutput, ScriptRunner, StdioMode};
pub use shell::ShellScriptRunner;
