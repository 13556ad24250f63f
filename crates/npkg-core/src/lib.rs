// Core functionality
pub mod core;

// Package manifest
pub mod package;

// Script execution
pub mod script;

// Re-export commonly used types
pub use core::{format_error_with_help, ErrorHelp, NpkgError, NpkgResult, PathStyle};
pub use package::manifest::{JsonManifestReader, ManifestReader, PackageJson};
pub use script::{
    ErrorCode, RunScriptOptions, ScriptError, ScriptOutput, ScriptRunner, ShellScriptRunner,
    StdioMode,
};
