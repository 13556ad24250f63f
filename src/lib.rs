//! npkg: step into an installed Node package
//!
//! This crate provides the main npkg library, re-exporting core functionality
//! from `npkg-core` and adding configuration and the `explore` command.

pub use npkg_core::{format_error_with_help, ErrorHelp, NpkgError, NpkgResult};
pub use npkg_core::{JsonManifestReader, ManifestReader, PackageJson};
pub use npkg_core::{ScriptRunner, ShellScriptRunner};

/// Core module re-exported from `npkg-core`.
pub mod core {
    pub use npkg_core::core::*;
}

/// Package manifests (re-exported from npkg-core).
pub mod package {
    pub use npkg_core::package::*;
}

/// Script execution (re-exported from npkg-core).
pub mod script {
    pub use npkg_core::script::*;
}

/// Configuration management.
pub mod config;

/// The explore command.
pub mod explore;
