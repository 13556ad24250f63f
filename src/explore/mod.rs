//! `npkg explore`: open a shell in an installed package, or run a command there.

pub mod outcome;
pub mod terminal;

pub use outcome::{ExitStatus, ExploreOutcome};
pub use terminal::{StdTerminal, Terminal};

use crate::core::{NpkgError, NpkgResult, PathStyle};
use crate::package::manifest::ManifestReader;
use crate::script::{RunScriptOptions, ScriptRunner, StdioMode};
use std::path::{Path, PathBuf};

pub const EXPLORE_USAGE: &str = "npkg explore <pkg> [ -- <command>]";

/// Lifecycle event name the command runs under
pub const EXPLORE_EVENT: &str = "_explore";

fn usage() -> NpkgError {
    NpkgError::Usage(EXPLORE_USAGE.to_string())
}

/// The package name of an invocation.
///
/// Fails with the usage error when there are no arguments or the name
/// resolves to the dependency root itself (`.`, `..`, `foo/../..`). The
/// check does not depend on where the root is.
pub fn validate_invocation(args: &[String], style: PathStyle) -> NpkgResult<&str> {
    let name = args.first().ok_or_else(usage)?;
    style.resolve_within("", name).ok_or_else(usage)?;
    Ok(name.as_str())
}

/// Runs one explore invocation against a dependency root.
///
/// Collaborators are borrowed so tests can substitute in-memory fakes.
pub struct ExploreCommand<'a> {
    dependency_root: String,
    style: PathStyle,
    shell: String,
    manifests: &'a dyn ManifestReader,
    runner: &'a dyn ScriptRunner,
    terminal: &'a dyn Terminal,
}

impl<'a> ExploreCommand<'a> {
    pub fn new(
        dependency_root: impl Into<String>,
        style: PathStyle,
        shell: impl Into<String>,
        manifests: &'a dyn ManifestReader,
        runner: &'a dyn ScriptRunner,
        terminal: &'a dyn Terminal,
    ) -> Self {
        Self {
            dependency_root: dependency_root.into(),
            style,
            shell: shell.into(),
            manifests,
            runner,
            terminal,
        }
    }

    /// Directory of package `name`, which must lie strictly inside the
    /// dependency root
    pub fn resolve(&self, name: &str) -> NpkgResult<String> {
        self.style
            .resolve_within(&self.dependency_root, name)
            .ok_or_else(usage)
    }

    /// Explore the package named by `args[0]`.
    ///
    /// The remaining arguments are joined into the command to run; without
    /// them the configured shell is started and a banner is printed first.
    pub async fn run(&self, args: &[String]) -> NpkgResult<ExploreOutcome> {
        let name = validate_invocation(args, self.style)?;
        let command_args = &args[1..];
        let path = self.resolve(name)?;
        tracing::debug!(package = %name, path = %path, "exploring package");

        let manifest_path = self.style.join(&path, "package.json");
        let mut manifest = self.manifests.read(Path::new(&manifest_path)).map_err(|e| {
            self.terminal.error(
                "explore",
                &format!("It doesn't look like {} is installed.", name),
            );
            e
        })?;

        let command = match command_args.join(" ").trim() {
            "" => self.shell.clone(),
            command => command.to_string(),
        };
        manifest
            .scripts
            .insert(EXPLORE_EVENT.to_string(), command.clone());

        if command_args.is_empty() {
            self.terminal.output(&format!(
                "\nExploring {}\nType 'exit' or ^D when finished\n",
                path
            ));
        }

        let result = self
            .runner
            .run(RunScriptOptions {
                manifest,
                banner: false,
                path: PathBuf::from(&path),
                event: EXPLORE_EVENT.to_string(),
                command,
                stdio: StdioMode::Inherit,
            })
            .await;

        Ok(ExploreOutcome::from_run(result))
    }
}
