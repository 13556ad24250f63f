use npkg::config::Config;
use npkg::core::path::{find_project_root, global_node_modules_dir, node_modules_dir};
use npkg::core::{NpkgError, NpkgResult, PathStyle};
use npkg::explore::{validate_invocation, ExitStatus, ExploreCommand, ExploreOutcome, StdTerminal};
use npkg::{JsonManifestReader, ShellScriptRunner};
use std::env;
use std::path::Path;

pub async fn run(
    package: Option<String>,
    command: Vec<String>,
    global: bool,
) -> NpkgResult<ExitStatus> {
    let args = invocation(package, command);
    // Bad arguments are reported before config or the filesystem is touched
    validate_invocation(&args, PathStyle::native())?;

    let config = Config::load()?;

    let dependency_root = if global {
        global_node_modules_dir()?
    } else {
        let current_dir = env::current_dir()?;
        node_modules_dir(&find_project_root(&current_dir))
    };

    let runner = ShellScriptRunner::new(config.script_shell.clone());
    let explore = ExploreCommand::new(
        root_str(&dependency_root)?,
        PathStyle::native(),
        config.shell(),
        &JsonManifestReader,
        &runner,
        &StdTerminal,
    );

    let outcome = explore.run(&args).await?;
    if let ExploreOutcome::Failed { exit_code, error } = &outcome {
        tracing::debug!(exit_code, "explore command failed: {}", error);
    }

    outcome.into_exit_status()
}

fn root_str(dependency_root: &Path) -> NpkgResult<&str> {
    dependency_root.to_str().ok_or_else(|| {
        NpkgError::Path(format!(
            "Dependency root is not valid UTF-8: {}",
            dependency_root.display()
        ))
    })
}

/// Rebuild the positional argument list: package name first, then the
/// command with a leading `--` separator dropped.
fn invocation(package: Option<String>, mut command: Vec<String>) -> Vec<String> {
    if command.first().map(String::as_str) == Some("--") {
        command.remove(0);
    }
    package.into_iter().chain(command).collect()
}
