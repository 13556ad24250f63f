use crate::script::runner::{
    ErrorCode, RunScriptOptions, ScriptError, ScriptOutput, ScriptRunner, StdioMode,
};
use async_trait::async_trait;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs commands through the platform script shell (`sh -c` or `cmd /d /s /c`)
/// with the package's `node_modules/.bin` directories on PATH.
#[derive(Debug, Clone, Default)]
pub struct ShellScriptRunner {
    script_shell: Option<String>,
}

impl ShellScriptRunner {
    /// Use `script_shell` instead of the platform default when given
    pub fn new(script_shell: Option<String>) -> Self {
        Self { script_shell }
    }

    fn shell(&self) -> &str {
        match &self.script_shell {
            Some(shell) => shell.as_str(),
            None if cfg!(windows) => "cmd",
            None => "sh",
        }
    }
}

#[async_trait]
impl ScriptRunner for ShellScriptRunner {
    async fn run(&self, options: RunScriptOptions) -> Result<ScriptOutput, ScriptError> {
        let shell = self.shell();

        if options.banner {
            println!("{}", script_banner(&options));
        }

        let mut cmd = Command::new(shell);
        cmd.args(shell_args(shell))
            .arg(&options.command)
            .current_dir(&options.path);

        // Lifecycle environment
        cmd.env("npm_lifecycle_event", &options.event);
        cmd.env("npm_package_json", options.path.join("package.json"));
        if let Some(name) = &options.manifest.name {
            cmd.env("npm_package_name", name);
        }
        if let Some(version) = &options.manifest.version {
            cmd.env("npm_package_version", version);
        }

        match bin_path(&options.path) {
            Ok(path) => {
                cmd.env("PATH", path);
            }
            Err(e) => tracing::debug!("leaving PATH untouched: {}", e),
        }

        tracing::debug!(
            shell,
            command = %options.command,
            cwd = %options.path.display(),
            "spawning script"
        );

        let spawned = match options.stdio {
            StdioMode::Inherit => cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map(|status| (status, String::new(), String::new())),
            StdioMode::Piped => cmd.stdin(Stdio::null()).output().await.map(|output| {
                (
                    output.status,
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                )
            }),
        };

        let (status, stdout, stderr) = spawned.map_err(|e| spawn_error(shell, &e))?;

        match (status.code(), exit_signal(&status)) {
            (Some(0), _) => Ok(ScriptOutput {
                code: 0,
                signal: None,
                stdout,
                stderr,
            }),
            (code, signal) => Err(ScriptError::command_failed(code, signal)),
        }
    }
}

/// `> name@version event` header shown before a script runs
fn script_banner(options: &RunScriptOptions) -> String {
    format!(
        "\n> {} {}\n> {}\n",
        options.manifest.id(),
        options.event,
        options.command
    )
}

/// Flags that make `shell` run a single command string
fn shell_args(shell: &str) -> &'static [&'static str] {
    let file_name = shell
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();

    if file_name == "cmd" || file_name == "cmd.exe" {
        &["/d", "/s", "/c"]
    } else {
        &["-c"]
    }
}

/// PATH with `node_modules/.bin` of `dir` and each of its ancestors in front
fn bin_path(dir: &Path) -> Result<OsString, env::JoinPathsError> {
    let mut entries: Vec<_> = dir
        .ancestors()
        .map(|ancestor| ancestor.join("node_modules").join(".bin"))
        .collect();

    if let Some(existing) = env::var_os("PATH") {
        entries.extend(env::split_paths(&existing));
    }

    env::join_paths(entries)
}

fn spawn_error(shell: &str, error: &io::Error) -> ScriptError {
    ScriptError::new(format!("spawn {}: {}", shell, error))
        .with_code(ErrorCode::Named(errno_name(error)))
}

fn errno_name(error: &io::Error) -> String {
    let name = match error.kind() {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::AlreadyExists => "EEXIST",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::InvalidInput => "EINVAL",
        _ => {
            return error
                .raw_os_error()
                .map(|code| format!("E{}", code))
                .unwrap_or_else(|| "EUNKNOWN".to_string())
        }
    };
    name.to_string()
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(signal_name)
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<String> {
    None
}

#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    let name = match signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        14 => "SIGALRM",
        15 => "SIGTERM",
        _ => return format!("SIG{}", signal),
    };
    name.to_string()
}
