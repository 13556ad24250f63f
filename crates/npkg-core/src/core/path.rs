use crate::core::error::{NpkgError, NpkgResult};
use std::path::{Path, PathBuf};

/// Separator conventions used when building package paths as strings.
///
/// Paths are assembled from strings so that a Windows-style root such as
/// `c:\npm\dir` resolves the same way regardless of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    /// Style of the platform npkg was built for
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }

    /// Join `child` onto `base` with a single separator between them
    pub fn join(self, base: &str, child: &str) -> String {
        if base.is_empty() {
            return child.to_string();
        }
        if base.ends_with(|c: char| self.is_separator(c)) {
            format!("{}{}", base, child)
        } else {
            format!("{}{}{}", base, self.separator(), child)
        }
    }

    /// Resolve a package name to a directory strictly below `root`.
    ///
    /// The name is normalized as if it were rooted: `.` segments are dropped
    /// and `..` never climbs above the root. Returns `None` when nothing is
    /// left, i.e. the name would resolve to the root itself.
    pub fn resolve_within(self, root: &str, name: &str) -> Option<String> {
        let mut segments: Vec<&str> = Vec::new();
        for segment in name.split(|c: char| self.is_separator(c)) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                segment => segments.push(segment),
            }
        }

        if segments.is_empty() {
            return None;
        }

        let relative = segments.join(&self.separator().to_string());
        Some(self.join(root, &relative))
    }
}

/// Get the npkg home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\npkg
/// - Linux: ~/.config/npkg
/// - macOS: ~/Library/Application Support/npkg
pub fn npkg_home() -> NpkgResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| NpkgError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("npkg"))
}

/// Get the config file path (`<npkg home>/config.yaml`)
pub fn config_file() -> NpkgResult<PathBuf> {
    Ok(npkg_home()?.join("config.yaml"))
}

/// Get the dependency root for a project (./node_modules)
pub fn node_modules_dir(project_root: &Path) -> PathBuf {
    project_root.join("node_modules")
}

/// Get the global installation prefix
pub fn global_dir() -> NpkgResult<PathBuf> {
    Ok(npkg_home()?.join("global"))
}

/// Get the global dependency root
pub fn global_node_modules_dir() -> NpkgResult<PathBuf> {
    Ok(node_modules_dir(&global_dir()?))
}

/// Find the project root: the nearest ancestor of `start` holding a
/// package.json or a node_modules directory.
///
/// Falls back to `start` itself when no ancestor qualifies.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = Some(start);

    while let Some(dir) = current {
        if dir.join("package.json").is_file() || node_modules_dir(dir).is_dir() {
            return dir.to_path_buf();
        }
        current = dir.parent();
    }

    start.to_path_buf()
}
