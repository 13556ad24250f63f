//! Integration tests for the npkg CLI
//!
//! These tests drive the built binary end-to-end.
//! Unit tests for individual functions live in their respective source files.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const USAGE: &str = "npkg explore <pkg> [ -- <command>]";

/// npkg with HOME and the config dir pointed into `home`
fn npkg_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_npkg"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_manifest(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    let manifest = json!({ "name": name, "version": "1.0.0" });
    fs::write(
        dir.join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

/// A project with `node_modules/<package>` installed
fn project_with(package: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let project_root = temp.path().join("project");
    write_manifest(&project_root, "project");
    write_manifest(&project_root.join("node_modules").join(package), package);
    (temp, project_root)
}

#[test]
fn test_explore_without_package_prints_usage() {
    let (temp, project_root) = project_with("pkg");

    let output = npkg_command(temp.path())
        .arg("explore")
        .current_dir(&project_root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(USAGE));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_explore_rejects_traversal() {
    let (temp, project_root) = project_with("pkg");

    for name in [".", "..", "../..", "pkg/..", "pkg/../.."] {
        let output = npkg_command(temp.path())
            .args(["explore", name, "--", "ls"])
            .current_dir(&project_root)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1), "{} should be rejected", name);
        assert!(String::from_utf8_lossy(&output.stderr).contains(USAGE));
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_explore_usage_wins_over_broken_config() {
    let (temp, project_root) = project_with("pkg");
    let config_dir = temp.path().join(".config").join("npkg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "shell: [unterminated").unwrap();

    for args in [&["explore"][..], &["explore", "pkg/.."][..]] {
        let output = npkg_command(temp.path())
            .args(args)
            .current_dir(&project_root)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(USAGE), "{:?}: {}", args, stderr);
        assert!(!stderr.contains("Failed to parse config"));
    }

    // A valid invocation still reports the broken config
    let output = npkg_command(temp.path())
        .args(["explore", "pkg", "--", "ls"])
        .current_dir(&project_root)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}

#[test]
fn test_explore_missing_package() {
    let (temp, project_root) = project_with("pkg");

    let output = npkg_command(temp.path())
        .args(["explore", "missing", "--", "ls"])
        .current_dir(&project_root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("It doesn't look like missing is installed."));
    assert!(stderr.contains("IO error"));
}

#[cfg(unix)]
#[test]
fn test_explore_runs_command_in_package_dir() {
    let (temp, project_root) = project_with("pkg");

    // Run from a subdirectory to exercise project root discovery
    let subdir = project_root.join("src");
    fs::create_dir_all(&subdir).unwrap();

    let output = npkg_command(temp.path())
        .args(["explore", "pkg", "--", "pwd", "-P"])
        .current_dir(&subdir)
        .output()
        .unwrap();

    assert!(output.status.success());
    let expected = project_root
        .join("node_modules")
        .join("pkg")
        .canonicalize()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Path::new(stdout.trim()), expected);
    assert!(!stdout.contains("Exploring"));
}

#[cfg(unix)]
#[test]
fn test_explore_propagates_exit_code() {
    let (temp, project_root) = project_with("pkg");

    let output = npkg_command(temp.path())
        .args(["explore", "pkg", "--", "exit", "7"])
        .current_dir(&project_root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    // Plain nonzero exits are not reported as errors
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[cfg(unix)]
#[test]
fn test_explore_reports_signal() {
    let (temp, project_root) = project_with("pkg");

    let output = npkg_command(temp.path())
        .args(["explore", "pkg", "--", "kill", "-TERM", "$$"])
        .current_dir(&project_root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("command failed"));
    assert!(stderr.contains("SIGTERM"));
}

#[cfg(unix)]
#[test]
fn test_explore_interactive_prints_banner() {
    let (temp, project_root) = project_with("pkg");

    // "Interactive" shell that exits straight away
    let output = npkg_command(temp.path())
        .args(["explore", "pkg"])
        .env("SHELL", "true")
        .current_dir(&project_root)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let package_dir = project_root.join("node_modules").join("pkg");
    assert!(stdout.contains(&format!("Exploring {}", package_dir.display())));
    assert!(stdout.contains("Type 'exit' or ^D when finished"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_explore_global_package() {
    let temp = TempDir::new().unwrap();
    let global_pkg = temp
        .path()
        .join(".config")
        .join("npkg")
        .join("global")
        .join("node_modules")
        .join("gpkg");
    write_manifest(&global_pkg, "gpkg");

    let output = npkg_command(temp.path())
        .args(["explore", "--global", "gpkg", "--", "echo", "$npm_package_name"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "gpkg");
}
