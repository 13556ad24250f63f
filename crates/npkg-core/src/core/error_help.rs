use crate::core::NpkgError;

/// Provides helpful suggestions for common errors
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for NpkgError {
    fn help(&self) -> Option<String> {
        match self {
            NpkgError::Usage(_) => Some(
                "💡 Suggestion: Pass the name of an installed dependency, e.g. 'npkg explore lodash -- ls'"
                    .to_string(),
            ),
            NpkgError::Package(msg) => {
                if msg.contains("Failed to parse") {
                    Some(
                        "💡 Suggestion: The package.json is not valid JSON. Reinstall the package with 'npm install'"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            NpkgError::Path(msg) => {
                if msg.contains("Could not determine") {
                    Some(
                        "💡 Suggestion: Check your system environment variables (HOME, APPDATA, etc.)"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            NpkgError::Config(msg) => {
                if msg.contains("Failed to parse config") {
                    Some(
                        "💡 Suggestion: Check the YAML syntax of your npkg config file (shell, script_shell)"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            NpkgError::Io(e) => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    Some(
                        "💡 Suggestion: Check file permissions, or try running with appropriate permissions"
                            .to_string(),
                    )
                } else if e.kind() == std::io::ErrorKind::NotFound {
                    Some(
                        "💡 Suggestion: The package may not be installed. Run 'npm install' and try again"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            NpkgError::Script(e) => e.signal().map(|signal| {
                format!(
                    "💡 Suggestion: The command was terminated by {}. Check whether it was interrupted or ran out of resources",
                    signal
                )
            }),
            _ => None,
        }
    }
}

/// Format an error with helpful suggestions
pub fn format_error_with_help(error: &NpkgError) -> String {
    let mut output = format!("❌ Error: {}", error);

    if let Some(help) = error.help() {
        output.push_str("\n\n");
        output.push_str(&help);
    }

    output
}
