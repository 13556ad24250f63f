/// Where explore writes user-facing text
pub trait Terminal {
    /// Plain output on stdout
    fn output(&self, message: &str);

    /// An error line tagged with the command that produced it
    fn error(&self, prefix: &str, message: &str);
}

/// Writes output to stdout and errors through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn output(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, prefix: &str, message: &str) {
        tracing::error!(command = prefix, "{}", message);
    }
}
