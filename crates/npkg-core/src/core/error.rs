use crate::script::ScriptError;
use thiserror::Error;

pub type NpkgResult<T> = Result<T, NpkgError>;

#[derive(Error, Debug)]
pub enum NpkgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Package error: {0}")]
    Package(String),

    /// Bad or missing arguments. Displays the usage line as-is.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Script(#[from] ScriptError),
}
