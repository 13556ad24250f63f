pub mod error;
pub mod error_help;
pub mod path;

pub use error::{NpkgError, NpkgResult};
pub use error_help::{format_error_with_help, ErrorHelp};
pub use path::PathStyle;
