use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NamingError>;

#[derive(Error, Debug)]
pub enum NamingError {
    /// File does not live under the configured asset root.
    #[error("File {file} is outside base directory {base}")]
    OutsideBaseDir { file: PathBuf, base: PathBuf },

    /// Relative path produced no segments (e.g. base dir passed as file).
    #[error("File {0} yields an empty segment array")]
    EmptySegments(PathBuf),
}
