use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkupError>;

#[derive(Error, Debug)]
pub enum MarkupError {
    /// Input markup could not be parsed at all. Distinct from the no-path
    /// sentinel: an unparsable file is skipped, not emitted.
    #[error("Markup parse error: {0}")]
    Parse(#[from] roxmltree::Error),
}
