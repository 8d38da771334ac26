use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Naming error: {0}")]
    Naming(#[from] iconsmith_naming::NamingError),

    #[error("Markup error: {0}")]
    Markup(#[from] iconsmith_markup::MarkupError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
