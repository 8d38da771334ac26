//! # Iconsmith Naming
//!
//! Derives program identifiers and output locations from icon file paths.
//!
//! A file's path relative to the asset root (extension stripped) becomes an
//! ordered segment array. Templates with `{i}` and `{a,b}` placeholders pick
//! and rearrange segments, with negative indices counting from the end.
//! Constant names additionally go through a case formatter; output locations
//! are joined as paths and left uncased.

mod case;
mod derive;
mod error;
mod template;

pub use case::{format, CaseMode};
pub use derive::{constant_name, output_path, segments};
pub use error::{NamingError, Result};
pub use template::expand;
