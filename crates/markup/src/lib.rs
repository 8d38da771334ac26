//! # Iconsmith Markup
//!
//! Turns raw SVG markup into the compact path strings embedded in generated
//! constants.
//!
//! ## Pipeline
//!
//! ```text
//! Raw SVG text
//!     │
//!     ├──> Parse (roxmltree) → owned element tree
//!     │
//!     ├──> Optimizer passes
//!     │    ├─> drop useless <defs>
//!     │    ├─> basic shapes → <path>
//!     │    ├─> canonicalize colors to hex
//!     │    └─> merge adjacent same-style paths
//!     │
//!     └──> Encoder
//!          ├─> validate element kinds (path/group/root/title)
//!          ├─> style tokens: o, O, f, F
//!          └─> space-joined command strings + diagnostics
//! ```
//!
//! The encoder is a pure fold: it returns the encoded value together with a
//! diagnostics list and never logs, so callers own the reporting policy.

mod color;
mod encoder;
mod error;
mod optimize;
mod shapes;
mod tree;

pub use encoder::{encode_tree, Diagnostic, EncodeOutput, Encoder, NO_PATH_SENTINEL};
pub use error::{MarkupError, Result};
pub use optimize::{Optimizer, OptimizerConfig};
pub use tree::{Element, ElementKind};
