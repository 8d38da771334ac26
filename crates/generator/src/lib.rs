//! # Iconsmith Generator
//!
//! Orchestrates one generation run: for every input file it derives a
//! constant name and an output bucket from the file's path, encodes the
//! file's markup into a compact value, and renders one declaration list per
//! bucket.
//!
//! Ordering is deterministic: declarations appear in processing order and
//! buckets in first-encounter order, so regenerated output diffs cleanly
//! under version control. A failing file is logged and skipped; it never
//! aborts the batch or rolls back declarations appended by earlier files.

mod aggregator;
mod config;
mod error;

pub use aggregator::{GeneratedModule, Generator};
pub use config::{GeneratorConfig, QuoteStyle};
pub use error::{GeneratorError, Result};
