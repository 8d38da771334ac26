use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use iconsmith_markup::OptimizerConfig;
use iconsmith_naming::CaseMode;

/// Quote character wrapping generated constant values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub const fn as_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

/// Everything one generation run needs, passed explicitly so independent
/// runs (including parallel test runs) cannot interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory the input files live under; segment arrays are relative
    /// to it.
    pub base_dir: PathBuf,

    /// Directory relative output locations resolve against.
    pub working_dir: PathBuf,

    /// Output location template; also accepts a plain path for a single
    /// shared bucket.
    pub output_template: String,

    /// Constant name template; empty joins all segments with `_`.
    pub name_template: String,

    /// Case family for constant names.
    pub case_mode: CaseMode,

    /// Quote character in rendered declarations.
    pub quote: QuoteStyle,

    /// Normalization passes applied before encoding.
    pub optimizer: OptimizerConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("src/assets/icons"),
            working_dir: PathBuf::from("."),
            output_template: "src/components/Icon/paths.js".to_string(),
            name_template: String::new(),
            case_mode: CaseMode::default(),
            quote: QuoteStyle::default(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.output_template.is_empty() {
            return Err("output_template must not be empty".to_string());
        }
        if self.base_dir.as_os_str().is_empty() {
            return Err("base_dir must not be empty".to_string());
        }
        Ok(())
    }
}
