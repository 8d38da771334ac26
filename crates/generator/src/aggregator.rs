use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use iconsmith_markup::Encoder;
use iconsmith_naming as naming;

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};

/// One rendered output bucket: an absolute destination and its
/// newline-joined declarations. The caller creates directories and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModule {
    pub path: PathBuf,
    pub content: String,
}

/// Runs the generation batch over an ordered file list.
pub struct Generator {
    config: GeneratorConfig,
    encoder: Encoder,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate().map_err(GeneratorError::InvalidConfig)?;
        let encoder = Encoder::new(config.optimizer);
        Ok(Self { config, encoder })
    }

    /// Process `files` strictly in order, grouping declarations into output
    /// buckets created on first use. A file that fails (unreadable, outside
    /// the base directory, unparsable markup) is logged and skipped;
    /// declarations already appended stay.
    pub fn generate(&self, files: &[PathBuf]) -> Vec<GeneratedModule> {
        let mut order: Vec<PathBuf> = Vec::new();
        let mut buckets: HashMap<PathBuf, Vec<String>> = HashMap::new();

        for (index, file) in files.iter().enumerate() {
            match self.process_file(file) {
                Ok((bucket, declaration)) => {
                    buckets
                        .entry(bucket.clone())
                        .or_insert_with(|| {
                            order.push(bucket);
                            Vec::new()
                        })
                        .push(declaration);
                }
                Err(err) => {
                    log::error!("Error processing file {}: {err}", file.display());
                }
            }

            if (index + 1) % 100 == 0 {
                log::info!("Processed files: {}/{}", index + 1, files.len());
            }
        }

        order
            .into_iter()
            .filter_map(|path| {
                let declarations = buckets.remove(&path)?;
                Some(GeneratedModule {
                    path,
                    content: declarations.join("\n"),
                })
            })
            .collect()
    }

    fn process_file(&self, file: &Path) -> Result<(PathBuf, String)> {
        let name = naming::constant_name(
            file,
            &self.config.base_dir,
            &self.config.name_template,
            self.config.case_mode,
        )?;
        let bucket = naming::output_path(
            file,
            &self.config.base_dir,
            &self.config.output_template,
            &self.config.working_dir,
        )?;

        let markup = fs::read_to_string(file)?;
        let output = self.encoder.encode(&markup)?;
        for diagnostic in &output.diagnostics {
            log::warn!("{}: {diagnostic}", file.display());
        }

        let quote = self.config.quote.as_char();
        let declaration = format!("export const {name} = {quote}{}{quote};", output.value);
        Ok((bucket, declaration))
    }
}
