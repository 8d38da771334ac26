use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Scanner for finding SVG files under the asset root.
pub struct SvgScanner {
    root: PathBuf,
}

impl SvgScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Recursively collect `*.svg` files in lexicographic order so batch
    /// processing (and therefore generated output) is deterministic.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for result in WalkDir::new(&self.root).sort_by_file_name() {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.path();
                    if Self::is_svg(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::info!("Found {} SVG files", files.len());
        files
    }

    fn is_svg(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}
