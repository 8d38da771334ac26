use std::path::{Path, PathBuf};

use crate::case::{self, CaseMode};
use crate::error::{NamingError, Result};
use crate::template;

/// Split `file_path` relative to `base_dir` into its segment array.
///
/// The extension is stripped from the final component. Segments are returned
/// in root-to-leaf order and are expected to already be identifier-safe;
/// no sanitization happens here.
pub fn segments(file_path: &Path, base_dir: &Path) -> Result<Vec<String>> {
    let relative = file_path
        .strip_prefix(base_dir)
        .map_err(|_| NamingError::OutsideBaseDir {
            file: file_path.to_path_buf(),
            base: base_dir.to_path_buf(),
        })?;

    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        return Err(NamingError::EmptySegments(file_path.to_path_buf()));
    }

    if let Some(last) = segments.last_mut() {
        let stem = Path::new(last.as_str())
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        if let Some(stem) = stem {
            *last = stem;
        }
    }

    Ok(segments)
}

/// Derive the constant identifier for one input file.
pub fn constant_name(
    file_path: &Path,
    base_dir: &Path,
    name_template: &str,
    mode: CaseMode,
) -> Result<String> {
    let segments = segments(file_path, base_dir)?;
    let expanded = template::expand(&segments, name_template, "_");
    Ok(case::format(&expanded, mode))
}

/// Derive the output bucket location for one input file.
///
/// Literal template text (including a trailing extension) passes through
/// verbatim; no case formatting is applied. A relative result is resolved
/// against `working_dir`.
pub fn output_path(
    file_path: &Path,
    base_dir: &Path,
    output_template: &str,
    working_dir: &Path,
) -> Result<PathBuf> {
    let segments = segments(file_path, base_dir)?;
    let expanded = template::expand(&segments, output_template, "/");
    let expanded = Path::new(&expanded);
    if expanded.is_absolute() {
        Ok(expanded.to_path_buf())
    } else {
        Ok(working_dir.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "src/assets/icons";

    #[test]
    fn segments_strip_base_dir_and_extension() {
        let segs = segments(Path::new("src/assets/icons/folder/icon1.svg"), Path::new(BASE)).unwrap();
        assert_eq!(segs, vec!["folder".to_string(), "icon1".to_string()]);
    }

    #[test]
    fn segments_keep_inner_dots() {
        let segs = segments(Path::new("src/assets/icons/arrow.left.svg"), Path::new(BASE)).unwrap();
        assert_eq!(segs, vec!["arrow.left".to_string()]);
    }

    #[test]
    fn file_outside_base_dir_is_an_error() {
        let err = segments(Path::new("other/icon.svg"), Path::new(BASE)).unwrap_err();
        assert!(matches!(err, NamingError::OutsideBaseDir { .. }));
    }

    #[test]
    fn constant_name_applies_template_then_case() {
        let file = Path::new("src/assets/icons/folder/icon1.svg");
        let base = Path::new(BASE);

        let name = constant_name(file, base, "{0}-{1}", CaseMode::Camel).unwrap();
        assert_eq!(name, "folderIcon1");

        let name = constant_name(file, base, "{0}-{1}", CaseMode::Pascal).unwrap();
        assert_eq!(name, "FolderIcon1");

        let name = constant_name(file, base, "{0}-{1}", CaseMode::Snake).unwrap();
        assert_eq!(name, "folder_icon1");

        let name = constant_name(file, base, "{0}-{1}", CaseMode::ScreamingSnake).unwrap();
        assert_eq!(name, "FOLDER_ICON1");

        let name = constant_name(file, base, "{1}-{0}", CaseMode::Camel).unwrap();
        assert_eq!(name, "icon1Folder");
    }

    #[test]
    fn constant_name_without_template_joins_with_underscores() {
        let file = Path::new("src/assets/icons/folder/icon1.svg");
        let name = constant_name(file, Path::new(BASE), "", CaseMode::Raw).unwrap();
        assert_eq!(name, "folder_icon1");
    }

    #[test]
    fn output_path_joins_segments_without_casing() {
        let file = Path::new("src/assets/icons/folder/icon1.svg");
        let out = output_path(file, Path::new(BASE), "output/{0}/{1}.js", Path::new("/work")).unwrap();
        assert_eq!(out, PathBuf::from("/work/output/folder/icon1.js"));
    }

    #[test]
    fn output_path_keeps_literal_template_verbatim() {
        let file = Path::new("src/assets/icons/icon.svg");
        let out = output_path(file, Path::new(BASE), "gen/paths.js", Path::new("/work")).unwrap();
        assert_eq!(out, PathBuf::from("/work/gen/paths.js"));
    }

    #[test]
    fn absolute_template_result_is_not_rejoined() {
        let file = Path::new("src/assets/icons/icon.svg");
        let out = output_path(file, Path::new(BASE), "/abs/{0}.js", Path::new("/work")).unwrap();
        assert_eq!(out, PathBuf::from("/abs/icon.js"));
    }
}
