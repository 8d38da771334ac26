use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SQUARE: &str = r##"<svg><path d="M10 10 H 90 V 90 H 10 Z" fill="#000"/></svg>"##;

fn write_icon(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn iconsmith(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("iconsmith").expect("binary");
    cmd.current_dir(workdir);
    cmd
}

#[test]
fn generates_constants_file_with_default_naming() {
    let temp = tempdir().unwrap();
    write_icon(temp.path(), "icons/icon1.svg", SQUARE);
    write_icon(
        temp.path(),
        "icons/icon2.svg",
        r##"<svg><path d="M20 20 H 80 V 80 H 20 Z" fill="#111"/></svg>"##,
    );

    iconsmith(temp.path())
        .args(["-i", "icons", "-o", "output/paths.js"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("output/paths.js")).unwrap();
    assert!(content.contains("export const icon1 = \"F000 M10 10 H 90 V 90 H 10 Z\";"));
    assert!(content.contains("export const icon2 = \"F111 M20 20 H 80 V 80 H 20 Z\";"));
}

#[test]
fn routes_output_through_path_template() {
    let temp = tempdir().unwrap();
    write_icon(temp.path(), "icons/folder/icon1.svg", SQUARE);

    iconsmith(temp.path())
        .args(["-i", "icons", "-o", "output/{0}/{1}.js", "-t", "{0}-{1}"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("output/folder/icon1.js")).unwrap();
    assert!(content.contains("export const folderIcon1 = \"F000 M10 10 H 90 V 90 H 10 Z\";"));
}

#[test]
fn honors_format_and_quote_flags() {
    let temp = tempdir().unwrap();
    write_icon(temp.path(), "icons/folder/icon1.svg", SQUARE);

    iconsmith(temp.path())
        .args([
            "-i",
            "icons",
            "-o",
            "output/paths.js",
            "-f",
            "SCREAMING_SNAKE_CASE",
            "-q",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("output/paths.js")).unwrap();
    assert!(content.contains("export const FOLDER_ICON1 = 'F000 M10 10 H 90 V 90 H 10 Z';"));
}

#[test]
fn broken_file_is_skipped_but_run_succeeds() {
    let temp = tempdir().unwrap();
    write_icon(temp.path(), "icons/broken.svg", "<svg><path");
    write_icon(temp.path(), "icons/good.svg", SQUARE);

    iconsmith(temp.path())
        .args(["-i", "icons", "-o", "output/paths.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("broken.svg"));

    let content = fs::read_to_string(temp.path().join("output/paths.js")).unwrap();
    assert!(content.contains("export const good = "));
    assert!(!content.contains("broken"));
}

#[test]
fn missing_input_directory_fails() {
    let temp = tempdir().unwrap();

    iconsmith(temp.path())
        .args(["-i", "nowhere", "-o", "output/paths.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn no_svg_files_fails() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("icons")).unwrap();
    fs::write(temp.path().join("icons/readme.txt"), "no icons here").unwrap();

    iconsmith(temp.path())
        .args(["-i", "icons", "-o", "output/paths.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No SVG files"));
}
