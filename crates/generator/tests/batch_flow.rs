use std::fs;
use std::path::PathBuf;

use iconsmith_generator::{Generator, GeneratorConfig};
use tempfile::TempDir;

const SQUARE: &str = r##"<svg><path d="M10 10 H 90 V 90 H 10 Z" fill="#000"/></svg>"##;

fn setup(files: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let temp = TempDir::new().unwrap();
    let mut paths = Vec::new();
    for rel in files {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, SQUARE).unwrap();
        paths.push(path);
    }
    (temp, paths)
}

#[test]
fn variant_directories_group_into_shared_buckets() {
    let (temp, files) = setup(&[
        "icons/device/battery_alert/materialicons/24px.svg",
        "icons/device/battery_alert/materialiconsoutlined/24px.svg",
        "icons/device/battery_alert/materialiconsround/20px.svg",
        "icons/device/battery_alert/materialiconsround/24px.svg",
        "icons/device/battery_charging_20/materialicons/24px.svg",
    ]);

    let generator = Generator::new(GeneratorConfig {
        base_dir: temp.path().join("icons"),
        working_dir: temp.path().to_path_buf(),
        output_template: "output/{-2,-1}/{0}.js".to_string(),
        name_template: "{1,-3}".to_string(),
        ..Default::default()
    })
    .unwrap();

    let modules = generator.generate(&files);

    let bucket_paths: Vec<PathBuf> = modules.iter().map(|m| m.path.clone()).collect();
    assert_eq!(
        bucket_paths,
        vec![
            temp.path().join("output/materialicons/24px/device.js"),
            temp.path().join("output/materialiconsoutlined/24px/device.js"),
            temp.path().join("output/materialiconsround/20px/device.js"),
            temp.path().join("output/materialiconsround/24px/device.js"),
        ]
    );

    // The two materialicons/24px variants share one bucket.
    assert!(modules[0].content.contains("export const batteryAlert = "));
    assert!(modules[0].content.contains("export const batteryCharging20 = "));
    for module in &modules[1..] {
        assert!(module.content.contains("export const batteryAlert = "));
        assert!(!module.content.contains("batteryCharging20"));
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let (temp, files) = setup(&["icons/a/one.svg", "icons/b/two.svg", "icons/b/three.svg"]);

    let generator = Generator::new(GeneratorConfig {
        base_dir: temp.path().join("icons"),
        working_dir: temp.path().to_path_buf(),
        output_template: "output/{0}.js".to_string(),
        ..Default::default()
    })
    .unwrap();

    let first = generator.generate(&files);
    let second = generator.generate(&files);

    assert_eq!(first, second);
}
