// tests/integration/include_dir.rs
use load_all::{LoadAllError, LoaderError, ManifestLoader, StdFileSystem};
use serde_json::{Value, json};

use crate::common::{RecordingLoader, layout};

#[test]
fn sees_dirs() {
    let root = layout(&[("dir1/index.json", ""), ("dir2/index.json", ""), ("dir3/index.json", "")]);
    let loader = RecordingLoader::default();

    let mut included = load_all::include_dir(root.path(), None, &loader).unwrap();
    included.sort();

    let expected: Vec<String> = ["dir1", "dir2", "dir3"]
        .iter()
        .map(|d| format!("loaded {}!", root.path().join(d).display()))
        .collect();
    assert_eq!(included, expected);
}

#[test]
fn applies_modifier() {
    let root = layout(&[("dir1/index.json", ""), ("dir2/index.json", "")]);
    let loader = RecordingLoader::default();

    let included = load_all::include_dir_with(root.path(), None, &loader, |m| {
        Ok(json!({ "filename": m }))
    })
    .unwrap();

    assert_eq!(included.len(), 2);
    assert!(
        included
            .iter()
            .all(|v| v["filename"].as_str().is_some_and(|s| s.starts_with("loaded ")))
    );
}

#[test]
fn skips_files() {
    let root = layout(&[("dir1/index.json", ""), ("file2.js", ""), ("dir3/index.json", "")]);
    let loader = RecordingLoader::default();

    let included = load_all::include_dir(root.path(), Some("plugins"), &loader).unwrap();

    assert_eq!(included.len(), 2);
    let mut seen = loader.seen();
    seen.sort();
    assert_eq!(seen, vec![root.path().join("dir1"), root.path().join("dir3")]);
}

#[test]
fn only_files_gives_empty_sequence() {
    let root = layout(&[("a.js", ""), ("b.js", "")]);
    let loader = RecordingLoader::default();
    assert!(load_all::include_dir(root.path(), None, &loader).unwrap().is_empty());
    assert!(loader.seen().is_empty());
}

#[test]
fn loads_manifests_from_disk() {
    let root = layout(&[
        ("alpha/index.json", r#"{ "name": "alpha" }"#),
        ("beta/index.json", r#"{ "name": "beta" }"#),
    ]);
    let loader = ManifestLoader::<Value, _>::new(StdFileSystem);

    let mut names: Vec<String> = load_all::include_dir_with(root.path(), None, &loader, |m| {
        Ok(m["name"].as_str().unwrap_or_default().to_string())
    })
    .unwrap();
    names.sort();

    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn missing_manifest_fails_the_call() {
    let root = layout(&[("alpha/index.json", "{}"), ("beta/README.md", "")]);
    let loader = ManifestLoader::<Value, _>::new(StdFileSystem);

    let err = load_all::include_dir(root.path(), None, &loader).unwrap_err();
    assert!(matches!(err, LoadAllError::Loader(LoaderError::ManifestMissing { .. })));
}

#[test]
fn unreadable_root_is_a_filesystem_error() {
    let root = layout(&[]);
    let loader = RecordingLoader::default();
    let err = load_all::include_dir(root.path().join("missing"), None, &loader).unwrap_err();
    assert!(matches!(err, LoadAllError::Filesystem(_)));
}
