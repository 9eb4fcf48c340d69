// tests/integration/export_dir.rs
use std::path::Path;

use load_all::{
    Exports, HookError, LoadAllError, LoaderError, ManifestLoader, MapAggregator, MemoryFileSystem,
    RecordingProgressSink, ScanOptions, StdFileSystem,
};
use serde_json::{Value, json};

use crate::common::{RecordingLoader, layout};

type Module = Exports<Value>;

fn three_modules() -> tempfile::TempDir {
    layout(&[
        ("dir1/index.json", r#"{ "dir1": "loaded!" }"#),
        ("dir2/index.json", r#"{ "dir2": "loaded!" }"#),
        ("dir3/index.json", r#"{ "dir3": "loaded!" }"#),
    ])
}

#[test]
fn sees_dirs() {
    let root = three_modules();
    let loader = ManifestLoader::<Module, _>::new(StdFileSystem);

    let exports = load_all::export_dir(root.path(), None, &loader).unwrap();

    assert_eq!(exports.len(), 3);
    for key in ["dir1", "dir2", "dir3"] {
        assert_eq!(exports[key], json!("loaded!"));
    }
}

#[test]
fn modifier_reshapes_values() {
    let root = three_modules();
    let loader = ManifestLoader::<Module, _>::new(StdFileSystem);

    let exports = load_all::export_dir_with(root.path(), None, &loader, |m, _| {
        Ok(m.into_iter().map(|(k, v)| (k, json!({ "filename": v }))).collect::<Vec<_>>())
    })
    .unwrap();

    assert_eq!(exports["dir2"], json!({ "filename": "loaded!" }));
    assert_eq!(exports.len(), 3);
}

#[test]
fn is_passed_previous() {
    let root = layout(&[
        ("dir1/index.json", r#"{ "dir1": "loaded!", "sameKey": 1 }"#),
        ("dir2/index.json", r#"{ "dir2": "loaded!", "sameKey": 1 }"#),
        ("dir3/index.json", r#"{ "dir3": "loaded!", "sameKey": 1 }"#),
    ]);
    let loader = ManifestLoader::<Module, _>::new(StdFileSystem);

    let exports = load_all::export_dir_with(root.path(), None, &loader, |mut m, prev: &Module| {
        let previous = prev.get("sameKey").and_then(Value::as_i64).unwrap_or(0);
        let current = m.get("sameKey").and_then(Value::as_i64).unwrap_or(0);
        m.insert("sameKey".to_string(), json!(current + previous));
        Ok(m)
    })
    .unwrap();

    assert_eq!(exports["sameKey"], json!(3));
    assert_eq!(exports.len(), 4);
}

#[test]
fn skips_files() {
    let root = layout(&[
        ("dir1/index.json", r#"{ "dir1": "loaded!" }"#),
        ("file2.js", r#"{ "dir2": "loaded!" }"#),
        ("dir3/index.json", r#"{ "dir3": "loaded!" }"#),
    ]);
    let loader = ManifestLoader::<Module, _>::new(StdFileSystem);

    let exports = load_all::export_dir(root.path(), None, &loader).unwrap();

    let mut keys: Vec<_> = exports.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["dir1", "dir3"]);
}

#[test]
fn only_files_gives_empty_mapping() {
    let root = layout(&[("a.json", "{}")]);
    let loader = ManifestLoader::<Module, _>::new(StdFileSystem);
    assert!(load_all::export_dir(root.path(), None, &loader).unwrap().is_empty());
}

#[test]
fn failure_on_second_directory_stops_before_third() {
    let fs = MemoryFileSystem::from_layout(
        "/srv/modules",
        [("dir1/index.json", ""), ("dir2/index.json", ""), ("dir3/index.json", "")],
    )
    .unwrap();
    let loader = RecordingLoader::failing_on(2);
    let progress = RecordingProgressSink::new();

    let options = ScanOptions::with_kind(Some("modules"));
    let err = MapAggregator::with_progress(&fs, &loader, &progress)
        .export_dir_with(Path::new("/srv/modules"), &options, |m, _| Ok([(m.clone(), m)]))
        .unwrap_err();

    assert!(matches!(err, LoadAllError::Loader(LoaderError::Other { .. })));
    assert_eq!(loader.seen().len(), 2);
    assert_eq!(progress.lines(), vec!["Adding modules from dir1", "Adding modules from dir2"]);
}

#[test]
fn modifier_failure_on_second_directory_leaves_third_unloaded() {
    let root = Path::new("/srv/modules");
    let fs = MemoryFileSystem::from_layout(
        root,
        [("dir1/index.json", ""), ("dir2/index.json", ""), ("dir3/index.json", "")],
    )
    .unwrap();
    let loader = RecordingLoader::default();

    let err = MapAggregator::new(&fs, &loader)
        .export_dir_with(root, &ScanOptions::default(), |m, prev: &Exports<String>| {
            if !prev.is_empty() {
                return Err(HookError::other(format!("cannot merge {m}")).into());
            }
            Ok([(m.clone(), m)])
        })
        .unwrap_err();

    assert!(matches!(err, LoadAllError::Hook(HookError::Other(_))));
    assert_eq!(loader.seen(), vec![root.join("dir1"), root.join("dir2")]);
}
