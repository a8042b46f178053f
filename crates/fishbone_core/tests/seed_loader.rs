use fishbone_core::{
    JsonFileLoader, LoadError, SeedLoader, StaticSeedLoader, TreeEngine, FALLBACK_ROOT_NAME,
};
use std::io::Write;

fn write_seed_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("ishikawa.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn json_file_loader_parses_nested_seed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed_file(
        &dir,
        r#"[
            {"data": {"name": "B"}},
            {"data": {"name": "A"}, "children": [{"data": {"name": "Z"}}]}
        ]"#,
    );

    let seed = JsonFileLoader::new(path).fetch_initial_tree().unwrap();

    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].data.name, "B");
    assert_eq!(seed[1].data.name, "A");
    assert_eq!(seed[1].children.len(), 1);
    assert_eq!(seed[1].children[0].data.name, "Z");
}

#[test]
fn missing_name_and_children_default_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed_file(&dir, r#"[{}, {"children": [{}]}]"#);

    let seed = JsonFileLoader::new(path).fetch_initial_tree().unwrap();

    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].data.name, "");
    assert!(seed[0].children.is_empty());
    assert_eq!(seed[1].children.len(), 1);
    assert_eq!(seed[1].children[0].data.name, "");
}

#[test]
fn document_levels_and_keys_are_ignored_and_recomputed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed_file(
        &dir,
        r#"[{"key": "abc", "data": {"name": "Root", "level": 9},
             "children": [{"data": {"name": "Child", "level": 1}}]}]"#,
    );

    let mut engine = TreeEngine::new();
    engine.load(&JsonFileLoader::new(path));

    let roots = engine.nodes();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "Root");
    assert_eq!(roots[0].level, 1);
    assert_eq!(roots[0].children[0].name, "Child");
    assert_eq!(roots[0].children[0].level, 2);
}

#[test]
fn missing_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let err = JsonFileLoader::new(&path).fetch_initial_tree().unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn malformed_document_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed_file(&dir, "not a seed document");

    let err = JsonFileLoader::new(path).fetch_initial_tree().unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn engine_falls_back_when_document_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let loader = JsonFileLoader::new(dir.path().join("absent.json"));

    let mut engine = TreeEngine::new();
    engine.load(&loader);

    assert_eq!(engine.nodes().len(), 1);
    assert_eq!(engine.nodes()[0].name, FALLBACK_ROOT_NAME);
}

#[test]
fn static_loader_round_trips_embedded_seed() {
    let seed = vec![fishbone_core::SeedNode::named("Materials")];
    let loader = StaticSeedLoader::new(seed);

    let fetched = loader.fetch_initial_tree().unwrap();

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].data.name, "Materials");
}
