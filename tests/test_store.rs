use std::fs;
use std::path::PathBuf;

use snake_canvas::store::{HighScoreStore, JsonFileStore, MemoryStore};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("snake_canvas_{}_{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_loads_zero() {
    let store = JsonFileStore::new(temp_path("missing"));
    assert_eq!(store.load(), 0);
}

#[test]
fn malformed_file_loads_zero() {
    let path = temp_path("malformed");
    fs::write(&path, "not json at all").unwrap();
    assert_eq!(JsonFileStore::new(&path).load(), 0);

    fs::write(&path, r#"{"best_score": -40}"#).unwrap();
    assert_eq!(JsonFileStore::new(&path).load(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn saved_score_survives_a_new_store() {
    let path = temp_path("roundtrip");
    let mut store = JsonFileStore::new(&path);
    store.save(120).unwrap();
    assert_eq!(JsonFileStore::new(&path).load(), 120);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"best_score\": 120"));
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_path_reports_an_error() {
    let dir = std::env::temp_dir().join(format!("snake_canvas_no_such_dir_{}", std::process::id()));
    let mut store = JsonFileStore::new(dir.join("save.json"));
    assert!(store.save(10).is_err());
    assert_eq!(store.load(), 0);
}

#[test]
fn memory_store_keeps_last_save() {
    let mut store = MemoryStore::new(30);
    assert_eq!(store.load(), 30);
    store.save(80).unwrap();
    assert_eq!(store.load(), 80);
}
