//! Integration tests for the scan → persist → load path.
//!
//! These tests build small music trees in temporary directories with empty
//! placeholder files; only file names matter to the index.

use std::fs;
use tempfile::TempDir;
use pyindex_core::{load, persist, Index, IndexEntry};
use pyindex_etl::scan;

fn touch(path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn by_basename<'a>(index: &'a Index, name: &str) -> &'a IndexEntry {
    index
        .iter()
        .find(|e| e.basename == name)
        .unwrap_or_else(|| panic!("missing entry for {name}"))
}

/// One music file and one non-music file yields one entry
#[test]
fn test_scan_counts_only_music_files() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("song.mp3"));
    touch(&temp_dir.path().join("notes.txt"));

    let index = scan(temp_dir.path());

    assert_eq!(index.len(), 1);
}

/// Full pipeline: scan a library, write it, read it back unchanged
#[test]
fn test_scan_persist_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let music_dir = temp_dir.path().join("music");
    touch(&music_dir.join("周杰伦-晴天.mp3"));
    touch(&music_dir.join("华语").join("这是pine.FLAC"));
    touch(&music_dir.join("华语").join("cover.jpg"));
    touch(&music_dir.join("English").join("Artist - Title.ogg"));

    let index = scan(&music_dir);
    assert_eq!(index.len(), 3);

    let output = temp_dir.path().join(".cmus").join("pinyin_index.json");
    persist(&index, &output).unwrap();

    let loaded = load(&output).unwrap();
    assert_eq!(loaded, index);

    assert_eq!(
        by_basename(&loaded, "周杰伦-晴天.mp3").pinyin_initials,
        "zjlqt zjl-qt zjl qt"
    );
    assert_eq!(
        by_basename(&loaded, "这是pine.FLAC").pinyin_initials,
        "zspine zspine"
    );
    assert_eq!(
        by_basename(&loaded, "Artist - Title.ogg").pinyin_initials,
        "artist - title artist-title artist title"
    );
}

/// The written file is a plain JSON array with literal Unicode
#[test]
fn test_persisted_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let music_dir = temp_dir.path().join("music");
    touch(&music_dir.join("晴天.wav"));

    let output = temp_dir.path().join("index.json");
    persist(&scan(&music_dir), &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.contains("\"basename\": \"晴天.wav\""));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().unwrap();
    assert_eq!(record.len(), 3);
    assert_eq!(record["filename"], music_dir.join("晴天.wav").to_string_lossy().into_owned());
    assert_eq!(record["pinyin_initials"], "qt qt");
}

/// Scanning a missing directory still produces a writable, empty index
#[test]
fn test_missing_directory_writes_empty_index() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index.json");

    let index = scan(&temp_dir.path().join("nowhere"));
    persist(&index, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

/// Same file name in two albums produces two entries
#[test]
fn test_duplicate_basenames_are_preserved() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("a").join("晴天.mp3"));
    touch(&temp_dir.path().join("b").join("晴天.mp3"));

    let index = scan(temp_dir.path());

    assert_eq!(index.len(), 2);
    assert!(index.iter().all(|e| e.basename == "晴天.mp3"));
    assert_ne!(index.entries()[0].filename, index.entries()[1].filename);
}
