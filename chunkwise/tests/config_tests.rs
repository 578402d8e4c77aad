//! Configuration loading tests

use chunkwise::{ApiError, Chunker, Config};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config("[chunking]\nmax_size = 4\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.max_size, 4);

    let chunker = Chunker::with_config(config);
    let items: Vec<i32> = (1..=10).collect();
    let lens: Vec<usize> = chunker.split(&items).iter().map(|c| c.len()).collect();
    assert_eq!(lens, vec![3, 3, 4]);
}

#[test]
fn test_load_degenerate_config_file() {
    let file = write_config("[chunking]\nmax_size = 0\n");
    let chunker = Chunker::with_config(Config::from_file(file.path()).unwrap());
    assert!(chunker.split(&[1, 2, 3]).is_empty());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    match Config::from_file(&path) {
        Err(ApiError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("[chunking]\nmax_size = 1.5\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ApiError::Toml(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}
