//! Tests for the API key store

use std::io::Write;

use crate::{ApiKeyStore, AuthError};

#[test]
fn test_empty_store_rejects_everything() {
    let store = ApiKeyStore::new();
    assert!(store.is_empty());
    assert!(!store.validate("anything"));
    assert!(!store.validate(""));
}

#[test]
fn test_insert_and_validate() {
    let store = ApiKeyStore::new();
    store.insert("supersecretkey");

    assert!(store.validate("supersecretkey"));
    assert!(!store.validate("supersecretke"));
    assert!(!store.validate("supersecretkeyy"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_from_keys() {
    let store = ApiKeyStore::from_keys(["alpha-key-1", "beta-key-22"]);
    assert!(store.validate("alpha-key-1"));
    assert!(store.validate("beta-key-22"));
    assert!(!store.validate("gamma-key-3"));
}

#[test]
fn test_from_file_skips_comments_and_blanks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# fleet keys").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "supersecretkey-alpha").unwrap();
    writeln!(file, "  supersecretkey-beta  ").unwrap();
    file.flush().unwrap();

    let store = ApiKeyStore::from_file(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.validate("supersecretkey-alpha"));
    assert!(store.validate("supersecretkey-beta"));
}

#[test]
fn test_from_file_rejects_short_key() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "supersecretkey-alpha").unwrap();
    writeln!(file, "short").unwrap();
    file.flush().unwrap();

    let err = ApiKeyStore::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        AuthError::ShortKey {
            line: 2,
            length: 5,
            ..
        }
    ));
}

#[test]
fn test_from_file_rejects_duplicate_key() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "supersecretkey-alpha").unwrap();
    writeln!(file, "supersecretkey-alpha").unwrap();
    file.flush().unwrap();

    let err = ApiKeyStore::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AuthError::DuplicateKey { line: 2 }));
}

#[test]
fn test_from_file_missing_path() {
    let err = ApiKeyStore::from_file("/nonexistent/keys.conf").unwrap_err();
    assert!(matches!(err, AuthError::IoError { .. }));
}

#[test]
fn test_merge_file_extends_inline_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "file-key-00001").unwrap();
    file.flush().unwrap();

    let store = ApiKeyStore::from_keys(["inline-key-0001"]);
    store.merge_file(file.path()).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.validate("inline-key-0001"));
    assert!(store.validate("file-key-00001"));
}
