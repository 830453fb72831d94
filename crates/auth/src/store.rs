//! API key store
//!
//! Holds the set of keys allowed to submit telemetry. Authentication runs
//! before validation, once per request, so lookups must be cheap and safe
//! for unsynchronized concurrent reads.
//!
//! # Security
//!
//! Key comparison is constant-time over the whole store to prevent timing
//! attacks: every stored key is compared on every lookup, regardless of
//! where (or whether) a match occurs.

use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use subtle::ConstantTimeEq;

use crate::error::{AuthError, Result};

/// Minimum accepted key length, matching the config-level rule
pub const MIN_KEY_LENGTH: usize = 10;

/// Thread-safe API key store
///
/// # Example
///
/// ```
/// use sift_auth::ApiKeyStore;
///
/// let store = ApiKeyStore::new();
/// store.insert("supersecretkey");
///
/// assert!(store.validate("supersecretkey"));
/// assert!(!store.validate("wrong"));
/// ```
#[derive(Debug, Default)]
pub struct ApiKeyStore {
    /// Keys protected by RwLock for concurrent access
    keys: RwLock<Vec<String>>,
}

impl ApiKeyStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an iterator of keys
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: RwLock::new(keys.into_iter().map(Into::into).collect()),
        }
    }

    /// Load API keys from a file
    ///
    /// File format:
    /// ```text
    /// # comments start with #
    /// supersecretkey-alpha
    /// supersecretkey-beta
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, a key is shorter than
    /// [`MIN_KEY_LENGTH`], or a key appears twice.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AuthError::io_error(path.display().to_string(), e))?;

        let store = Self::new();
        store.merge_contents(&contents)?;
        Ok(store)
    }

    /// Merge keys from file contents into this store
    ///
    /// Used both by [`from_file`](Self::from_file) and by the server when
    /// combining inline config keys with a keys file.
    pub fn merge_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AuthError::io_error(path.display().to_string(), e))?;
        self.merge_contents(&contents)
    }

    fn merge_contents(&self, contents: &str) -> Result<()> {
        let mut keys = self.keys.write();
        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.len() < MIN_KEY_LENGTH {
                return Err(AuthError::ShortKey {
                    line: i + 1,
                    length: line.len(),
                    minimum: MIN_KEY_LENGTH,
                });
            }
            if keys.iter().any(|k| k == line) {
                return Err(AuthError::DuplicateKey { line: i + 1 });
            }
            keys.push(line.to_string());
        }
        Ok(())
    }

    /// Add a single key
    pub fn insert(&self, key: impl Into<String>) {
        self.keys.write().push(key.into());
    }

    /// Validate a presented key in constant time
    ///
    /// Compares against every stored key so the timing does not reveal
    /// which key (if any) matched.
    pub fn validate(&self, presented: &str) -> bool {
        let keys = self.keys.read();
        let mut matched = 0u8;
        for key in keys.iter() {
            matched |= key.as_bytes().ct_eq(presented.as_bytes()).unwrap_u8();
        }
        matched == 1
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}
