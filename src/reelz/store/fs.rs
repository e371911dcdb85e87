use super::KeyValueStore;
use crate::error::{ReelzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ReelzError::Io)?;
        }
        Ok(())
    }
}

/// Keys become file names, so anything that could escape the root is refused.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(ReelzError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ReelzError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(ReelzError::Io)?;
        fs::rename(&tmp, &target).map_err(ReelzError::Io)?;

        Ok(())
    }
}
