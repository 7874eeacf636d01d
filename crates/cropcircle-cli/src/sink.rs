use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Directory-backed content store for exported avatars.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write `bytes` under a fresh key for the owner and return the stored path.
    pub fn put_avatar(&self, user_type: &str, user_id: &str, bytes: &[u8]) -> Result<PathBuf> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("System clock is before the Unix epoch")?
            .as_millis();
        let path = self.root.join(avatar_key(user_type, user_id, millis));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Stored avatar");
        Ok(path)
    }

    /// Delete a previously stored avatar. Paths outside the store are refused.
    ///
    /// Both sides are canonicalized first, so `..` and symlinks cannot escape.
    pub fn remove(&self, path: &Path) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("Failed to resolve store {}", self.root.display()))?;
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        };
        let target = target
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", target.display()))?;
        if !target.starts_with(&root) {
            anyhow::bail!("{} is not inside {}", target.display(), root.display());
        }
        std::fs::remove_file(&target)
            .with_context(|| format!("Failed to remove {}", target.display()))?;
        Ok(())
    }
}

/// Storage key: `{user_type}s/{user_id}-{millis}.jpg`.
fn avatar_key(user_type: &str, user_id: &str, millis: u128) -> String {
    format!("{user_type}s/{user_id}-{millis}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_key_format() {
        assert_eq!(avatar_key("parent", "42", 1_700_000_000_123), "parents/42-1700000000123.jpg");
    }

    #[test]
    fn test_put_and_replace() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        let first = store.put_avatar("child", "7", b"one").unwrap();
        assert!(first.starts_with(dir.path().join("childs")));
        assert_eq!(std::fs::read(&first).unwrap(), b"one");

        let relative = first.strip_prefix(dir.path()).unwrap().to_path_buf();
        store.remove(&relative).unwrap();
        assert!(!first.exists());
    }

    #[test]
    fn test_remove_outside_store_refused() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::NamedTempFile::new().unwrap();
        let root = dir.path().join("avatars");
        std::fs::create_dir_all(root.join("parents")).unwrap();
        let store = FileStore::new(root);
        assert!(store.remove(other.path()).is_err());
        assert!(other.path().exists());

        let victim = dir.path().join("victim.txt");
        std::fs::write(&victim, b"keep").unwrap();
        assert!(store.remove(Path::new("../victim.txt")).is_err());
        assert!(store.remove(Path::new("parents/../../victim.txt")).is_err());
        assert!(store.remove(&dir.path().join("avatars/../victim.txt")).is_err());
        assert!(victim.exists());
    }

    #[test]
    fn test_remove_missing_store_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent"));
        assert!(store.remove(Path::new("parents/1-1.jpg")).is_err());
    }
}
