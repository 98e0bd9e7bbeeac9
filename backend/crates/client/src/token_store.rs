//! Token Store
//!
//! Where the client keeps the bearer token between calls. The file store
//! keeps a small JSON object on disk so a token survives restarts, with the
//! token under [`AUTH_TOKEN_KEY`].

use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::error::ClientResult;

/// Key of the bearer token in persistent stores
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Bearer token storage
#[trait_variant::make(TokenStore: Send)]
pub trait LocalTokenStore {
    async fn get(&self) -> ClientResult<Option<String>>;

    async fn set(&self, token: &str) -> ClientResult<()>;

    /// Removing an absent token is not an error
    async fn remove(&self) -> ClientResult<()>;
}

// ============================================================================
// In-memory
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> ClientResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> ClientResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

// ============================================================================
// File-backed
// ============================================================================

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ClientResult<Map<String, Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(entries)?).await?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    async fn get(&self) -> ClientResult<Option<String>> {
        let entries = self.load().await?;
        Ok(entries
            .get(AUTH_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set(&self, token: &str) -> ClientResult<()> {
        let mut entries = self.load().await?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save(&entries).await
    }

    async fn remove(&self) -> ClientResult<()> {
        let mut entries = self.load().await?;
        if entries.remove(AUTH_TOKEN_KEY).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileTokenStore, MemoryTokenStore, PathBuf, TokenStore, Value, AUTH_TOKEN_KEY};

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bookstore-client-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().await.unwrap(), None);

        store.set("abc").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("abc"));

        store.remove().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let path = scratch_file("persist.json");
        let _ = tokio::fs::remove_file(&path).await;

        FileTokenStore::new(&path).set("abc").await.unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get().await.unwrap().as_deref(), Some("abc"));

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[AUTH_TOKEN_KEY], "abc");

        reopened.remove().await.unwrap();
        assert_eq!(reopened.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_keeps_other_keys() {
        let path = scratch_file("other-keys.json");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, r#"{"theme":"dark"}"#).await.unwrap();

        let store = FileTokenStore::new(&path);
        store.set("abc").await.unwrap();
        store.remove().await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["theme"], "dark");
        assert!(json.get(AUTH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let store = FileTokenStore::new(scratch_file("never-written.json"));
        assert_eq!(store.get().await.unwrap(), None);
        store.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let path = scratch_file("corrupt.json");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = FileTokenStore::new(&path).get().await.unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Json(_)));
    }
}
