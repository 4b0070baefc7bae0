use ag_core::{ConfigStore, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store that lives for the duration of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::API_BASE_KEY;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get(API_BASE_KEY).await.unwrap(), None);

        store.set(API_BASE_KEY, "https://a.example").await.unwrap();
        store.set(API_BASE_KEY, "https://b.example").await.unwrap();
        assert_eq!(
            store.get(API_BASE_KEY).await.unwrap().as_deref(),
            Some("https://b.example")
        );
    }

    #[tokio::test]
    async fn test_clones_share_values() {
        let store = MemoryStore::with_value("k", "v");
        let other = store.clone();
        other.set("k", "w").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("w"));
    }
}
