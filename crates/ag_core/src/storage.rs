use async_trait::async_trait;
use crate::Result;

/// Key under which the API base address is persisted.
pub const API_BASE_KEY: &str = "api_base";

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read a stored value, `None` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
