use ag_core::{ConfigStore, Error, Result};
use std::path::PathBuf;
use std::sync::Arc;

pub mod backends;

pub use backends::*;

/// Default location of the JSON store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "ag_settings.json";

/// Builds a store from its CLI name (`file` or `memory`).
pub fn create_store(kind: &str, path: Option<PathBuf>) -> Result<Arc<dyn ConfigStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "file" => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
            Ok(Arc::new(FileStore::new(path)))
        }
        other => Err(Error::Storage(format!(
            "Unknown store type: {} (expected file or memory)",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
    pub use ag_core::ConfigStore;
}
