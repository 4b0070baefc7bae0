pub mod api;
pub mod error;
pub mod storage;
pub mod text;
pub mod types;
pub mod view;

pub use api::ArticleApi;
pub use error::Error;
pub use storage::{ConfigStore, API_BASE_KEY};
pub use text::{escape_text, normalize_url, parse_count, parse_keywords};
pub use types::{Article, GenerationRequest, GenerationResponse, HealthReport};
pub use view::{Action, Field, Status, ViewBindings};

pub type Result<T> = std::result::Result<T, Error>;

/// Address used when neither the form nor the store provide one.
pub const DEFAULT_API_BASE: &str = "https://frontend-api-production-060a.up.railway.app";
