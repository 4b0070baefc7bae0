use async_trait::async_trait;
use crate::types::{Article, GenerationRequest, HealthReport};
use crate::Result;

/// Backend collaborator of the form controller.
///
/// Every call receives the already normalized API base so implementations never cache
/// an address between actions.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// `POST {base}/generar-articulos`
    async fn generate_articles(&self, base: &str, request: &GenerationRequest) -> Result<Vec<Article>>;

    /// `POST {base}/export/wp-all-import/file`, returning the raw file payload
    async fn export_xml(&self, base: &str, request: &GenerationRequest) -> Result<Vec<u8>>;

    /// `POST {base}/export/wp-all-import/zip`, returning the raw archive
    async fn export_zip(&self, base: &str, request: &GenerationRequest) -> Result<Vec<u8>>;

    /// `GET {base}/health`
    async fn health(&self, base: &str) -> Result<HealthReport>;
}
