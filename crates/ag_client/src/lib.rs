use ag_core::{ArticleApi, Article, Error, GenerationRequest, GenerationResponse, HealthReport, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

pub const GENERATE_PATH: &str = "/generar-articulos";
pub const EXPORT_XML_PATH: &str = "/export/wp-all-import/file";
pub const EXPORT_ZIP_PATH: &str = "/export/wp-all-import/zip";
pub const HEALTH_PATH: &str = "/health";

/// `ArticleApi` over HTTP. No timeout and no retry is applied to any call.
#[derive(Clone, Default)]
pub struct HttpArticleApi {
    client: Client,
}

impl fmt::Debug for HttpArticleApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpArticleApi").finish()
    }
}

impl HttpArticleApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn post_json(&self, base: &str, path: &str, request: &GenerationRequest) -> Result<Response> {
        let url = endpoint(base, path)?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        ensure_success(response).await
    }

    async fn post_bytes(&self, base: &str, path: &str, request: &GenerationRequest) -> Result<Vec<u8>> {
        let response = self.post_json(base, path, request).await?;
        let bytes = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", bytes.len(), path);
        Ok(bytes.to_vec())
    }
}

/// Joins the normalized base and an endpoint path, rejecting unusable addresses early.
pub fn endpoint(base: &str, path: &str) -> Result<Url> {
    let raw = format!("{}{}", base, path);
    Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
}

/// Turns a non-2xx response into `Error::Http` carrying the body text.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(Error::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let raw = response.bytes().await?;
    Ok(serde_json::from_slice(&raw)?)
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn generate_articles(&self, base: &str, request: &GenerationRequest) -> Result<Vec<Article>> {
        let response = self.post_json(base, GENERATE_PATH, request).await?;
        let body: GenerationResponse = decode(response).await?;
        tracing::debug!("Backend returned {} articles", body.articles.len());
        Ok(body.articles)
    }

    async fn export_xml(&self, base: &str, request: &GenerationRequest) -> Result<Vec<u8>> {
        self.post_bytes(base, EXPORT_XML_PATH, request).await
    }

    async fn export_zip(&self, base: &str, request: &GenerationRequest) -> Result<Vec<u8>> {
        self.post_bytes(base, EXPORT_ZIP_PATH, request).await
    }

    async fn health(&self, base: &str) -> Result<HealthReport> {
        let url = endpoint(base, HEALTH_PATH)?;
        tracing::debug!("GET {}", url);
        let response = ensure_success(self.client.get(url).send().await?).await?;
        decode(response).await
    }
}
