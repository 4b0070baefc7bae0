use ag_core::{
    normalize_url, parse_count, parse_keywords, Action, ArticleApi, ConfigStore, Field,
    GenerationRequest, Result, Status, ViewBindings, API_BASE_KEY, DEFAULT_API_BASE,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::render;

pub const EXPORT_XML_FILENAME: &str = "theobjective_articulos.xml";
pub const EXPORT_ZIP_FILENAME: &str = "theobjective_export.zip";

/// Drives the article form: reads the inputs, calls the backend and reports the
/// outcome through the view.
///
/// Operations never return an error. Failures end up in the status region plus either
/// the preview (generation, health) or an alert (exports), and the final status is
/// returned to the caller.
pub struct FormController {
    store: Arc<dyn ConfigStore>,
    view: Arc<dyn ViewBindings>,
    api: Arc<dyn ArticleApi>,
}

impl FormController {
    pub fn new(store: Arc<dyn ConfigStore>, view: Arc<dyn ViewBindings>, api: Arc<dyn ArticleApi>) -> Self {
        Self { store, view, api }
    }

    /// Fills the API base input when it is blank or still points at a local address.
    pub async fn initialize(&self) {
        let current = self.view.field(Field::ApiBase);
        let current = current.trim();
        if current.is_empty() || current.contains("localhost") {
            let base = self.load_api_base().await;
            debug!("Using API base {}", base);
            self.view.set_field(Field::ApiBase, &base);
        }
    }

    pub async fn dispatch(&self, action: Action) -> Status {
        debug!("Dispatching {}", action.button_id());
        match action {
            Action::Generate => self.generate_articles().await,
            Action::Export => self.export_xml().await,
        }
    }

    pub async fn generate_articles(&self) -> Status {
        let base = self.persist_api_base().await;
        let request = self.read_request();

        self.view.set_status(Status::GeneratingArticles);
        self.view.set_preview("");
        info!("📝 Requesting {} article(s) from {}", request.article_count, base);

        match self.api.generate_articles(&base, &request).await {
            Ok(articles) => {
                info!("✨ Received {} article(s)", articles.len());
                self.view.set_preview(&render::render_articles(&articles));
                self.finish(Status::Completed)
            }
            Err(e) => {
                debug!("Generation failed: {}", e);
                self.view.set_preview(&render::render_error(&e.to_string()));
                self.finish(Status::Error)
            }
        }
    }

    pub async fn export_xml(&self) -> Status {
        let base = self.persist_api_base().await;
        let request = self.read_request();

        self.view.set_status(Status::GeneratingXml);
        let outcome = match self.api.export_xml(&base, &request).await {
            Ok(payload) => self.view.download(EXPORT_XML_FILENAME, &payload),
            Err(e) => Err(e),
        };
        self.finish_export(outcome, Status::XmlDownloaded)
    }

    pub async fn export_zip(&self) -> Status {
        let base = self.persist_api_base().await;
        let request = self.read_request();

        self.view.set_status(Status::GeneratingZip);
        let outcome = match self.api.export_zip(&base, &request).await {
            Ok(payload) => self.view.download(EXPORT_ZIP_FILENAME, &payload),
            Err(e) => Err(e),
        };
        self.finish_export(outcome, Status::ZipDownloaded)
    }

    pub async fn check_health(&self) -> Status {
        let base = self.persist_api_base().await;

        self.view.set_status(Status::CheckingHealth);
        self.view.set_preview("");
        match self.api.health(&base).await {
            Ok(report) => {
                self.view.set_preview(&render::render_health(&report));
                self.finish(Status::Healthy)
            }
            Err(e) => {
                debug!("Health check failed: {}", e);
                self.view.set_preview(&render::render_error(&e.to_string()));
                self.finish(Status::Error)
            }
        }
    }

    /// Builds the request body from the current form values.
    pub fn read_request(&self) -> GenerationRequest {
        let text = |field: Field| self.view.field(field).trim().to_string();
        let optional = |field: Field| Some(text(field)).filter(|s: &String| !s.is_empty());

        GenerationRequest {
            search_query: text(Field::SearchQuery),
            category: text(Field::Category),
            article_count: parse_count(
                &self.view.field(Field::ArticleCount),
                GenerationRequest::DEFAULT_ARTICLE_COUNT,
            ),
            items_per_article: parse_count(
                &self.view.field(Field::ItemsPerArticle),
                GenerationRequest::DEFAULT_ITEMS_PER_ARTICLE,
            ),
            topic: optional(Field::Topic),
            primary_keyword: optional(Field::PrimaryKeyword),
            secondary_keywords: parse_keywords(&self.view.field(Field::SecondaryKeywords)),
        }
    }

    fn finish_export(&self, outcome: Result<()>, success: Status) -> Status {
        match outcome {
            Ok(()) => self.finish(success),
            Err(e) => {
                debug!("Export failed: {}", e);
                self.view.alert(&e.to_string());
                self.finish(Status::Error)
            }
        }
    }

    fn finish(&self, status: Status) -> Status {
        self.view.set_status(status);
        status
    }

    /// Normalizes the API base input and saves it. Runs at the start of every action.
    async fn persist_api_base(&self) -> String {
        let base = normalize_url(&self.view.field(Field::ApiBase));
        if let Err(e) = self.store.set(API_BASE_KEY, &base).await {
            debug!("Ignoring store write failure: {}", e);
        }
        base
    }

    async fn load_api_base(&self) -> String {
        match self.store.get(API_BASE_KEY).await {
            Ok(Some(saved)) if !saved.trim().is_empty() => saved.trim().to_string(),
            Ok(_) => DEFAULT_API_BASE.to_string(),
            Err(e) => {
                debug!("Ignoring store read failure: {}", e);
                DEFAULT_API_BASE.to_string()
            }
        }
    }
}
