use std::fmt;
use crate::Result;

/// Form inputs the controller reads, identified by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ApiBase,
    SearchQuery,
    Category,
    ArticleCount,
    ItemsPerArticle,
    Topic,
    PrimaryKeyword,
    SecondaryKeywords,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::ApiBase,
        Field::SearchQuery,
        Field::Category,
        Field::ArticleCount,
        Field::ItemsPerArticle,
        Field::Topic,
        Field::PrimaryKeyword,
        Field::SecondaryKeywords,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Field::ApiBase => "api_base",
            Field::SearchQuery => "busqueda",
            Field::Category => "categoria",
            Field::ArticleCount => "num_articulos",
            Field::ItemsPerArticle => "items_por_articulo",
            Field::Topic => "tema",
            Field::PrimaryKeyword => "kw_main",
            Field::SecondaryKeywords => "kw_sec",
        }
    }
}

/// Messages shown in the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    GeneratingArticles,
    Completed,
    GeneratingXml,
    XmlDownloaded,
    GeneratingZip,
    ZipDownloaded,
    CheckingHealth,
    Healthy,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::GeneratingArticles => "Generando artículos...",
            Status::Completed => "Completado",
            Status::GeneratingXml => "Generando XML...",
            Status::XmlDownloaded => "XML descargado",
            Status::GeneratingZip => "Generando ZIP...",
            Status::ZipDownloaded => "ZIP descargado",
            Status::CheckingHealth => "Comprobando API...",
            Status::Healthy => "API disponible",
            Status::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User triggers, one per button of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Export,
}

impl Action {
    pub fn button_id(&self) -> &'static str {
        match self {
            Action::Generate => "btn-generar",
            Action::Export => "btn-exportar",
        }
    }
}

/// Everything the controller reads from or writes to the host document.
pub trait ViewBindings: Send + Sync {
    /// Current raw value of a form input
    fn field(&self, field: Field) -> String;

    fn set_field(&self, field: Field, value: &str);

    /// Replace the text of the status region
    fn set_status(&self, status: Status);

    /// Replace the markup of the preview region
    fn set_preview(&self, html: &str);

    /// Blocking notification outside the preview region
    fn alert(&self, message: &str);

    /// Hand a downloaded payload to the user under `filename`
    fn download(&self, filename: &str, payload: &[u8]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_are_unique() {
        let mut ids: Vec<_> = Field::ALL.iter().map(Field::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Field::ALL.len());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Error.to_string(), "Error");
        assert_eq!(Status::Completed.as_str(), "Completado");
        assert!(Status::Error.is_error());
        assert!(!Status::XmlDownloaded.is_error());
    }
}
