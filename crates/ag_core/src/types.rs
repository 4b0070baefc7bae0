use serde::{Deserialize, Deserializer, Serialize};

/// Body sent to both the generation and the export endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "busqueda")]
    pub search_query: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "num_articulos")]
    pub article_count: u32,
    #[serde(rename = "items_por_articulo")]
    pub items_per_article: u32,
    #[serde(rename = "tema")]
    pub topic: Option<String>,
    #[serde(rename = "palabra_clave_principal")]
    pub primary_keyword: Option<String>,
    #[serde(rename = "palabras_clave_secundarias")]
    pub secondary_keywords: Vec<String>,
}

impl GenerationRequest {
    pub const DEFAULT_ARTICLE_COUNT: u32 = 1;
    pub const DEFAULT_ITEMS_PER_ARTICLE: u32 = 5;
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: String::new(),
            article_count: Self::DEFAULT_ARTICLE_COUNT,
            items_per_article: Self::DEFAULT_ITEMS_PER_ARTICLE,
            topic: None,
            primary_keyword: None,
            secondary_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "titulo", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "subtitulo", default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    /// Raw markup produced by the backend.
    #[serde(rename = "articulo", default, deserialize_with = "null_as_default")]
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(rename = "articulos", default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

/// Answer of the backend `/health` probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub api_paapi_url: Option<String>,
    #[serde(default)]
    pub gen_content_url: Option<String>,
    #[serde(default)]
    pub default_items_per_article: Option<u32>,
    #[serde(default)]
    pub default_category: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
