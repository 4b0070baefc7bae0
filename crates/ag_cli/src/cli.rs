use ag_core::Field;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ag", author, version, about = "Generate affiliate articles through the article API")]
pub struct Cli {
    /// Base address of the article API; blank or localhost values fall back to the saved one
    #[arg(long, global = true, default_value = "")]
    pub api_base: String,
    /// Where the API base is remembered: file or memory
    #[arg(long, global = true, default_value = "file")]
    pub store: String,
    #[arg(long, global = true)]
    pub store_path: Option<PathBuf>,
    /// Directory downloaded exports are written to
    #[arg(long, global = true, default_value = ".")]
    pub out_dir: PathBuf,
    /// Write the preview markup to this file instead of stdout
    #[arg(long, global = true)]
    pub preview_out: Option<PathBuf>,
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(flatten)]
    pub form: FormArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Raw form inputs, kept as text and parsed the same way the form parses them.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Search keywords sent to the product search
    #[arg(long, global = true, default_value = "")]
    pub busqueda: String,
    #[arg(long, global = true, default_value = "")]
    pub categoria: String,
    #[arg(long, global = true, default_value = "1")]
    pub num_articulos: String,
    #[arg(long, global = true, default_value = "5")]
    pub items_por_articulo: String,
    #[arg(long, global = true, default_value = "")]
    pub tema: String,
    /// Primary SEO keyword
    #[arg(long, global = true, default_value = "")]
    pub kw_main: String,
    /// Comma separated secondary keywords
    #[arg(long, global = true, default_value = "")]
    pub kw_sec: String,
}

impl FormArgs {
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::ApiBase => return None,
            Field::SearchQuery => &self.busqueda,
            Field::Category => &self.categoria,
            Field::ArticleCount => &self.num_articulos,
            Field::ItemsPerArticle => &self.items_por_articulo,
            Field::Topic => &self.tema,
            Field::PrimaryKeyword => &self.kw_main,
            Field::SecondaryKeywords => &self.kw_sec,
        };
        Some(value.as_str())
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate articles and print their preview markup
    Generate,
    /// Download the WP All Import export
    Export {
        /// Download the ZIP bundle instead of the XML file
        #[arg(long, default_value_t = false)]
        zip: bool,
    },
    /// Check that the API answers
    Health,
}
