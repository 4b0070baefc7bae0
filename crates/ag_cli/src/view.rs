use ag_core::{Field, Result, Status, ViewBindings};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};

use crate::cli::FormArgs;

/// Terminal rendition of the form page. Inputs come from the command line, the status
/// line and alerts go to stderr, preview markup goes to stdout or a file.
pub struct TerminalView {
    fields: Mutex<HashMap<Field, String>>,
    preview_out: Option<PathBuf>,
    out_dir: PathBuf,
}

impl TerminalView {
    pub fn new(api_base: &str, form: &FormArgs, out_dir: PathBuf, preview_out: Option<PathBuf>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(Field::ApiBase, api_base.to_string());
        for field in Field::ALL {
            if let Some(value) = form.value(field) {
                fields.insert(field, value.to_string());
            }
        }
        Self {
            fields: Mutex::new(fields),
            preview_out,
            out_dir,
        }
    }

    fn write_preview(&self, html: &str) -> std::io::Result<()> {
        match &self.preview_out {
            Some(path) => std::fs::write(path, html),
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", html)?;
                stdout.flush()
            }
        }
    }
}

impl ViewBindings for TerminalView {
    fn field(&self, field: Field) -> String {
        self.fields
            .lock()
            .map(|fields| fields.get(&field).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn set_field(&self, field: Field, value: &str) {
        if let Ok(mut fields) = self.fields.lock() {
            fields.insert(field, value.to_string());
        }
    }

    fn set_status(&self, status: Status) {
        let emoji = match status {
            Status::Error => "❌",
            Status::Completed | Status::XmlDownloaded | Status::ZipDownloaded | Status::Healthy => "✅",
            _ => "⏳",
        };
        eprintln!("{} {}", emoji, status);
    }

    fn set_preview(&self, html: &str) {
        // Clearing has nothing to erase on a terminal.
        if html.is_empty() && self.preview_out.is_none() {
            return;
        }
        if let Err(e) = self.write_preview(html) {
            warn!("Failed to write preview: {}", e);
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn download(&self, filename: &str, payload: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(filename);
        std::fs::write(&path, payload)?;
        info!("💾 Saved {} bytes to {}", payload.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn form() -> FormArgs {
        FormArgs {
            busqueda: "auriculares".to_string(),
            num_articulos: "2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fields_come_from_args() {
        let view = TerminalView::new("api.example", &form(), PathBuf::from("."), None);
        assert_eq!(view.field(Field::ApiBase), "api.example");
        assert_eq!(view.field(Field::SearchQuery), "auriculares");
        assert_eq!(view.field(Field::ArticleCount), "2");
        assert_eq!(view.field(Field::Topic), "");

        view.set_field(Field::ApiBase, "https://other.example");
        assert_eq!(view.field(Field::ApiBase), "https://other.example");
    }

    #[test]
    fn test_download_writes_into_out_dir() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("exports");
        let view = TerminalView::new("", &form(), out_dir.clone(), None);

        view.download("theobjective_articulos.xml", b"<items/>").unwrap();
        let saved = std::fs::read(out_dir.join("theobjective_articulos.xml")).unwrap();
        assert_eq!(saved, b"<items/>");
    }

    #[test]
    fn test_preview_file_is_replaced() {
        let dir = tempdir().unwrap();
        let preview = dir.path().join("preview.html");
        let view = TerminalView::new("", &form(), dir.path().to_path_buf(), Some(preview.clone()));

        view.set_preview("<p>first</p>");
        view.set_preview("");
        assert_eq!(std::fs::read_to_string(&preview).unwrap(), "");
        view.set_preview("<p>second</p>");
        assert_eq!(std::fs::read_to_string(&preview).unwrap(), "<p>second</p>");
    }
}
