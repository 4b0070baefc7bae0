//! Markup for the preview region.

use ag_core::{escape_text, Article, HealthReport};

pub const EMPTY_NOTICE: &str = r#"<div class="alert alert-warning">No se generaron artículos.</div>"#;

/// Renders the generated articles. Titles and subtitles are escaped, bodies are
/// inserted as delivered by the backend.
pub fn render_articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return EMPTY_NOTICE.to_string();
    }
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| render_article(i + 1, article))
        .collect()
}

fn render_article(position: usize, article: &Article) -> String {
    let title = if article.title.is_empty() {
        format!("Artículo {}", position)
    } else {
        article.title.clone()
    };
    format!(
        concat!(
            "<div class=\"mb-4\">\n",
            "  <h4 class=\"mb-1\">{}</h4>\n",
            "  <div class=\"text-muted mb-2\">{}</div>\n",
            "  <div class=\"border rounded p-3 bg-white\" style=\"white-space:pre-wrap\">{}</div>\n",
            "</div>\n"
        ),
        escape_text(&title),
        escape_text(&article.subtitle),
        article.body
    )
}

pub fn render_error(message: &str) -> String {
    format!(r#"<div class="alert alert-danger">{}</div>"#, escape_text(message))
}

pub fn render_health(report: &HealthReport) -> String {
    let rows = [
        ("status", report.status.clone()),
        ("api_paapi_url", report.api_paapi_url.clone()),
        ("gen_content_url", report.gen_content_url.clone()),
        (
            "default_items_per_article",
            report.default_items_per_article.map(|n| n.to_string()),
        ),
        ("default_category", report.default_category.clone()),
    ];
    let items: String = rows
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| format!("  <li><strong>{}</strong>: {}</li>\n", name, escape_text(v)))
        })
        .collect();
    format!("<ul class=\"list-unstyled\">\n{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, subtitle: &str, body: &str) -> Article {
        Article {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_renders_single_notice() {
        let html = render_articles(&[]);
        assert_eq!(html, EMPTY_NOTICE);
        assert_eq!(html.matches("alert-warning").count(), 1);
        assert!(!html.contains("<h4"));
    }

    #[test]
    fn test_title_escaped_body_raw() {
        let html = render_articles(&[article("T<1>", "S&co", "<b>x</b>")]);
        assert!(html.contains("<h4 class=\"mb-1\">T&lt;1&gt;</h4>"));
        assert!(html.contains("<div class=\"text-muted mb-2\">S&amp;co</div>"));
        assert!(html.contains("<b>x</b>"));
    }

    #[test]
    fn test_missing_title_uses_position() {
        let html = render_articles(&[article("Uno", "", "a"), article("", "", "b")]);
        assert!(html.contains(">Uno</h4>"));
        assert!(html.contains(">Artículo 2</h4>"));
        assert_eq!(html.matches("<h4").count(), 2);
    }

    #[test]
    fn test_render_error_escapes() {
        assert_eq!(
            render_error("Error 500: <boom>"),
            r#"<div class="alert alert-danger">Error 500: &lt;boom&gt;</div>"#
        );
    }

    #[test]
    fn test_render_health_skips_missing() {
        let report = HealthReport {
            status: Some("ok".to_string()),
            default_items_per_article: Some(5),
            ..Default::default()
        };
        let html = render_health(&report);
        assert!(html.contains("<strong>status</strong>: ok"));
        assert!(html.contains("<strong>default_items_per_article</strong>: 5"));
        assert!(!html.contains("gen_content_url"));
    }
}
