//! String helpers shared by the controller and the renderer.

/// Normalizes a user supplied API base address.
///
/// Surrounding whitespace is trimmed and an empty input is returned as is. Inputs
/// without an `http://` or `https://` prefix get `https://` prepended, and exactly one
/// trailing slash is removed.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    match with_scheme.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => with_scheme,
    }
}

/// Escapes text for insertion into HTML.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits a comma separated keyword list, dropping blank entries.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a leading integer the lenient way form inputs are read: whitespace and an
/// optional sign are accepted, trailing characters are ignored. Anything that does not
/// produce a value of at least 1 falls back to `default`.
pub fn parse_count(input: &str, default: u32) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return default;
    }
    match digits[..end].parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com/"), "https://example.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("https://x.com/api/"), "https://x.com/api");
        assert_eq!(normalize_url("  x.com  "), "https://x.com");
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("  "), "");
    }

    #[test]
    fn test_normalize_url_strips_one_slash_only() {
        assert_eq!(normalize_url("https://x.com//"), "https://x.com/");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_text("Artículo 1"), "Artículo 1");
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", 1), 3);
        assert_eq!(parse_count(" 7 articles", 1), 7);
        assert_eq!(parse_count("+2", 1), 2);
        assert_eq!(parse_count("", 5), 5);
        assert_eq!(parse_count("abc", 5), 5);
        assert_eq!(parse_count("0", 1), 1);
        assert_eq!(parse_count("-4", 5), 5);
    }
}
