//! HTML entry point and home page component rewriting

use regex::{Captures, Regex};
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?P<open><title\b[^>]*>).*?(?P<close></title\s*>)")
        .expect("title regex is valid")
});

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?P<open><h1\b[^>]*>).*?(?P<close></h1\s*>)").expect("heading regex is valid")
});

/// Replace the contents of the first `<title>` element
pub fn rewrite_title(content: &str, app_name: &str) -> String {
    replace_element_text(&TITLE_RE, content, app_name)
}

/// Replace the contents of the first `<h1>` element
pub fn rewrite_heading(content: &str, app_name: &str) -> String {
    replace_element_text(&HEADING_RE, content, app_name)
}

fn replace_element_text(re: &Regex, content: &str, text: &str) -> String {
    let escaped = escape_html(text);
    re.replacen(content, 1, |caps: &Captures| {
        format!("{}{}{}", &caps["open"], escaped, &caps["close"])
    })
    .into_owned()
}

/// Escape text for use as HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Front-End Starter</title>
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>
"#;

    const HOME_VUE: &str = r#"<template>
  <main class="home">
    <h1 class="hero__title">
      Front-End Starter
    </h1>
    <p>Edit this page to get started.</p>
    <h1>Second heading</h1>
  </main>
</template>
"#;

    #[test]
    fn test_rewrite_title() {
        let result = rewrite_title(INDEX_HTML, "Acme Tool");
        assert!(result.contains("<title>Acme Tool</title>"));
        assert!(!result.contains("Front-End Starter"));
    }

    #[test]
    fn test_rewrite_title_missing_is_noop() {
        let html = "<html><head></head><body></body></html>";
        assert_eq!(rewrite_title(html, "Acme Tool"), html);
    }

    #[test]
    fn test_rewrite_heading_keeps_attributes_and_first_only() {
        let result = rewrite_heading(HOME_VUE, "Acme Tool");
        assert!(result.contains(r#"<h1 class="hero__title">Acme Tool</h1>"#));
        assert!(result.contains("<h1>Second heading</h1>"));
    }

    #[test]
    fn test_rewrite_heading_ignores_other_levels() {
        let html = "<h2>Sub</h2><h1>Main</h1>";
        assert_eq!(rewrite_heading(html, "New"), "<h2>Sub</h2><h1>New</h1>");
    }

    #[test]
    fn test_escapes_markup() {
        let result = rewrite_title(INDEX_HTML, "Tom & Jerry <3");
        assert!(result.contains("<title>Tom &amp; Jerry &lt;3</title>"));
    }
}
