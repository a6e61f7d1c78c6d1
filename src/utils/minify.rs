//! HTML minification for written pages.
//!
//! Enabled by `[build] minify`; a disabled minifier hands the input back untouched.

use crate::config::WikiConfig;
use std::borrow::Cow;

/// Minify an HTML document if enabled in config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a str, config: &WikiConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html.as_bytes()))
    } else {
        Cow::Borrowed(html.as_bytes())
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> WikiConfig {
        let mut config = WikiConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_removes_whitespace() {
        let html = "<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_html_disabled() {
        let html = "<html>\n  <body>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(false));

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html.as_bytes());
    }

    #[test]
    fn test_minify_html_shrinks() {
        let html = "<html>\n  <body>\n  <p>Hello World</p>\n  </body>\n</html>";

        let minified = minify(html, &config_with_minify(true));
        let not_minified = minify(html, &config_with_minify(false));

        assert!(minified.len() < not_minified.len());
        assert!(String::from_utf8_lossy(&minified).contains("Hello World"));
    }
}
