//! Open Graph metadata tags for link previews.

use maud::{html, Markup, Render};

/// Open Graph metadata rendered into the page head.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub image: Option<String>,
}

impl OpenGraphMetadata {
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: truncate_text(description, 200),
            url: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }
}

impl Render for OpenGraphMetadata {
    fn render(&self) -> Markup {
        html! {
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:type" content="website";
            @if let Some(url) = &self.url {
                meta property="og:url" content=(url);
            }
            @if let Some(image) = &self.image {
                meta property="og:image" content=(image);
            }
            meta name="description" content=(self.description);
        }
    }
}

/// Truncate text to at most `max_len` characters, appending an ellipsis.
///
/// Splits on a character boundary, never mid-codepoint.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}\u{2026}", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        let result = truncate_text("hello world", 8);
        assert_eq!(result, "hello w\u{2026}");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let result = truncate_text("héllo wörld étc", 8);
        assert!(result.ends_with('\u{2026}'));
        assert!(result.chars().count() <= 8);
    }
}
