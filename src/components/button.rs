//! Button components for the web UI.

use maud::{html, Markup, Render};
use urlencoding::encode;

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
            Self::Ghost => "btn ghost",
        }
    }
}

/// A configurable button that renders as `<a>` when an href is set.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub href: Option<&'a str>,
    pub target_blank: bool,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn primary(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            href: None,
            target_blank: false,
        }
    }

    #[must_use]
    pub const fn outline(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Outline,
            href: None,
            target_blank: false,
        }
    }

    /// Render as a link button pointing at `href`.
    #[must_use]
    pub const fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Open the link in a new tab.
    #[must_use]
    pub const fn target_blank(mut self) -> Self {
        self.target_blank = true;
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.class();
        match self.href {
            Some(href) => html! {
                a class=(class) href=(href)
                  target=[self.target_blank.then_some("_blank")]
                  rel=[self.target_blank.then_some("noopener noreferrer")] {
                    (self.label)
                }
            },
            None => html! {
                button class=(class) type="submit" { (self.label) }
            },
        }
    }
}

/// The "show more" affordance on the blog listing.
///
/// Links back to the listing with `show=all`, preserving the active tag so
/// expanding never changes the filter. Pages render it only when the
/// filtered list exceeds the partial window.
#[derive(Debug, Clone)]
pub struct ShowMoreLink<'a> {
    pub active_tag: Option<&'a str>,
}

impl<'a> ShowMoreLink<'a> {
    #[must_use]
    pub const fn new(active_tag: Option<&'a str>) -> Self {
        Self { active_tag }
    }
}

impl Render for ShowMoreLink<'_> {
    fn render(&self) -> Markup {
        let href = match self.active_tag {
            Some(tag) => format!("/blog?tag={}&show=all", encode(tag)),
            None => "/blog?show=all".to_string(),
        };
        html! {
            a class="btn outline show-more" href=(href) { "Show more" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_button() {
        let markup = Button::outline("Watch all")
            .href("https://example.com")
            .target_blank()
            .render()
            .into_string();
        assert!(markup.contains("<a"));
        assert!(markup.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_plain_button() {
        let markup = Button::primary("Send").render().into_string();
        assert!(markup.contains("<button"));
    }

    #[test]
    fn test_show_more_preserves_filter() {
        let markup = ShowMoreLink::new(Some("rust")).render().into_string();
        assert!(markup.contains(r#"href="/blog?tag=rust&amp;show=all""#));

        let markup = ShowMoreLink::new(None).render().into_string();
        assert!(markup.contains(r#"href="/blog?show=all""#));
    }
}
