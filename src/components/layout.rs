//! Base layout for the web UI.
//!
//! Provides the HTML skeleton, navigation, theme attribute, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::metadata::OpenGraphMetadata;
use crate::theme::Theme;

/// First-paint theme script. The server renders `data-theme` from the
/// cookie; for visitors without a stored preference this falls back to the
/// OS color scheme before the body paints. Must be inline to run early.
const THEME_INIT_SCRIPT: &str = r#"(function() {
    if (!document.cookie.split('; ').some(function(c) { return c.indexOf('theme=') === 0; })
        && window.matchMedia('(prefers-color-scheme: dark)').matches) {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::BaseLayout;
///
/// let content = html! { h1 { "Hello" } };
/// let page = BaseLayout::new("Home", "Jane Doe", theme).render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    site_title: &'a str,
    theme: Theme,
    active_nav: Option<&'a str>,
    og_metadata: Option<OpenGraphMetadata>,
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/blog", "Blog"),
    ("/learning", "Learning"),
    ("/feed", "Feed"),
];

impl<'a> BaseLayout<'a> {
    /// Create a layout with the page title, site title, and resolved theme.
    #[must_use]
    pub fn new(title: &'a str, site_title: &'a str, theme: Theme) -> Self {
        Self {
            title,
            site_title,
            theme,
            active_nav: None,
            og_metadata: None,
        }
    }

    /// Highlight the navigation entry matching this path.
    #[must_use]
    pub fn with_active_nav(mut self, path: &'a str) -> Self {
        self.active_nav = Some(path);
        self
    }

    /// Attach Open Graph metadata for link previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// Render the full page with the given body content.
    #[must_use]
    pub fn render(&self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme=(self.theme.attr()) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - " (self.site_title) }
                    @if let Some(og) = &self.og_metadata {
                        (og)
                    }
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
                    link rel="stylesheet" href="/static/css/style.css";
                    script { (PreEscaped(THEME_INIT_SCRIPT)) }
                }
                body {
                    header .container {
                        nav {
                            ul {
                                li { strong { a href="/" { (self.site_title) } } }
                            }
                            ul {
                                @for (href, label) in NAV_LINKS {
                                    li {
                                        a href=(href)
                                          aria-current=[self.active_nav.filter(|p| p == href).map(|_| "page")] {
                                            (label)
                                        }
                                    }
                                }
                                li { (self.theme_toggle()) }
                            }
                        }
                    }
                    main .container {
                        (content)
                    }
                    footer .container {
                        small { (self.site_title) " · built from content on the open web" }
                    }
                }
            }
        }
    }

    fn theme_toggle(&self) -> Markup {
        let label = match self.theme {
            Theme::Light => "\u{1F319}", // 🌙
            Theme::Dark => "\u{2600}",   // ☀
        };
        html! {
            form .theme-toggle method="post" action="/theme" {
                button .outline type="submit" aria-label="Toggle theme" { (label) }
            }
        }
    }
}
