//! Single article page.

use maud::{html, Markup, PreEscaped};

use crate::components::{BaseLayout, OpenGraphMetadata};
use crate::config::Config;
use crate::content::models::Article;
use crate::theme::Theme;

pub fn render_article(config: &Config, theme: Theme, article: &Article) -> Markup {
    let content = html! {
        article .article-page {
            header {
                @if let Some(cover) = &article.cover_image {
                    img src=(cover) alt=(article.title);
                }
                h1 {
                    @if let Some(icon) = &article.icon {
                        span .article-icon { (icon) } " "
                    }
                    (article.title)
                }
                p .lede { (article.description) }
                small { (article.published_at.format("%B %e, %Y")) }
                .tags {
                    @for tag in &article.tags {
                        span class={ "tag " (tag.color.css_class()) } { (tag.name.to_lowercase()) }
                    }
                }
            }

            @match &article.body_html {
                // Body HTML comes from the trusted content platform.
                Some(body) => { .article-body { (PreEscaped(body.clone())) } }
                None => {
                    p {
                        "This article lives on another platform. "
                        a href=(article.canonical_url) target="_blank" rel="noopener noreferrer" {
                            "Read it there"
                        }
                        "."
                    }
                }
            }
        }
    };

    let mut og = OpenGraphMetadata::new(&article.title, &article.description)
        .with_url(&article.canonical_url);
    if let Some(cover) = &article.cover_image {
        og = og.with_image(cover);
    }

    BaseLayout::new(&article.title, &config.site_title, theme)
        .with_active_nav("/blog")
        .with_og_metadata(og)
        .render(content)
}
