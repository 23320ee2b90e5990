//! Blog listing page: tag filter bar, featured article, windowed list.

use maud::{html, Markup};

use crate::components::{
    ArticleCard, BaseLayout, EmptyState, OpenGraphMetadata, ShowMoreLink, TagBadge,
};
use crate::config::Config;
use crate::content::models::{Article, TagSummary};
use crate::content::posts::BlogListState;
use crate::theme::Theme;

pub struct BlogPageParams<'a> {
    pub config: &'a Config,
    pub theme: Theme,
    pub tags: &'a [TagSummary],
    /// Featured article, already suppressed by the caller when a filter is
    /// active.
    pub featured: Option<&'a Article>,
    /// The visible window of the filtered, sorted list.
    pub articles: &'a [&'a Article],
    pub list_state: &'a BlogListState,
    /// Whether the filtered list extends beyond the visible window.
    pub show_more: bool,
}

pub fn render_blog(params: BlogPageParams<'_>) -> Markup {
    let active_tag = params.list_state.active_tag();

    let content = html! {
        section .blog {
            h1 { "Blog" }

            .tag-bar {
                @for tag in params.tags {
                    (TagBadge::new(tag).with_active(Some(tag.name.as_str()) == active_tag))
                    " "
                }
            }

            @if let Some(featured) = params.featured {
                section .featured {
                    h2 { "Featured" }
                    (ArticleCard::new(featured).featured())
                }
            }

            @if params.articles.is_empty() {
                (EmptyState::new("No articles match this tag."))
            } @else {
                .article-grid {
                    @for article in params.articles {
                        (ArticleCard::new(article))
                    }
                }
            }

            @if params.show_more {
                (ShowMoreLink::new(active_tag))
            }
        }
    };

    BaseLayout::new("Blog", &params.config.site_title, params.theme)
        .with_active_nav("/blog")
        .with_og_metadata(OpenGraphMetadata::new(
            &format!("Blog - {}", params.config.site_title),
            "Articles on software and the web",
        ))
        .render(content)
}
