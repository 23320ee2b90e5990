//! Home page: hero, latest video, and recent articles.

use maud::{html, Markup};

use crate::components::{ArticleCard, BaseLayout, Button, EmptyState, OpenGraphMetadata, VideoCard};
use crate::config::Config;
use crate::content::models::{Article, VideoPreview};
use crate::theme::Theme;

pub fn render_home(
    config: &Config,
    theme: Theme,
    recent_articles: &[&Article],
    latest_video: Option<&VideoPreview>,
) -> Markup {
    let content = html! {
        section .hero {
            h1 { (config.site_author) }
            p { "Software engineer. I write about what I build and learn in public." }
            (Button::primary("Read the blog").href("/blog"))
            " "
            (Button::outline("About me").href("/about"))
        }

        section .latest-video {
            h2 { "Latest video" }
            @match latest_video {
                Some(video) => { (VideoCard::new(video)) }
                None => { (EmptyState::new("No videos yet.")) }
            }
        }

        section .recent-articles {
            h2 { "Recent articles" }
            @if recent_articles.is_empty() {
                (EmptyState::new("No articles yet."))
            } @else {
                .article-grid {
                    @for article in recent_articles {
                        (ArticleCard::new(article))
                    }
                }
            }
        }
    };

    BaseLayout::new("Home", &config.site_title, theme)
        .with_active_nav("/")
        .with_og_metadata(OpenGraphMetadata::new(
            &config.site_title,
            "Personal portfolio and blog",
        ))
        .render(content)
}
