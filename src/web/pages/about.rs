//! About/CV page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, OpenGraphMetadata};
use crate::config::Config;
use crate::theme::Theme;

pub fn render_about(config: &Config, theme: Theme) -> Markup {
    let content = html! {
        section .about {
            h1 { "About" }
            p {
                "I'm " (config.site_author) ", a software engineer who enjoys building "
                "for the web, teaching through videos, and writing things down."
            }

            h2 { "Experience" }
            ul .cv-list {
                li {
                    strong { "Senior Software Engineer" }
                    " · product teams, design systems, and developer tooling"
                }
                li {
                    strong { "Content creator" }
                    " · tutorials and playlists on the channel linked from the learning page"
                }
            }

            h2 { "Elsewhere" }
            p {
                "Everything on this site is aggregated live from the platforms "
                "where it's published: articles from the writing platform, videos "
                "from YouTube, and posts from Bluesky."
            }
            (Button::outline("See what I'm learning").href("/learning"))
            " "
            (Button::outline("Follow the feed").href("/feed"))
        }
    };

    BaseLayout::new("About", &config.site_title, theme)
        .with_active_nav("/about")
        .with_og_metadata(OpenGraphMetadata::new(
            &format!("About - {}", config.site_title),
            "CV and background",
        ))
        .render(content)
}
