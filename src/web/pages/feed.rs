//! Social feed page: profile summary, pinned post, and the merged timeline.

use maud::{html, Markup};

use crate::components::{
    format_count, BaseLayout, EmptyState, FeedPostCard, OpenGraphMetadata,
};
use crate::config::Config;
use crate::content::models::{SocialPost, SocialProfile};
use crate::sources::bluesky::post_web_url;
use crate::theme::Theme;

pub fn render_feed(
    config: &Config,
    theme: Theme,
    profile: &SocialProfile,
    pinned: Option<&SocialPost>,
    posts: &[SocialPost],
) -> Markup {
    let profile_name = profile.display_name.as_deref().unwrap_or(&profile.handle);

    let content = html! {
        section .feed {
            header .profile {
                @if let Some(avatar) = &profile.avatar {
                    img .avatar src=(avatar) alt=(profile_name);
                }
                h1 { (profile_name) }
                p { "@" (profile.handle) }
                @if let Some(description) = &profile.description {
                    p { (description) }
                }
                small {
                    (format_count(profile.followers_count)) " followers · "
                    (format_count(profile.follows_count)) " following · "
                    (format_count(profile.posts_count)) " posts"
                }
            }

            @if let Some(pinned) = pinned {
                (FeedPostCard::new(pinned)
                    .with_permalink(post_web_url(&pinned.uri, &pinned.author.handle).as_deref())
                    .pinned())
            }

            @if posts.is_empty() {
                (EmptyState::new("Nothing in the feed yet."))
            } @else {
                .feed-list {
                    @for post in posts {
                        (FeedPostCard::new(post)
                            .with_permalink(post_web_url(&post.uri, &post.author.handle).as_deref()))
                    }
                }
            }
        }
    };

    BaseLayout::new("Feed", &config.site_title, theme)
        .with_active_nav("/feed")
        .with_og_metadata(OpenGraphMetadata::new(
            &format!("Feed - {}", config.site_title),
            "Posts from around the network",
        ))
        .render(content)
}
