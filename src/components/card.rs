//! Card components for articles, videos, playlists, feed posts, and stats.

use maud::{html, Markup, Render};

use crate::content::models::{
    Article, Embed, PlaylistPreview, SocialPost, VideoPreview,
};

/// An article summary card for the blog listing.
#[derive(Debug, Clone)]
pub struct ArticleCard<'a> {
    pub article: &'a Article,
    pub featured: bool,
}

impl<'a> ArticleCard<'a> {
    #[must_use]
    pub const fn new(article: &'a Article) -> Self {
        Self {
            article,
            featured: false,
        }
    }

    /// Render with the prominent featured treatment.
    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

impl Render for ArticleCard<'_> {
    fn render(&self) -> Markup {
        let article = self.article;
        let class = if self.featured {
            "article-card featured"
        } else {
            "article-card"
        };

        html! {
            article class=(class) {
                @if self.featured {
                    @if let Some(cover) = &article.cover_image {
                        img src=(cover) alt=(article.title) loading="lazy";
                    }
                }
                h3 {
                    @if let Some(icon) = &article.icon {
                        span .article-icon { (icon) } " "
                    }
                    a href={ "/blog/" (article.slug) } { (article.title) }
                }
                p { (article.description) }
                footer {
                    small { (article.published_at.format("%B %e, %Y")) }
                    @for tag in &article.tags {
                        span class={ "tag " (tag.color.css_class()) } { (tag.name.to_lowercase()) }
                    }
                }
            }
        }
    }
}

/// A video thumbnail card for the learning page.
#[derive(Debug, Clone)]
pub struct VideoCard<'a> {
    pub video: &'a VideoPreview,
}

impl<'a> VideoCard<'a> {
    #[must_use]
    pub const fn new(video: &'a VideoPreview) -> Self {
        Self { video }
    }
}

impl Render for VideoCard<'_> {
    fn render(&self) -> Markup {
        let video = self.video;
        html! {
            article .video-card {
                a href=(video.watch_url) target="_blank" rel="noopener noreferrer" {
                    img src=(video.thumbnail.url)
                        width=(video.thumbnail.width)
                        height=(video.thumbnail.height)
                        alt=(video.thumbnail.alt)
                        loading="lazy";
                    h4 { (video.title) }
                }
                small { (video.published_at.format("%B %e, %Y")) }
            }
        }
    }
}

/// A playlist section header with its "watch all" link.
#[derive(Debug, Clone)]
pub struct PlaylistCard<'a> {
    pub playlist: &'a PlaylistPreview,
    pub watch_all_url: &'a str,
    pub video_count: usize,
}

impl Render for PlaylistCard<'_> {
    fn render(&self) -> Markup {
        let playlist = self.playlist;
        html! {
            header .playlist-header {
                h3 { (playlist.title) }
                @if !playlist.description.is_empty() {
                    p { (playlist.description) }
                }
                a href=(self.watch_all_url) target="_blank" rel="noopener noreferrer" {
                    "Watch all " (self.video_count) " videos"
                }
            }
        }
    }
}

/// A social post card for the feed page.
#[derive(Debug, Clone)]
pub struct FeedPostCard<'a> {
    pub post: &'a SocialPost,
    /// Public web permalink, when the post URI could be resolved to one.
    pub permalink: Option<&'a str>,
    pub pinned: bool,
}

impl<'a> FeedPostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a SocialPost) -> Self {
        Self {
            post,
            permalink: None,
            pinned: false,
        }
    }

    #[must_use]
    pub const fn with_permalink(mut self, permalink: Option<&'a str>) -> Self {
        self.permalink = permalink;
        self
    }

    #[must_use]
    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}

impl Render for FeedPostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let author_name = post
            .author
            .display_name
            .as_deref()
            .unwrap_or(&post.author.handle);

        html! {
            article .feed-post {
                header {
                    @if let Some(avatar) = &post.author.avatar {
                        img .avatar src=(avatar) alt=(author_name) loading="lazy";
                    }
                    strong { (author_name) }
                    " "
                    small { "@" (post.author.handle) }
                    @if self.pinned {
                        span .pin { "\u{1F4CC} pinned" }
                    }
                }
                p { (post.text) }
                @if let Some(embed) = post.embed.as_ref().and_then(Embed::from_value) {
                    (render_embed(&embed))
                }
                footer {
                    small {
                        (post.created_at.format("%B %e, %Y"))
                        " · " (post.reply_count) " replies"
                        " · " (post.repost_count) " reposts"
                        " · " (post.like_count) " likes"
                    }
                    @if let Some(permalink) = self.permalink {
                        " "
                        a href=(permalink) target="_blank" rel="noopener noreferrer" { "View" }
                    }
                }
            }
        }
    }
}

fn render_embed(embed: &Embed) -> Markup {
    match embed {
        Embed::Images { images } => html! {
            .embed-images {
                @for image in images {
                    a href=(image.fullsize) target="_blank" rel="noopener noreferrer" {
                        img src=(image.thumb) alt=(image.alt.as_deref().unwrap_or("")) loading="lazy";
                    }
                }
            }
        },
        Embed::External { external } => html! {
            a .embed-external href=(external.uri) target="_blank" rel="noopener noreferrer" {
                strong { (external.title) }
                p { (external.description) }
            }
        },
        Embed::Video(video) => html! {
            .embed-video {
                @if let Some(thumbnail) = &video.thumbnail {
                    img src=(thumbnail) alt="Video" loading="lazy";
                }
            }
        },
        Embed::Unknown => html! {},
    }
}

/// A single statistic tile (label over value).
#[derive(Debug, Clone)]
pub struct StatsCard<'a> {
    pub label: &'a str,
    pub value: String,
}

impl<'a> StatsCard<'a> {
    #[must_use]
    pub fn new(label: &'a str, value: u64) -> Self {
        Self {
            label,
            value: format_count(value),
        }
    }
}

impl Render for StatsCard<'_> {
    fn render(&self) -> Markup {
        html! {
            .stats-card {
                strong .stats-value { (self.value) }
                small .stats-label { (self.label) }
            }
        }
    }
}

/// Placeholder shown when a listing has nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            .empty-state { p { (self.message) } }
        }
    }
}

/// Format a counter for display: 950 -> "950", 12_340 -> "12.3K",
/// 4_500_000 -> "4.5M".
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(value: u64) -> String {
    match value {
        0..=999 => value.to_string(),
        1_000..=999_999 => format!("{:.1}K", value as f64 / 1_000.0),
        _ => format!("{:.1}M", value as f64 / 1_000_000.0),
    }
}
