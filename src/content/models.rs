//! Domain models for aggregated content.
//!
//! These are the in-memory shapes the aggregation stages operate on. Wire
//! decoding lives in [`crate::sources`]; by the time a value reaches this
//! layer it is well-formed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article sourced from the content platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    /// URL slug, also used to nominate the featured article.
    pub slug: String,
    pub title: String,
    /// Short abstract shown on listing cards.
    pub description: String,
    pub cover_image: Option<String>,
    /// Decorative emoji shown next to the title.
    pub icon: Option<String>,
    /// Canonical URL of the published article.
    pub canonical_url: String,
    pub published_at: DateTime<Utc>,
    /// Rendered article body (HTML from the content platform).
    pub body_html: Option<String>,
    pub tags: Vec<Tag>,
}

/// A category tag attached to one or more articles.
///
/// Equality is structural over all three fields; tag extraction relies on
/// this when de-duplicating and counting occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: TagColor,
}

/// Palette key classifying a tag's display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Orange,
    Pink,
    Gray,
}

impl TagColor {
    /// CSS class applied to the tag badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Blue => "tag-blue",
            Self::Green => "tag-green",
            Self::Purple => "tag-purple",
            Self::Red => "tag-red",
            Self::Yellow => "tag-yellow",
            Self::Orange => "tag-orange",
            Self::Pink => "tag-pink",
            Self::Gray => "tag-gray",
        }
    }
}

/// A tag together with its derived occurrence count.
///
/// Produced by [`crate::content::tags::extract_tags`]; recomputed on every
/// aggregation pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub id: String,
    /// Display name, lowercased regardless of source casing.
    pub name: String,
    pub color: TagColor,
    /// Number of articles carrying this tag.
    pub count: usize,
}

/// Image metadata for video and playlist thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// A single video within a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPreview {
    pub id: String,
    /// Id of the playlist this video belongs to.
    pub playlist_id: String,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail: Thumbnail,
    /// Canonical watch URL (watch endpoint + video id + playlist id).
    pub watch_url: String,
}

/// Playlist metadata shown on the learning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistPreview {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Thumbnail,
    /// Canonical playlist URL on the video platform.
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Aggregate channel statistics from the video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelStats {
    pub view_count: u64,
    pub subscriber_count: u64,
    pub video_count: u64,
}

/// Author of a social post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAuthor {
    pub did: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

/// Profile summary of the site owner on the social platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialProfile {
    pub did: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub followers_count: u64,
    pub follows_count: u64,
    pub posts_count: u64,
    /// AT URI of the pinned post, resolved separately after the profile.
    pub pinned_post_uri: Option<String>,
}

/// A post from the federated social platform.
///
/// The embed is kept as raw JSON exactly as the platform returned it;
/// [`crate::content::feed::normalize_feed`] round-trips it through
/// serialization so only plain data crosses the render boundary, and the
/// presentation layer decodes it into [`Embed`] for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialPost {
    /// Content-addressed id of the post record.
    pub cid: String,
    /// AT-protocol URI of the post.
    pub uri: String,
    pub author: SocialAuthor,
    pub text: String,
    pub reply_count: u64,
    pub repost_count: u64,
    pub like_count: u64,
    pub embed: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Typed view of a post embed, decoded at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "$type")]
pub enum Embed {
    #[serde(rename = "app.bsky.embed.images#view")]
    Images { images: Vec<EmbedImage> },
    #[serde(rename = "app.bsky.embed.external#view")]
    External { external: ExternalLink },
    #[serde(rename = "app.bsky.embed.video#view")]
    Video(VideoEmbed),
    #[serde(other)]
    Unknown,
}

impl Embed {
    /// Decode a raw embed value into its typed view.
    ///
    /// Returns `None` when the value does not decode; unknown embed kinds
    /// decode to [`Embed::Unknown`] rather than failing.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// An image attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedImage {
    pub thumb: String,
    pub fullsize: String,
    pub alt: Option<String>,
}

/// An external link preview attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLink {
    pub uri: String,
    pub title: String,
    pub description: String,
}

/// A video attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEmbed {
    pub playlist: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: Option<AspectRatio>,
}

/// Aspect ratio of a video embed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}
