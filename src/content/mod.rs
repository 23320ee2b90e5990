//! Content aggregation layer.
//!
//! Pure, synchronous transforms that sit between the external platform
//! clients ([`crate::sources`]) and the maud presentation layer. The four
//! stages are independent and operate on disjoint data domains:
//!
//! - `tags`: derive the de-duplicated tag set (with counts) from articles
//! - `posts`: tag filtering, date ordering, featured split, list windowing
//! - `videos`: playlist/video grouping and playlist reordering
//! - `feed`: social feed merging, embed sanitization, and ordering
//!
//! Every stage takes already-fetched in-memory collections and returns new
//! collections; no I/O happens here.

pub mod feed;
pub mod models;
pub mod posts;
pub mod tags;
pub mod videos;

pub use feed::{normalize_feed, sanitize_embed, FeedShapeError};
pub use models::{
    Article, ChannelStats, Embed, PlaylistPreview, SocialAuthor, SocialPost, SocialProfile, Tag,
    TagColor, TagSummary, Thumbnail, VideoPreview,
};
pub use posts::{filter_by_tag, sort_by_date_desc, split_featured, BlogListState, DisplayMode};
pub use tags::extract_tags;
pub use videos::{group_by_playlist, move_liked_playlist_last, playlist_url, watch_all_url, watch_url};
