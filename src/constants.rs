//! Shared constants used across the application.

/// User agent string sent with outgoing platform API requests.
pub const API_USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));

/// Playlist id of the channel's "liked videos" playlist.
///
/// This playlist is always ordered last on the learning page regardless of
/// where its publish date would place it.
pub const LIKED_VIDEOS_PLAYLIST_ID: &str = "PL7_TxhsAmJhTUuKpYJVyAMGYwU09H6smZ";

/// Number of articles shown before the "show more" control expands the list.
pub const PARTIAL_WINDOW_SIZE: usize = 7;

/// Public YouTube watch endpoint, used to build per-video links.
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";

/// Public YouTube playlist endpoint, used when a playlist has no videos yet.
pub const YOUTUBE_PLAYLIST_URL: &str = "https://www.youtube.com/playlist";
