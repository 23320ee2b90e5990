//! Playlist/video grouping and playlist ordering for the learning page.

use std::collections::HashMap;

use crate::constants::{YOUTUBE_PLAYLIST_URL, YOUTUBE_WATCH_URL};
use crate::content::models::{PlaylistPreview, VideoPreview};

/// Group per-playlist video pages into a lookup keyed by playlist id.
///
/// Each sub-collection is one playlist's page of videos, already ordered as
/// the platform returned it; that order is preserved, never re-sorted. The
/// map key is read from the first video's playlist reference, so an empty
/// sub-collection contributes no key and is skipped.
#[must_use]
pub fn group_by_playlist(pages: Vec<Vec<VideoPreview>>) -> HashMap<String, Vec<VideoPreview>> {
    let mut grouped = HashMap::with_capacity(pages.len());

    for page in pages {
        let Some(key) = page.first().map(|v| v.playlist_id.clone()) else {
            continue;
        };
        grouped.insert(key, page);
    }

    grouped
}

/// Move the reserved "liked videos" playlist to the end of the list.
///
/// The playlist list arrives in the platform's natural order (publish date
/// descending); the liked-videos playlist is special-cased to always render
/// last. A list without it is returned unchanged. Idempotent: reapplying is
/// a no-op.
pub fn move_liked_playlist_last(playlists: &mut Vec<PlaylistPreview>, liked_playlist_id: &str) {
    if let Some(pos) = playlists.iter().position(|p| p.id == liked_playlist_id) {
        let liked = playlists.remove(pos);
        playlists.push(liked);
    }
}

/// Canonical watch URL for a video within a playlist.
#[must_use]
pub fn watch_url(video_id: &str, playlist_id: &str) -> String {
    format!(
        "{YOUTUBE_WATCH_URL}?v={}&list={}",
        urlencoding::encode(video_id),
        urlencoding::encode(playlist_id)
    )
}

/// "Watch all" URL for a playlist.
///
/// Points at the first video with the playlist as context; a playlist with
/// no videos yet degrades to its plain playlist URL.
#[must_use]
pub fn watch_all_url(playlist: &PlaylistPreview, videos: &[VideoPreview]) -> String {
    videos.first().map_or_else(
        || playlist.url.clone(),
        |first| watch_url(&first.id, &playlist.id),
    )
}

/// Canonical URL of a playlist page on the video platform.
#[must_use]
pub fn playlist_url(playlist_id: &str) -> String {
    format!(
        "{YOUTUBE_PLAYLIST_URL}?list={}",
        urlencoding::encode(playlist_id)
    )
}
