//! Client for the YouTube Data API v3 (playlists, videos, channel stats).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{check_status, http_client, SourceError};
use crate::content::models::{ChannelStats, PlaylistPreview, Thumbnail, VideoPreview};
use crate::content::videos::{playlist_url, watch_url};

const PLATFORM: &str = "YouTube API";

pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    channel_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct ListResponse<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WirePlaylist {
    id: String,
    snippet: WirePlaylistSnippet,
}

#[derive(Debug, Deserialize)]
struct WirePlaylistSnippet {
    title: String,
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
    thumbnails: WireThumbnails,
}

/// A playlistItems entry. A missing playlist reference or video id is a
/// decode failure, surfaced as a data-shape error.
#[derive(Debug, Deserialize)]
struct WirePlaylistItem {
    snippet: WireItemSnippet,
}

#[derive(Debug, Deserialize)]
struct WireItemSnippet {
    title: String,
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
    #[serde(rename = "playlistId")]
    playlist_id: String,
    #[serde(rename = "resourceId")]
    resource_id: WireResourceId,
    thumbnails: WireThumbnails,
}

#[derive(Debug, Deserialize)]
struct WireResourceId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct WireThumbnails {
    high: Option<WireThumbnail>,
    medium: Option<WireThumbnail>,
    default: Option<WireThumbnail>,
}

#[derive(Debug, Deserialize)]
struct WireThumbnail {
    url: String,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct WireChannel {
    statistics: WireStatistics,
}

/// The API returns counters as JSON strings.
#[derive(Debug, Deserialize)]
struct WireStatistics {
    #[serde(rename = "viewCount")]
    view_count: String,
    #[serde(rename = "subscriberCount")]
    subscriber_count: String,
    #[serde(rename = "videoCount")]
    video_count: String,
}

impl WireThumbnails {
    /// Pick the largest available rendition.
    fn best(&self) -> Option<&WireThumbnail> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }

    fn into_thumbnail(self, alt: &str) -> Result<Thumbnail, SourceError> {
        let best = self
            .best()
            .ok_or_else(|| SourceError::shape(PLATFORM, "item has no thumbnail renditions"))?;
        Ok(Thumbnail {
            url: best.url.clone(),
            width: best.width,
            height: best.height,
            alt: alt.to_string(),
        })
    }
}

/// Derive a channel's uploads playlist id from its channel id.
///
/// YouTube exposes every channel's uploads as a playlist whose id is the
/// channel id with the `UC` prefix swapped for `UU`.
#[must_use]
pub fn uploads_playlist_id(channel_id: &str) -> String {
    channel_id
        .strip_prefix("UC")
        .map_or_else(|| channel_id.to_string(), |rest| format!("UU{rest}"))
}

impl YouTubeClient {
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, channel_id: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            channel_id: channel_id.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::request(PLATFORM, e))?;

        check_status(PLATFORM, response)?
            .json()
            .await
            .map_err(|e| SourceError::shape(PLATFORM, e.to_string()))
    }

    /// Fetch the channel's playlists in the platform's natural order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn fetch_playlists(&self) -> Result<Vec<PlaylistPreview>, SourceError> {
        let url = format!(
            "{}/playlists?part=snippet&channelId={}&maxResults=50&key={}",
            self.base_url,
            urlencoding::encode(&self.channel_id),
            urlencoding::encode(&self.api_key),
        );

        let body: ListResponse<WirePlaylist> = self.get_json(&url).await?;
        body.items
            .into_iter()
            .map(WirePlaylist::into_preview)
            .collect()
    }

    /// Fetch one playlist's page of videos, in the platform's order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn fetch_playlist_items(
        &self,
        playlist_id: &str,
    ) -> Result<Vec<VideoPreview>, SourceError> {
        let url = format!(
            "{}/playlistItems?part=snippet&playlistId={}&maxResults=50&key={}",
            self.base_url,
            urlencoding::encode(playlist_id),
            urlencoding::encode(&self.api_key),
        );

        let body: ListResponse<WirePlaylistItem> = self.get_json(&url).await?;
        body.items
            .into_iter()
            .map(WirePlaylistItem::into_preview)
            .collect()
    }

    /// Fetch the most recently uploaded video, if the channel has any.
    ///
    /// Reads the first entry of the channel's uploads playlist.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn latest_video(&self) -> Result<Option<VideoPreview>, SourceError> {
        let uploads = uploads_playlist_id(&self.channel_id);
        let mut videos = self.fetch_playlist_items(&uploads).await?;
        Ok(if videos.is_empty() {
            None
        } else {
            Some(videos.remove(0))
        })
    }

    /// Fetch aggregate channel statistics.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response (including non-numeric counters).
    pub async fn channel_stats(&self) -> Result<ChannelStats, SourceError> {
        let url = format!(
            "{}/channels?part=statistics&id={}&key={}",
            self.base_url,
            urlencoding::encode(&self.channel_id),
            urlencoding::encode(&self.api_key),
        );

        let body: ListResponse<WireChannel> = self.get_json(&url).await?;
        let channel = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::shape(PLATFORM, "channel not found"))?;

        channel.statistics.into_stats()
    }
}

impl WirePlaylist {
    fn into_preview(self) -> Result<PlaylistPreview, SourceError> {
        let url = playlist_url(&self.id);
        let thumbnail = self.snippet.thumbnails.into_thumbnail(&self.snippet.title)?;
        Ok(PlaylistPreview {
            id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            thumbnail,
            url,
            published_at: self.snippet.published_at,
        })
    }
}

impl WirePlaylistItem {
    fn into_preview(self) -> Result<VideoPreview, SourceError> {
        let snippet = self.snippet;
        let video_id = snippet.resource_id.video_id;
        let thumbnail = snippet.thumbnails.into_thumbnail(&snippet.title)?;
        Ok(VideoPreview {
            watch_url: watch_url(&video_id, &snippet.playlist_id),
            id: video_id,
            playlist_id: snippet.playlist_id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnail,
        })
    }
}

impl WireStatistics {
    fn into_stats(self) -> Result<ChannelStats, SourceError> {
        let parse = |name: &str, value: &str| {
            value.parse::<u64>().map_err(|_| {
                SourceError::shape(PLATFORM, format!("{name} is not numeric: '{value}'"))
            })
        };
        Ok(ChannelStats {
            view_count: parse("viewCount", &self.view_count)?,
            subscriber_count: parse("subscriberCount", &self.subscriber_count)?,
            video_count: parse("videoCount", &self.video_count)?,
        })
    }
}
